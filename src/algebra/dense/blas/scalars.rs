#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(clippy::too_many_arguments)]

// standard imports via blas-rs crates
extern crate blas_src;
use blas::*;

/// Floating point types with BLAS support (f32 and f64)
pub trait BlasFloatT:
    private::BlasFloatSealed
    + XtrsmScalar
{}

impl BlasFloatT for f32 {}
impl BlasFloatT for f64 {}

mod private {
    pub trait BlasFloatSealed {}
    impl BlasFloatSealed for f32 {}
    impl BlasFloatSealed for f64 {}
}

// --------------------------------------
// ?trsm : triangular solve, multiple RHS
// --------------------------------------

pub trait XtrsmScalar: Sized {
    fn xtrsm(
        side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: Self,
        a: &[Self], lda: i32, b: &mut [Self], ldb: i32
    );
}

macro_rules! impl_blas_xtrsm {
    ($T:ty, $XTRSM:path) => {
        impl XtrsmScalar for $T {
            fn xtrsm(
                side: u8, uplo: u8, transa: u8, diag: u8, m: i32, n: i32, alpha: Self,
                a: &[Self], lda: i32, b: &mut [Self], ldb: i32
            ) {
                unsafe {
                    $XTRSM(
                        side, uplo, transa, diag, m, n, alpha, a, lda, b, ldb
                    );
                }
            }
        }
    };
}

impl_blas_xtrsm!(f32, strsm);
impl_blas_xtrsm!(f64, dtrsm);
