mod checks;
pub use checks::*;
mod core;
mod gemm;
pub use gemm::*;
mod potrs;
pub use potrs::*;
mod triangular;
pub use triangular::*;
mod types;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "blas")] {
        mod blas;
        pub use blas::*;
    }
}
