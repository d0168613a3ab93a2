//! __cholsolve__ solves dense symmetric positive definite systems
//!
//! $$
//! A X = B
//! $$
//!
//! given a precomputed Cholesky factorization of $A$, either
//! $A = U^\top U$ with $U$ upper triangular or $A = L L^\top$ with $L$
//! lower triangular.  The solution is computed by two triangular solves
//! and overwrites $B$ in place.
//!
//! Matrices are dense, row major and strided, so that the factor and the
//! right hand side may be submatrices of larger buffers.  Only the
//! triangle of the factor named by the solve mode is ever read.
//!
//! ## Usage
//!
//! The low level entry point [`potrs`](algebra::potrs) works directly on
//! caller owned slices with an explicitly supplied triangular solver.
//! The [`CholeskySolver`](solver::CholeskySolver) engine owns a factor and
//! chooses its triangular solve backend from
//! [`CholeskySettings`](solver::CholeskySettings).
//!
//! ## Features
//!
//! * `serde` (default): serialization of settings.
//! * `blas`: triangular solves through BLAS `?trsm`.  Select a BLAS
//!   provider with one of `blas-openblas`, `blas-netlib`, `blas-mkl` or
//!   `blas-accelerate`.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

pub mod algebra;
pub mod solver;
