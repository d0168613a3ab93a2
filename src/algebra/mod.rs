//! Dense linear algebra supporting Cholesky solves.
//!
//! All matrices here are dense and stored in row major order with
//! an explicit row stride (leading dimension), following the usual
//! C / CBLAS row-major convention.  This allows submatrix views
//! of larger buffers to be passed without copying.
//!
//! The module provides the shape validator [`check_matrix`], the
//! triangular solve capability [`TriangularSolve`] with native and
//! (optionally) BLAS backed implementations, and the Cholesky solve
//! itself in [`potrs`] / [`xpotrs`].

mod adjoint;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod matrix_types;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;
pub use matrix_types::*;
