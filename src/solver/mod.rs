//! Cholesky solver engine.
//!
//! [`CholeskySolver`] owns a precomputed Cholesky factor and solves
//! systems `A·X = B` against it, using a triangular solve backend chosen
//! through [`CholeskySettings`].  The backend is selected by name so
//! that BLAS can be used where it has been compiled in, with the native
//! solver available everywhere.
//!
//! For solving directly against caller owned buffers, see
//! [`potrs`](crate::algebra::potrs).

mod cholesky;
mod settings;
mod trisolvers;

pub use cholesky::*;
pub use settings::*;
pub use trisolvers::*;
