use thiserror::Error;

use crate::solver::SettingsError;

/// Error type returned by shape validation of dense buffers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    /// Row stride is smaller than `max(1, cols)`
    #[error("Stride {stride} is less than max(1, {cols})")]
    BadStride { stride: usize, cols: usize },
    /// Data slice cannot hold the declared matrix
    #[error("Buffer of length {len} is shorter than the {required} elements required")]
    ShortBuffer { len: usize, required: usize },
    /// Extent of the matrix in memory does not fit in a `usize`
    #[error("Matrix of size {rows}x{cols} with stride {stride} overflows the address space")]
    SizeOverflow {
        rows: usize,
        cols: usize,
        stride: usize,
    },
    /// A square matrix was required
    #[error("Matrix of size {nrows}x{ncols} is not square")]
    NotSquare { nrows: usize, ncols: usize },
    /// Operand row dimension disagrees with the factor
    #[error("Expected {expected} rows, got {got}")]
    IncompatibleRows { expected: usize, got: usize },
}

/// Error type returned by [`TriangularSolve`](crate::algebra::TriangularSolve)
/// providers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangularSolveError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    /// Exactly zero diagonal entry in a non-unit triangular operator
    #[error("Triangular factor is singular (zero diagonal at index {index})")]
    SingularFactor { index: usize },
    /// Dimension or stride does not fit in a BLAS integer
    #[error("Matrix dimension exceeds the BLAS integer range")]
    IndexOverflow,
}

/// Error type returned by solves from a Cholesky factor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CholeskySolveError {
    /// Unrecognised triangle specifier
    #[error("Invalid triangle specifier {:?}", mode_char(.0))]
    InvalidMode(u8),
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    /// Failure reported by the triangular solver, passed through unchanged
    #[error("Triangular solve failed: {0}")]
    Numerical(#[from] TriangularSolveError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

fn mode_char(mode: &u8) -> char {
    char::from(*mode)
}
