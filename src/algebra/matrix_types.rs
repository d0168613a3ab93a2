#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algebra::CholeskySolveError;

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Matrix shape marker for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MatrixTriangle {
    /// Upper triangular matrix
    Triu,
    /// Lower triangular matrix
    Tril,
}

/// Side from which a triangular operator is applied
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixSide {
    /// op(T)·X
    Left,
    /// X·op(T)
    Right,
}

/// Diagonal convention for triangular matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixDiag {
    /// diagonal entries are read from storage
    NonUnit,
    /// diagonal entries are taken to be one and never read
    Unit,
}

impl MatrixShape {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixShape::N => b'N',
            MatrixShape::T => b'T',
        }
    }
}

impl MatrixTriangle {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixTriangle::Triu => b'U',
            MatrixTriangle::Tril => b'L',
        }
    }

    /// the triangle occupied by the transpose
    pub fn transpose(&self) -> Self {
        match self {
            MatrixTriangle::Triu => MatrixTriangle::Tril,
            MatrixTriangle::Tril => MatrixTriangle::Triu,
        }
    }
}

impl MatrixSide {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixSide::Left => b'L',
            MatrixSide::Right => b'R',
        }
    }

    pub fn flip(&self) -> Self {
        match self {
            MatrixSide::Left => MatrixSide::Right,
            MatrixSide::Right => MatrixSide::Left,
        }
    }
}

impl MatrixDiag {
    pub fn as_blas_char(&self) -> u8 {
        match self {
            MatrixDiag::NonUnit => b'N',
            MatrixDiag::Unit => b'U',
        }
    }
}

/// Parses a BLAS style `uplo` character.  Both cases are accepted.
impl TryFrom<u8> for MatrixTriangle {
    type Error = CholeskySolveError;

    fn try_from(uplo: u8) -> Result<Self, Self::Error> {
        match uplo {
            b'U' | b'u' => Ok(MatrixTriangle::Triu),
            b'L' | b'l' => Ok(MatrixTriangle::Tril),
            _ => Err(CholeskySolveError::InvalidMode(uplo)),
        }
    }
}

#[test]
fn test_triangle_from_blas_char() {
    for tri in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
        assert_eq!(MatrixTriangle::try_from(tri.as_blas_char()).unwrap(), tri);
    }
    assert_eq!(MatrixTriangle::try_from(b'l').unwrap(), MatrixTriangle::Tril);
    assert!(matches!(
        MatrixTriangle::try_from(b'X'),
        Err(CholeskySolveError::InvalidMode(b'X'))
    ));
    assert_eq!(MatrixTriangle::Triu.transpose(), MatrixTriangle::Tril);
    assert_eq!(MatrixSide::Left.flip(), MatrixSide::Right);
}
