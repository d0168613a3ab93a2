#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

use crate::algebra::*;

/// Triangular solver backed by BLAS `?trsm`.
///
/// BLAS is column major, while matrices here are row major.  A row major
/// buffer read as column major is the transpose of the matrix it holds, so
///
/// ```text
/// op(A)·X = αB   ⇔   Xᵗ·op(A)ᵗ = αBᵗ
/// ```
///
/// and the call is forwarded with the side and triangle flipped, the
/// transpose flag unchanged and the dimensions of `B` swapped.
///
/// Reference BLAS does not check for singularity, so a zero diagonal
/// produces non-finite values in `B` rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlasTriangularSolver;

impl BlasTriangularSolver {
    pub fn new() -> Self {
        Self
    }
}

impl<T> TriangularSolve<T> for BlasTriangularSolver
where
    T: FloatT,
{
    fn trsm(
        &self,
        side: MatrixSide,
        uplo: MatrixTriangle,
        trans: MatrixShape,
        diag: MatrixDiag,
        m: usize,
        n: usize,
        α: T,
        a: &[T],
        lda: usize,
        b: &mut [T],
        ldb: usize,
    ) -> Result<(), TriangularSolveError> {
        let k = match side {
            MatrixSide::Left => m,
            MatrixSide::Right => n,
        };
        check_matrix(k, k, a, lda)?;
        check_matrix(m, n, b, ldb)?;

        if m == 0 || n == 0 {
            return Ok(());
        }

        let to_blas_int = |x: usize| -> Result<i32, TriangularSolveError> {
            x.try_into().map_err(|_| TriangularSolveError::IndexOverflow)
        };

        // standard BLAS ?trsm arguments, for the transposed
        // (column major) problem
        let side = side.flip().as_blas_char();
        let uplo = uplo.transpose().as_blas_char();
        let transa = trans.as_blas_char();
        let diag = diag.as_blas_char();
        let bm = to_blas_int(n)?;
        let bn = to_blas_int(m)?;
        let lda = to_blas_int(lda)?;
        let ldb = to_blas_int(ldb)?;

        T::xtrsm(side, uplo, transa, diag, bm, bn, α, a, lda, b, ldb);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // compares against the native solver on every configuration
    #[test]
    fn test_blas_trsm_matches_native() {
        #[rustfmt::skip]
        let A = Matrix::<f64>::from(&[
            [ 2.0, -1.0, 0.5],
            [ 0.3,  1.5, 1.0],
            [-0.7,  0.2, 3.0]]);
        for side in [MatrixSide::Left, MatrixSide::Right] {
            // non square B to check the dimension swap
            let B0 = match side {
                MatrixSide::Left => Matrix::<f64>::from(&[[1., -2.], [3., 0.5], [-1., 4.]]),
                MatrixSide::Right => Matrix::<f64>::from(&[[1., 3., -1.], [-2., 0.5, 4.]]),
            };
            let (m, n) = B0.size();
            for uplo in [MatrixTriangle::Triu, MatrixTriangle::Tril] {
                for trans in [MatrixShape::N, MatrixShape::T] {
                    for diag in [MatrixDiag::NonUnit, MatrixDiag::Unit] {
                        let mut B1 = B0.clone();
                        let mut B2 = B0.clone();
                        NativeTriangularSolver
                            .trsm(side, uplo, trans, diag, m, n, 1.5, A.data(), 3, B1.data_mut(), n)
                            .unwrap();
                        BlasTriangularSolver
                            .trsm(side, uplo, trans, diag, m, n, 1.5, A.data(), 3, B2.data_mut(), n)
                            .unwrap();
                        assert!(B1.data().norm_inf_diff(B2.data()) < 1e-12);
                    }
                }
            }
        }
    }
}
