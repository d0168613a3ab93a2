#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

use crate::algebra::*;

/// Triangular solve with multiple right hand sides, in place.
///
/// Solves one of
///
/// ```text
/// op(A)·X = αB    (side = Left,  A is m×m)
/// X·op(A) = αB    (side = Right, A is n×n)
/// ```
///
/// where `B` is m×n, `op(A)` is `A` or `Aᵗ`, and `A` is upper or lower
/// triangular.  Only the triangle of `A` given by `uplo` is referenced,
/// and its diagonal is not referenced at all for `MatrixDiag::Unit`.
/// All matrices are row major with row strides `lda` and `ldb`.  On
/// return `B` is overwritten with `X`.
///
/// Implementors may report numerical failures, but are not required to.
/// On failure the contents of `b` are unspecified.
pub trait TriangularSolve<T: FloatT> {
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
    ) -> Result<(), TriangularSolveError>;
}

pub type BoxedTriangularSolver<T> = Box<dyn TriangularSolve<T> + Send + Sync>;

/// Pure Rust triangular solver based on forward / back substitution.
///
/// Supports every side / triangle / transpose / diagonal combination and
/// arbitrary `α`.  An exactly zero diagonal entry in a non-unit solve is
/// reported as [`TriangularSolveError::SingularFactor`], at which point
/// the rows (or columns) of `B` already processed hold intermediate values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTriangularSolver;

impl NativeTriangularSolver {
    pub fn new() -> Self {
        Self
    }
}

impl<T> TriangularSolve<T> for NativeTriangularSolver
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

        // A is not referenced at all when α = 0
        if α == T::zero() {
            for i in 0..m {
                b[i * ldb..i * ldb + n].set(T::zero());
            }
            return Ok(());
        }
        if α != T::one() {
            for i in 0..m {
                b[i * ldb..i * ldb + n].scale(α);
            }
        }

        let tri = TriangularOperator {
            a,
            lda,
            upper: uplo == MatrixTriangle::Triu,
            unit: diag == MatrixDiag::Unit,
        };

        match side {
            MatrixSide::Left => tri.solve_left(trans, m, n, b, ldb),
            MatrixSide::Right => tri.solve_right(trans, m, n, b, ldb),
        }
    }
}

// borrowed triangular operand, with the settings fixed for one solve
struct TriangularOperator<'a, T> {
    a: &'a [T],
    lda: usize,
    upper: bool,
    unit: bool,
}

impl<T> TriangularOperator<'_, T>
where
    T: FloatT,
{
    #[inline]
    fn at(&self, i: usize, j: usize) -> T {
        self.a[i * self.lda + j]
    }

    #[inline]
    fn pivot(&self, i: usize) -> Result<T, TriangularSolveError> {
        let d = self.at(i, i);
        if d == T::zero() {
            Err(TriangularSolveError::SingularFactor { index: i })
        } else {
            Ok(d)
        }
    }

    // op(A)·X = B with A m×m.  Operates on whole rows of B.
    fn solve_left(
        &self,
        trans: MatrixShape,
        m: usize,
        n: usize,
        b: &mut [T],
        ldb: usize,
    ) -> Result<(), TriangularSolveError> {
        match trans {
            MatrixShape::N => {
                // x_i = (b_i - Σ a_ik x_k) / a_ii, sweeping away
                // from the corner where the triangle is narrowest
                for step in 0..m {
                    let i = if self.upper { m - 1 - step } else { step };
                    let cols = if self.upper { i + 1..m } else { 0..i };
                    for k in cols {
                        let aik = self.at(i, k);
                        if aik != T::zero() {
                            row_axpy(b, ldb, n, i, k, -aik);
                        }
                    }
                    if !self.unit {
                        let d = self.pivot(i)?;
                        b[i * ldb..i * ldb + n].scalarop(|x| x / d);
                    }
                }
            }
            MatrixShape::T => {
                // column sweep on A: finalise x_k, then eliminate
                // it from the rows that depend on it
                for step in 0..m {
                    let k = if self.upper { step } else { m - 1 - step };
                    if !self.unit {
                        let d = self.pivot(k)?;
                        b[k * ldb..k * ldb + n].scalarop(|x| x / d);
                    }
                    let rows = if self.upper { k + 1..m } else { 0..k };
                    for i in rows {
                        let aki = self.at(k, i);
                        if aki != T::zero() {
                            row_axpy(b, ldb, n, i, k, -aki);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    // X·op(A) = B with A n×n.  Each row of B is an independent system.
    fn solve_right(
        &self,
        trans: MatrixShape,
        m: usize,
        n: usize,
        b: &mut [T],
        ldb: usize,
    ) -> Result<(), TriangularSolveError> {
        for r in 0..m {
            let x = &mut b[r * ldb..r * ldb + n];
            match trans {
                MatrixShape::N => {
                    for step in 0..n {
                        let k = if self.upper { step } else { n - 1 - step };
                        if !self.unit {
                            x[k] /= self.pivot(k)?;
                        }
                        let xk = x[k];
                        let cols = if self.upper { k + 1..n } else { 0..k };
                        for j in cols {
                            x[j] -= xk * self.at(k, j);
                        }
                    }
                }
                MatrixShape::T => {
                    for step in 0..n {
                        let j = if self.upper { n - 1 - step } else { step };
                        let cols = if self.upper { j + 1..n } else { 0..j };
                        let row = &self.a[j * self.lda..j * self.lda + n];
                        let s = x[j] - row[cols.clone()].dot(&x[cols]);
                        x[j] = if self.unit { s } else { s / self.pivot(j)? };
                    }
                }
            }
        }
        Ok(())
    }
}

// b[dst,:] += c * b[src,:] for distinct rows of a row major buffer
fn row_axpy<T: FloatT>(b: &mut [T], ldb: usize, n: usize, dst: usize, src: usize, c: T) {
    debug_assert_ne!(dst, src);
    let (y, x) = if dst < src {
        let (lo, hi) = b.split_at_mut(src * ldb);
        (&mut lo[dst * ldb..dst * ldb + n], &hi[..n])
    } else {
        let (lo, hi) = b.split_at_mut(dst * ldb);
        (&mut hi[..n], &lo[src * ldb..src * ldb + n])
    };
    y.axpby(c, x, T::one());
}
