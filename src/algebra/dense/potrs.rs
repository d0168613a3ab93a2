#![allow(non_snake_case)]
#![allow(clippy::too_many_arguments)]

use crate::algebra::*;

/// Solves `A·X = B` for symmetric positive definite `A`, given its
/// Cholesky factorization
///
/// ```text
///  A = Uᵗ·U   if uplo == Triu
///  A = L·Lᵗ   if uplo == Tril
/// ```
///
/// The factor is n×n with row stride `lda`, and only the triangle given
/// by `uplo` is read.  `B` is n×nrhs with row stride `ldb`.  On entry `b`
/// holds the right hand side, and on successful return it holds `X`.
///
/// Both strides and buffer lengths are validated before `b` is touched.
/// If `n == 0` or `nrhs == 0` there is nothing to solve and `b` is left
/// unchanged.
///
/// The two triangular solves are delegated to `trsm`.  A zero diagonal in
/// the factor is not checked here; any failure reported by `trsm` is
/// returned as [`CholeskySolveError::Numerical`], and `b` may then hold
/// intermediate values.
pub fn potrs<T, S>(
    trsm: &S,
    uplo: MatrixTriangle,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<(), CholeskySolveError>
where
    T: FloatT,
    S: TriangularSolve<T> + ?Sized,
{
    check_matrix(n, n, a, lda)?;
    check_matrix(n, nrhs, b, ldb)?;

    if n == 0 || nrhs == 0 {
        log::debug!("potrs: empty system ({n}x{nrhs}), nothing to solve");
        return Ok(());
    }

    // Triu: solve Uᵗ·Y = B, then U·X = Y
    // Tril: solve L·Y = B,  then Lᵗ·X = Y
    let (first, second) = match uplo {
        MatrixTriangle::Triu => (MatrixShape::T, MatrixShape::N),
        MatrixTriangle::Tril => (MatrixShape::N, MatrixShape::T),
    };

    for trans in [first, second] {
        log::trace!(
            "potrs: trsm side=L uplo={} trans={} n={n} nrhs={nrhs}",
            uplo.as_blas_char() as char,
            trans.as_blas_char() as char
        );
        trsm.trsm(
            MatrixSide::Left,
            uplo,
            trans,
            MatrixDiag::NonUnit,
            n,
            nrhs,
            T::one(),
            a,
            lda,
            b,
            ldb,
        )?;
    }

    Ok(())
}

/// Solves `A·X = B` from a Cholesky factor, with the triangle given as a
/// BLAS style character.
///
/// Accepts `b'U'` or `b'L'` (either case) and otherwise behaves exactly as
/// [`potrs`].  Any other character fails with
/// [`CholeskySolveError::InvalidMode`] before any other check is made.
pub fn xpotrs<T, S>(
    trsm: &S,
    uplo: u8,
    n: usize,
    nrhs: usize,
    a: &[T],
    lda: usize,
    b: &mut [T],
    ldb: usize,
) -> Result<(), CholeskySolveError>
where
    T: FloatT,
    S: TriangularSolve<T> + ?Sized,
{
    let uplo = MatrixTriangle::try_from(uplo)?;
    potrs(trsm, uplo, n, nrhs, a, lda, b, ldb)
}
