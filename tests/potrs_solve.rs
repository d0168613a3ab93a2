#![allow(non_snake_case)]
use cholsolve::algebra::*;

// solves against caller owned buffers through the free functions

fn upper_factor() -> Matrix<f64> {
    #[rustfmt::skip]
    let U = Matrix::from(&[
        [3.0, 1.0, -1.0,  0.5],
        [0.0, 2.0,  0.5,  1.0],
        [0.0, 0.0,  1.5, -0.5],
        [0.0, 0.0,  0.0,  1.0]]);
    U
}

// builds B = A·X with A = UᵗU, returning (A, B)
fn rhs_from_solution(U: &Matrix<f64>, X: &Matrix<f64>) -> (Matrix<f64>, Matrix<f64>) {
    let n = U.nrows();
    let mut A = Matrix::<f64>::zeros((n, n));
    A.mul(&U.t(), U, 1.0, 0.0);
    let mut B = Matrix::<f64>::zeros(X.size());
    B.mul(&A, X, 1.0, 0.0);
    (A, B)
}

#[test]
fn potrs_upper_multiple_rhs() {
    let U = upper_factor();
    #[rustfmt::skip]
    let X = Matrix::from(&[
        [ 1.0, -2.0, 0.0],
        [ 0.5,  1.0, 3.0],
        [-1.0,  4.0, 1.0],
        [ 2.0,  0.0, -1.0]]);
    let (_, mut B) = rhs_from_solution(&U, &X);

    potrs(
        &NativeTriangularSolver,
        MatrixTriangle::Triu,
        4,
        3,
        U.data(),
        4,
        B.data_mut(),
        3,
    )
    .unwrap();

    assert!(B.data().norm_inf_diff(X.data()) < 1e-10);
}

#[test]
fn potrs_lower_matches_upper() {
    // the same system solved from L = Uᵗ
    let U = upper_factor();
    let mut L = Matrix::<f64>::zeros((4, 4));
    for i in 0..4 {
        for j in 0..4 {
            L[(i, j)] = U[(j, i)];
        }
    }
    let X = Matrix::from(&[[1.0], [2.0], [3.0], [4.0]]);
    let (_, B) = rhs_from_solution(&U, &X);

    let mut b1 = B.data().to_vec();
    let mut b2 = B.data().to_vec();
    xpotrs(&NativeTriangularSolver, b'U', 4, 1, U.data(), 4, &mut b1, 1).unwrap();
    xpotrs(&NativeTriangularSolver, b'l', 4, 1, L.data(), 4, &mut b2, 1).unwrap();

    assert!(b1.norm_inf_diff(X.data()) < 1e-10);
    assert!(b2.norm_inf_diff(X.data()) < 1e-10);
}

#[test]
fn potrs_scalar_system() {
    // A = 4 = 2·2, so x = b/4
    let a = [2.0];
    let mut b = [8.0, -2.0];
    potrs(&NativeTriangularSolver, MatrixTriangle::Tril, 1, 2, &a, 1, &mut b, 2).unwrap();
    assert_eq!(b, [2.0, -0.5]);

    let mut b = [8.0, -2.0];
    xpotrs(&NativeTriangularSolver, b'u', 1, 2, &a, 1, &mut b, 2).unwrap();
    assert_eq!(b, [2.0, -0.5]);
}

#[test]
fn potrs_strided_submatrices() {
    // factor embedded in a 3x5 buffer, B as 3x2 in a buffer with stride 4
    let U = upper_factor();
    let mut a = vec![f64::NAN; 3 * 5];
    for i in 0..3 {
        for j in i..3 {
            a[i * 5 + j] = U[(i, j)];
        }
    }

    let X = Matrix::from(&[[1.0, 0.0], [-1.0, 2.0], [0.5, 1.0]]);
    let mut U3 = Matrix::<f64>::zeros((3, 3));
    for i in 0..3 {
        for j in 0..3 {
            U3[(i, j)] = U[(i, j)];
        }
    }
    let (_, B) = rhs_from_solution(&U3, &X);

    let pad = -7.0;
    let mut b = vec![pad; 4 * 2 + 2];
    for i in 0..3 {
        b[i * 4..i * 4 + 2].copy_from_slice(B.row_slice(i));
    }

    potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 3, 2, &a, 5, &mut b, 4).unwrap();

    let view = BorrowedMatrix::from_slice(&b, 3, 2, 4).unwrap();
    for i in 0..3 {
        assert!(view.row_slice(i).norm_inf_diff(X.row_slice(i)) < 1e-10);
    }
    // padding columns are not written
    assert_eq!(&b[2..4], &[pad, pad]);
    assert_eq!(&b[6..8], &[pad, pad]);
}

#[test]
fn potrs_empty_is_noop() {
    let mut b = [1.0, 2.0];
    potrs::<f64, _>(&NativeTriangularSolver, MatrixTriangle::Triu, 0, 2, &[], 1, &mut b, 2)
        .unwrap();
    assert_eq!(b, [1.0, 2.0]);

    // n rows of width zero still need stride*(n-1) elements
    let a = [2.0, 0.0, 1.0, 3.0];
    let mut b = [5.0];
    potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 0, &a, 2, &mut b, 1).unwrap();
    assert_eq!(b, [5.0]);
}

#[test]
fn potrs_dimension_errors() {
    let a = [2.0, 1.0, 0.0, 3.0];

    // lda < n
    let mut b = [1.0, 1.0];
    assert_eq!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 1, &a, 1, &mut b, 1),
        Err(CholeskySolveError::Dimension(DimensionError::BadStride { stride: 1, cols: 2 }))
    );
    assert_eq!(b, [1.0, 1.0]);

    // ldb < nrhs
    let mut b = [1.0; 4];
    assert!(matches!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 2, &a, 2, &mut b, 1),
        Err(CholeskySolveError::Dimension(DimensionError::BadStride { .. }))
    ));

    // b too short for n rows
    let mut b = [1.0];
    assert!(matches!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 1, &a, 2, &mut b, 1),
        Err(CholeskySolveError::Dimension(DimensionError::ShortBuffer { len: 1, required: 2 }))
    ));

    // a too short for the factor
    let mut b = [1.0, 1.0];
    assert!(matches!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Tril, 2, 1, &a[..3], 2, &mut b, 1),
        Err(CholeskySolveError::Dimension(DimensionError::ShortBuffer { len: 3, required: 4 }))
    ));
    assert_eq!(b, [1.0, 1.0]);

    // strides whose extent overflows usize are rejected, not wrapped
    let mut b = [1.0, 1.0];
    assert!(matches!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 1, &a, 2, &mut b, usize::MAX),
        Err(CholeskySolveError::Dimension(DimensionError::SizeOverflow { .. }))
    ));
    assert!(matches!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Tril, 2, 1, &a, usize::MAX, &mut b, 1),
        Err(CholeskySolveError::Dimension(DimensionError::SizeOverflow { .. }))
    ));
    assert_eq!(b, [1.0, 1.0]);

    // validation happens even when there is nothing to solve
    let mut b: [f64; 0] = [];
    assert!(potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 0, &a, 2, &mut b, 0).is_err());
}

#[test]
fn xpotrs_invalid_mode() {
    let a = [2.0, 1.0, 0.0, 3.0];
    let mut b = [4.0, 12.0];
    for mode in [b'X', b'N', b' ', 0u8] {
        assert_eq!(
            xpotrs(&NativeTriangularSolver, mode, 2, 1, &a, 2, &mut b, 1),
            Err(CholeskySolveError::InvalidMode(mode))
        );
    }
    assert_eq!(b, [4.0, 12.0]);
}

#[test]
fn potrs_singular_factor() {
    let a = [2.0, 1.0, 0.0, 0.0];
    let mut b = [1.0, 1.0];
    assert!(matches!(
        potrs(&NativeTriangularSolver, MatrixTriangle::Triu, 2, 1, &a, 2, &mut b, 1),
        Err(CholeskySolveError::Numerical(TriangularSolveError::SingularFactor { index: 1 }))
    ));
}
