#![allow(non_snake_case)]

use crate::algebra::{DenseMatrix, FloatT, Matrix, ShapedMatrix};

/// General matrix-matrix multiply
pub trait MultiplyGEMM<T> {
    /// computes `self = αA*B + βself`
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>;
}

impl<T> MultiplyGEMM<T> for Matrix<T>
where
    T: FloatT,
{
    fn mul<MATA, MATB>(&mut self, A: &MATA, B: &MATB, α: T, β: T) -> &Self
    where
        MATA: DenseMatrix<T>,
        MATB: DenseMatrix<T>,
    {
        assert!(A.ncols() == B.nrows() && self.nrows() == A.nrows() && self.ncols() == B.ncols());

        let (m, n) = self.size;
        let k = A.ncols();

        for i in 0..m {
            for j in 0..n {
                let mut acc = T::zero();
                for p in 0..k {
                    acc += A[(i, p)] * B[(p, j)];
                }
                // β = 0 must not propagate NaNs already in self
                self[(i, j)] = if β == T::zero() {
                    α * acc
                } else {
                    α * acc + β * self[(i, j)]
                };
            }
        }
        self
    }
}

#[test]
fn test_gemm() {
    use crate::algebra::DenseMatrixMut;

    let (m, n, k) = (2, 4, 3);
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = vec![
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
    ];
    let c = vec![2.0, 6.0, 0.0, 4.0, 7.0, 2.0, 7.0, 2.0];

    let A = Matrix::new_from_slice((m, k), &a);
    let B = Matrix::new_from_slice((k, n), &b);
    let mut C = Matrix::<f64>::new_from_slice((m, n), &c);
    C.mul(&A, &B, 1.0, 1.0);

    assert_eq!(C.data(), &[40.0, 50.0, 50.0, 60.0, 90.0, 100.0, 120.0, 130.0]);

    // transposed multiply
    let mut C = Matrix::<f64>::zeros((n, m));
    C.data_mut().fill(f64::NAN);
    C.mul(&B.t(), &A.t(), 1.0, 0.0);

    assert_eq!(C.data(), &[38.0, 83.0, 44.0, 98.0, 50.0, 113.0, 56.0, 128.0]);
}
