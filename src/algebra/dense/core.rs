#![allow(non_snake_case)]
use crate::algebra::*;

impl<T> Matrix<T>
where
    T: FloatT,
{
    pub fn zeros(size: (usize, usize)) -> Self {
        Self::zeros_strided(size, usize::max(1, size.1))
    }

    /// zero matrix with row stride `stride >= ncols`.  The
    /// trailing row is not padded.
    pub fn zeros_strided(size: (usize, usize), stride: usize) -> Self {
        let (m, n) = size;
        assert!(stride >= n);
        let len = match required_len(m, n, stride) {
            Some(len) => len,
            None => panic!("matrix of size {m}x{n} with stride {stride} overflows usize"),
        };
        Self {
            size,
            stride,
            data: vec![T::zero(); len],
            phantom: std::marker::PhantomData::<T>,
        }
    }

    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.is_square());
        self.data_mut().set(T::zero());
        for i in 0..self.nrows() {
            self[(i, i)] = T::one();
        }
    }

    /// Copies a row major source of exactly `m*n` elements
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        if n == 0 {
            return Self::zeros(size);
        }
        Self {
            size,
            stride: n,
            data: src.to_vec(),
            phantom: std::marker::PhantomData::<T>,
        }
    }
}

impl<T, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T>
where
    T: FloatT,
{
    // rows of the array become rows of the matrix
    fn from(rows: &[[T; C]; R]) -> Matrix<T> {
        let data: Vec<T> = rows.iter().flatten().copied().collect();
        Matrix::new_from_slice((R, C), &data)
    }
}

#[test]
fn test_matrix_constructors() {
    let I = Matrix::<f64>::identity(3);
    assert_eq!(I.data, vec![1., 0., 0., 0., 1., 0., 0., 0., 1.]);

    let A = Matrix::from(&[[1., 2.], [0., 3.]]);
    assert_eq!(A[(0, 1)], 2.);
    assert_eq!(A.t()[(1, 0)], 2.);

    let Z = Matrix::<f32>::zeros_strided((3, 2), 4);
    assert_eq!(Z.data.len(), 10);
    assert_eq!(Z.stride(), 4);
    assert_eq!(Z.row_slice(2), &[0., 0.]);

    let E = Matrix::<f64>::zeros((0, 4));
    assert!(E.data.is_empty());
    let E = Matrix::<f64>::new_from_slice((3, 0), &[]);
    assert_eq!(E.stride(), 1);
    assert!(check_matrix(3, 0, E.data(), E.stride()).is_ok());
}
