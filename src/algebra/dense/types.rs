use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Core dense matrix type for owned and borrowed matrices.
///
/// Data is held in row major format with an explicit row stride, so
/// that entry `(i, j)` lives at `data[i * stride + j]`.  Entries past
/// column `ncols` in each row are padding and are never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    /// dimensions
    pub size: (usize, usize),
    /// distance between the starts of consecutive rows
    pub stride: usize,
    /// vector of data in row major format
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned dense matrix
pub type Matrix<T> = DenseStorageMatrix<Vec<T>, T>;
/// Read only view of a dense buffer
pub type BorrowedMatrix<'a, T> = DenseStorageMatrix<&'a [T], T>;
/// Mutable view of a dense buffer
pub type BorrowedMatrixMut<'a, T> = DenseStorageMatrix<&'a mut [T], T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn shape(&self) -> MatrixShape {
        MatrixShape::N
    }
}

impl<S, T> DenseMatrix<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        idx.0 * self.stride + idx.1
    }
    fn data(&self) -> &[T] {
        self.data.as_ref()
    }
}

impl<S, T> DenseMatrixMut<T> for DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: Sized,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
    T: Sized,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// row stride (leading dimension)
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(row < m);
        let start = row * self.stride;
        &self.data()[start..start + n]
    }

    pub fn t(&self) -> Adjoint<'_, Self> {
        Adjoint { src: self }
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(row < m);
        let start = row * self.stride;
        &mut self.data_mut()[start..start + n]
    }
}

// ------------------------------------------------
// Adjoint implementation for DenseMatrix.  This is a read
// only view of the matrix that allows for indexing and
// multiplication, but not modification of the data.

impl<S, T> DenseMatrix<T> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
    T: Sized,
{
    fn index_linear(&self, idx: (usize, usize)) -> usize {
        //reverse the indices
        self.src.index_linear((idx.1, idx.0))
    }
    fn data(&self) -> &[T] {
        self.src.data()
    }
}

impl<S, T> Index<(usize, usize)> for Adjoint<'_, DenseStorageMatrix<S, T>>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

// ------------------------------------------------
// BorrowedMatrix implementation

impl<'a, T> BorrowedMatrix<'a, T>
where
    T: FloatT,
{
    /// Wraps an existing buffer, checking it against the declared shape.
    pub fn from_slice(
        data: &'a [T],
        m: usize,
        n: usize,
        stride: usize,
    ) -> Result<Self, DimensionError> {
        check_matrix(m, n, data, stride)?;
        Ok(Self {
            size: (m, n),
            stride,
            data,
            phantom: std::marker::PhantomData::<T>,
        })
    }
}

impl<'a, T> BorrowedMatrixMut<'a, T>
where
    T: FloatT,
{
    /// Wraps an existing mutable buffer, checking it against the declared shape.
    pub fn from_slice_mut(
        data: &'a mut [T],
        m: usize,
        n: usize,
        stride: usize,
    ) -> Result<Self, DimensionError> {
        check_matrix(m, n, data, stride)?;
        Ok(Self {
            size: (m, n),
            stride,
            data,
            phantom: std::marker::PhantomData::<T>,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_indexing_matrix() -> Matrix<f64> {
        // Create a 3x3 matrix in row-major order:
        // [ 1.0  2.0  3.0 ]
        // [ 4.0  5.0  6.0 ]
        // [ 7.0  8.0  9.0 ]
        Matrix::from(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn test_matrix_indexing() {
        let matrix = create_indexing_matrix();

        assert_eq!(matrix[(0, 0)], 1.0);
        assert_eq!(matrix[(0, 1)], 2.0);
        assert_eq!(matrix[(1, 0)], 4.0);
        assert_eq!(matrix[(2, 1)], 8.0);

        assert_eq!(matrix.index_linear((0, 2)), 2);
        assert_eq!(matrix.index_linear((1, 0)), 3);
        assert_eq!(matrix.index_linear((2, 2)), 8);
        assert_eq!(matrix.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_adjoint_indexing() {
        let matrix = create_indexing_matrix();
        let adjoint = matrix.t();

        assert_eq!(adjoint.size(), (3, 3));
        assert_eq!(adjoint.shape(), MatrixShape::T);
        assert_eq!(adjoint[(0, 1)], 4.0);
        assert_eq!(adjoint[(1, 0)], 2.0);
        assert_eq!(adjoint[(2, 0)], 3.0);
        assert_eq!(adjoint.index_linear((0, 1)), 3);
    }

    #[test]
    fn test_strided_view() {
        // 2x2 view into a buffer with row stride 3
        let data = [1.0, 2.0, -1.0, 3.0, 4.0];
        let view = BorrowedMatrix::from_slice(&data, 2, 2, 3).unwrap();
        assert_eq!(view[(1, 0)], 3.0);
        assert_eq!(view[(1, 1)], 4.0);
        assert_eq!(view.row_slice(0), &[1.0, 2.0]);

        assert!(BorrowedMatrix::from_slice(&data, 2, 3, 2).is_err());
        assert!(BorrowedMatrix::from_slice(&data, 3, 2, 3).is_err());

        let mut data = [0.0; 5];
        let mut view = BorrowedMatrixMut::from_slice_mut(&mut data, 2, 2, 3).unwrap();
        view.row_slice_mut(1).copy_from_slice(&[5.0, 6.0]);
        view[(0, 1)] = 7.0;
        assert_eq!(data, [0.0, 7.0, 0.0, 5.0, 6.0]);
    }
}
