#![allow(non_snake_case)]

use crate::algebra::*;
use crate::solver::{new_triangular_solver, CholeskySettings};

/// Solves systems `A·X = B` against a precomputed Cholesky factor of `A`.
///
/// The factor is held as a dense n×n matrix.  Only the triangle named by
/// `settings.factor_triangle` is referenced; the other may hold anything.
pub struct CholeskySolver<T: FloatT> {
    /// triangular factor (stored as square dense)
    factor: Matrix<T>,
    /// triangular solve backend
    trsm: BoxedTriangularSolver<T>,
    settings: CholeskySettings,
}

impl<T> CholeskySolver<T>
where
    T: FloatT,
{
    pub fn new(factor: Matrix<T>, settings: CholeskySettings) -> Result<Self, CholeskySolveError> {
        settings.validate()?;

        if !factor.is_square() {
            return Err(DimensionError::NotSquare {
                nrows: factor.nrows(),
                ncols: factor.ncols(),
            }
            .into());
        }
        check_matrix(factor.nrows(), factor.ncols(), factor.data(), factor.stride())?;

        let trsm = new_triangular_solver(&settings)?;

        Ok(Self {
            factor,
            trsm,
            settings,
        })
    }

    /// dimension of the system
    pub fn n(&self) -> usize {
        self.factor.nrows()
    }

    pub fn factor(&self) -> &Matrix<T> {
        &self.factor
    }

    pub fn settings(&self) -> &CholeskySettings {
        &self.settings
    }

    /// Solve AX = B, where B has (possibly) multiple columns.  B is
    /// modified in place and stores X after call.
    pub fn solve<S>(&self, B: &mut DenseStorageMatrix<S, T>) -> Result<(), CholeskySolveError>
    where
        S: AsMut<[T]> + AsRef<[T]>,
    {
        if B.nrows() != self.n() {
            return Err(DimensionError::IncompatibleRows {
                expected: self.n(),
                got: B.nrows(),
            }
            .into());
        }

        let nrhs = B.ncols();
        let ldb = B.stride();
        self.potrs(nrhs, B.data_mut(), ldb)
    }

    /// Solve Ax = b for a single right hand side, in place.
    pub fn solve_vec(&self, b: &mut [T]) -> Result<(), CholeskySolveError> {
        if b.len() != self.n() {
            return Err(DimensionError::IncompatibleRows {
                expected: self.n(),
                got: b.len(),
            }
            .into());
        }
        self.potrs(1, b, 1)
    }

    fn potrs(&self, nrhs: usize, b: &mut [T], ldb: usize) -> Result<(), CholeskySolveError> {
        let F = &self.factor;
        let result = potrs(
            self.trsm.as_ref(),
            self.settings.factor_triangle,
            F.nrows(),
            nrhs,
            F.data(),
            F.stride(),
            b,
            ldb,
        );
        if let Err(CholeskySolveError::Numerical(ref e)) = result {
            log::warn!("Cholesky solve failed: {e}");
        }
        result
    }

    /// computes log(det(A)) for A = FᵗF or FFᵗ
    pub fn logdet(&self) -> T {
        let mut ld = T::zero();
        for i in 0..self.n() {
            ld += T::ln(self.factor[(i, i)]);
        }
        ld + ld
    }

    /// Rebuilds A from the referenced triangle of the factor.
    pub fn reconstruct(&self) -> Matrix<T> {
        let n = self.n();
        let uplo = self.settings.factor_triangle;

        // clean copy of the referenced triangle
        let mut F = Matrix::<T>::zeros((n, n));
        for i in 0..n {
            for j in 0..n {
                let inside = match uplo {
                    MatrixTriangle::Triu => i <= j,
                    MatrixTriangle::Tril => i >= j,
                };
                if inside {
                    F[(i, j)] = self.factor[(i, j)];
                }
            }
        }

        let mut A = Matrix::<T>::zeros((n, n));
        match uplo {
            MatrixTriangle::Triu => A.mul(&F.t(), &F, T::one(), T::zero()),
            MatrixTriangle::Tril => A.mul(&F, &F.t(), T::one(), T::zero()),
        };
        A
    }
}

macro_rules! generate_test_cholesky_solver {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        fn $test_name() {
            // lower factor, with junk in the strict upper triangle
            #[rustfmt::skip]
            let L = Matrix::<$fxx>::from(&[
                [ 2.0, 99.0, -99.0],
                [-1.0,  3.0,  99.0],
                [ 2.0,  1.0,   1.0]]);

            let eng = CholeskySolver::new(L, CholeskySettings::default()).unwrap();
            let A = eng.reconstruct();

            #[rustfmt::skip]
            let Aexp = Matrix::<$fxx>::from(&[
                [ 4.0, -2.0, 4.0],
                [-2.0, 10.0, 1.0],
                [ 4.0,  1.0, 6.0]]);
            assert!(A.data().norm_inf_diff(Aexp.data()) < (1e-12 as $fxx).$tolfn());

            // now try to solve with multiple RHS
            let X = Matrix::<$fxx>::from(&[
                [1., 2.], //
                [3., 4.], //
                [5., 6.],
            ]);
            let mut B = Matrix::<$fxx>::zeros((3, 2));
            B.mul(&A, &X, 1.0, 0.0);

            eng.solve(&mut B).unwrap();
            assert!(B.data().norm_inf_diff(X.data()) <= (1e-10 as $fxx).$tolfn());

            // and a single RHS
            let mut b = [0.0 as $fxx; 3];
            for i in 0..3 {
                b[i] = A.row_slice(i).dot(&[1.0, -1.0, 0.5]);
            }
            eng.solve_vec(&mut b).unwrap();
            assert!(b.norm_inf_diff(&[1.0, -1.0, 0.5]) <= (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky_solver!(f32, test_cholesky_solver_f32, sqrt);
generate_test_cholesky_solver!(f64, test_cholesky_solver_f64, abs);

macro_rules! generate_test_cholesky_logdet {
    ($fxx:ty, $test_name:ident, $tolfn:ident) => {
        #[test]
        #[allow(clippy::excessive_precision)]
        fn $test_name() {
            use crate::solver::CholeskySettingsBuilder;

            #[rustfmt::skip]
            let U = Matrix::<$fxx>::from(&[
                [2.0, -1.0, 2.0],
                [0.0,  3.0, 1.0],
                [0.0,  0.0, 1.0]]);

            let settings = CholeskySettingsBuilder::default()
                .factor_triangle(MatrixTriangle::Triu)
                .build()
                .unwrap();
            let eng = CholeskySolver::new(U, settings).unwrap();

            // det(A) = (2·3·1)^2 = 36
            assert!((eng.logdet() - 3.58351893845611).abs() < (1e-10 as $fxx).$tolfn());
        }
    };
}

generate_test_cholesky_logdet!(f32, test_cholesky_logdet_f32, sqrt);
generate_test_cholesky_logdet!(f64, test_cholesky_logdet_f64, abs);

#[test]
fn test_cholesky_solver_errors() {
    let settings = CholeskySettings::default();

    let F = Matrix::<f64>::zeros((2, 3));
    assert!(matches!(
        CholeskySolver::new(F, settings.clone()),
        Err(CholeskySolveError::Dimension(DimensionError::NotSquare { nrows: 2, ncols: 3 }))
    ));

    let mut bad = settings.clone();
    bad.triangular_solve_method = "nope".to_string();
    assert!(matches!(
        CholeskySolver::new(Matrix::<f64>::identity(2), bad),
        Err(CholeskySolveError::Settings(_))
    ));

    let eng = CholeskySolver::new(Matrix::<f64>::identity(2), settings).unwrap();
    let mut B = Matrix::<f64>::zeros((3, 1));
    assert_eq!(
        eng.solve(&mut B),
        Err(CholeskySolveError::Dimension(DimensionError::IncompatibleRows {
            expected: 2,
            got: 3
        }))
    );
    let mut b = [1.0; 3];
    assert!(eng.solve_vec(&mut b).is_err());
}
