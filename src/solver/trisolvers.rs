use crate::algebra::*;
use crate::solver::{CholeskySettings, SettingsError};

type TriangularSolverConstructor<T> = fn() -> BoxedTriangularSolver<T>;

// Maps the user setting for the triangular solve method onto a
// constructor for the matching backend.

fn get_trisolver_constructor<T>(
    settings: &CholeskySettings,
) -> Result<(&'static str, TriangularSolverConstructor<T>), SettingsError>
where
    T: FloatT,
{
    let case = settings.triangular_solve_method.as_str();
    let ctor: TriangularSolverConstructor<T>;
    let name: &'static str;

    match case {
        #[cfg(feature = "blas")]
        "auto" | "blas" => {
            name = "blas";
            ctor = || Box::new(BlasTriangularSolver::new());
        }
        #[cfg(not(feature = "blas"))]
        "auto" => {
            name = "native";
            ctor = || Box::new(NativeTriangularSolver::new());
        }
        "native" => {
            name = "native";
            ctor = || Box::new(NativeTriangularSolver::new());
        }
        _ => {
            return Err(SettingsError::BadFieldValue("triangular_solve_method"));
        }
    }
    Ok((name, ctor))
}

/// Constructs the triangular solve backend named in `settings`.
pub fn new_triangular_solver<T>(
    settings: &CholeskySettings,
) -> Result<BoxedTriangularSolver<T>, SettingsError>
where
    T: FloatT,
{
    let (name, ctor) = get_trisolver_constructor::<T>(settings)?;
    log::debug!(
        "using {} triangular solver (requested \"{}\")",
        name,
        settings.triangular_solve_method
    );
    Ok(ctor())
}

#[test]
fn test_new_triangular_solver() {
    let mut settings = CholeskySettings::default();

    for method in ["auto", "native"] {
        settings.triangular_solve_method = method.to_string();
        let trsm = new_triangular_solver::<f64>(&settings).unwrap();

        // solve [2 0; 1 1]·x = [2, 3]
        let a = [2.0, 0.0, 1.0, 1.0];
        let mut b = [2.0, 3.0];
        trsm.trsm(
            MatrixSide::Left,
            MatrixTriangle::Tril,
            MatrixShape::N,
            MatrixDiag::NonUnit,
            2,
            1,
            1.0,
            &a,
            2,
            &mut b,
            1,
        )
        .unwrap();
        assert_eq!(b, [1.0, 2.0]);
    }

    settings.triangular_solve_method = "bogus".to_string();
    assert!(new_triangular_solver::<f64>(&settings).is_err());
}
