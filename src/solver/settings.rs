use crate::algebra::MatrixTriangle;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings for a [`CholeskySolver`](crate::solver::CholeskySolver)

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CholeskySettings {
    ///triangle of the factor holding the Cholesky factor.  `Triu` means
    ///`A = UᵗU`, `Tril` means `A = LLᵗ`.  The other triangle is never read.
    #[builder(default = "MatrixTriangle::Tril")]
    pub factor_triangle: MatrixTriangle,

    ///triangular solve backend ("auto", "native" or "blas").  "auto"
    ///uses BLAS if compiled with the "blas" feature and native otherwise.
    ///"blas" requires the "blas" feature.
    #[builder(default = r#""auto".to_string()"#)]
    pub triangular_solve_method: String,
}

impl Default for CholeskySettings {
    fn default() -> CholeskySettings {
        CholeskySettingsBuilder::default().build().unwrap()
    }
}

impl CholeskySettings {
    /// Checks that the settings are valid.  This only ensures that fields
    /// specified by strings contain valid options.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_triangular_solve_method(&self.triangular_solve_method)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for CholeskySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        CholeskySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl CholeskySettingsBuilder {
    /// check that the specified triangular_solve_method is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref triangular_solve_method) = self.triangular_solve_method {
            validate_triangular_solve_method(triangular_solve_method)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_triangular_solve_method(triangular_solve_method: &str) -> Result<(), SettingsError> {
    match triangular_solve_method {
        "auto" => Ok(()),
        "native" => Ok(()),
        #[cfg(feature = "blas")]
        "blas" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("triangular_solve_method")),
    }
}

#[test]
fn test_settings_validate() {
    let settings = CholeskySettings::default();
    assert_eq!(settings.factor_triangle, MatrixTriangle::Tril);
    assert_eq!(settings.triangular_solve_method, "auto");
    assert!(settings.validate().is_ok());

    let settings = CholeskySettingsBuilder::default()
        .factor_triangle(MatrixTriangle::Triu)
        .triangular_solve_method("native".to_string())
        .build()
        .unwrap();
    assert_eq!(settings.factor_triangle, MatrixTriangle::Triu);

    // fail on bad solve method
    assert!(CholeskySettingsBuilder::default()
        .triangular_solve_method("foo".to_string())
        .build()
        .is_err());

    // fields are public, so can be broken after building
    let mut settings = CholeskySettings::default();
    settings.triangular_solve_method = "foo".to_string();
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("triangular_solve_method"))
    );
}

#[cfg(not(feature = "blas"))]
#[test]
fn test_settings_blas_unavailable() {
    assert!(CholeskySettingsBuilder::default()
        .triangular_solve_method("blas".to_string())
        .build()
        .is_err());
}
