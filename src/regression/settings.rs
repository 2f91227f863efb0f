use crate::algebra::*;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for [`LinearRegression`](crate::regression::LinearRegression)

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearRegressionSettings<T: FloatT> {
    ///decimal digits kept in the fitted weights
    #[builder(default = "DEFAULT_PRECISION")]
    pub precision: u32,

    ///smallest acceptable pivot when factoring the normal equations
    #[builder(default = "(DEFAULT_TOLERANCE).as_T()")]
    pub tolerance: T,

    ///source matrix for the pivot search when factoring the normal equations
    #[builder(default = "PivotSearch::Input")]
    pub pivot_search: PivotSearch,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for LinearRegressionSettings<T>
where
    T: FloatT,
{
    fn default() -> LinearRegressionSettings<T> {
        LinearRegressionSettingsBuilder::<T>::default()
            .build()
            .unwrap()
    }
}

impl<T> LinearRegressionSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_precision(self.precision)?;
        self.lup_settings().validate()
    }

    /// Settings for factoring the normal equations
    pub fn lup_settings(&self) -> LUPSettings<T> {
        LUPSettings {
            tolerance: self.tolerance,
            pivot_search: self.pivot_search,
        }
    }
}

fn validate_precision(precision: u32) -> Result<(), SettingsError> {
    if precision > MAX_PRECISION {
        return Err(SettingsError::BadFieldValue("precision"));
    }
    Ok(())
}

impl From<SettingsError> for LinearRegressionSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        LinearRegressionSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> LinearRegressionSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(precision) = self.precision {
            validate_precision(precision)?;
        }
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    LinearRegressionSettingsBuilder::<f64>::default()
        .build()
        .unwrap();

    // fail on bad precision
    assert!(LinearRegressionSettingsBuilder::<f64>::default()
        .precision(16)
        .build()
        .is_err());

    // fail on negative tolerance
    let err = LinearRegressionSettingsBuilder::<f64>::default()
        .tolerance(-1e-3)
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Bad value for field \"tolerance\""
    );

    let set = LinearRegressionSettings::<f64>::default();
    assert_eq!(set.precision, 6);
    assert_eq!(set.tolerance, 1e-6);
    assert_eq!(set.pivot_search, PivotSearch::Input);
    assert!(!set.verbose);
}

#[test]
#[cfg(feature = "serde")]
fn test_settings_serde_defaults() {
    // missing fields take their defaults
    let set: LinearRegressionSettings<f64> =
        serde_json::from_str(r#"{"precision": 3}"#).unwrap();
    assert_eq!(set.precision, 3);
    assert_eq!(set.tolerance, 1e-6);
    assert!(!set.verbose);
}
