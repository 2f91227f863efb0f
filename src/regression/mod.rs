//! Ordinary least squares linear regression.
//!
//! The model is fitted by forming the normal equations
//! `(XᵀX) w = Xᵀy` on the design matrix with a leading column of ones, and
//! solving them with the LU-based [`solve`](crate::algebra::solve).
//!
//! ```
//! # use lupmat::algebra::*;
//! # use lupmat::regression::*;
//! // y = 1 + 2x
//! let X = Matrix::from(&[[0.], [1.], [2.], [3.]]);
//! let y = Matrix::from(&[[1.], [3.], [5.], [7.]]);
//!
//! let mut model = LinearRegression::default();
//! model.train(&X, &y).unwrap();
//! assert_eq!(model.weights().unwrap(), &[1., 2.]);
//!
//! let yhat = model.predict(&Matrix::from(&[[10.]])).unwrap();
//! assert_eq!(yhat[(0, 0)], 21.);
//! ```

#![allow(non_snake_case)]

use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

mod info_print;
mod settings;
pub use settings::*;

/// Linear least squares model with an intercept.
///
/// Weights are stored intercept first, followed by one weight per feature
/// column of the training data.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct LinearRegression<T: FloatT = f64> {
    pub settings: LinearRegressionSettings<T>,
    weights: Option<Vec<T>>,
    // verbose output is not part of the model
    #[cfg_attr(feature = "serde", serde(skip))]
    stream: PrintTarget,
}

impl<T> Default for LinearRegression<T>
where
    T: FloatT,
{
    fn default() -> Self {
        Self::new(LinearRegressionSettings::default())
    }
}

impl<T> LinearRegression<T>
where
    T: FloatT,
{
    pub fn new(settings: LinearRegressionSettings<T>) -> Self {
        Self {
            settings,
            weights: None,
            stream: PrintTarget::default(),
        }
    }

    /// Fits the model to features `X` (one observation per row) and the
    /// single column of targets `y`, replacing any earlier fit.
    ///
    /// Returns the fitted weights, intercept first.
    ///
    /// # Errors
    /// * [`IncompatibleVector`](DenseMatrixError::IncompatibleVector) if `y`
    ///   has more than one column.
    /// * [`DimensionMismatch`](DenseMatrixError::DimensionMismatch) if `X`
    ///   and `y` have different row counts.
    /// * [`SingularMatrix`](DenseMatrixError::SingularMatrix) if the normal
    ///   equations are degenerate, e.g. with collinear features.
    pub fn train(&mut self, X: &Matrix<T>, y: &Matrix<T>) -> Result<&[T], DenseMatrixError> {
        self.settings.validate()?;

        if y.ncols() != 1 {
            return Err(DenseMatrixError::IncompatibleVector {
                expected: 1,
                found: y.ncols(),
            });
        }
        if X.nrows() != y.nrows() {
            return Err(DenseMatrixError::mismatch(X.size(), y.size()));
        }

        let x = with_intercept(X)?;
        let xtx = dot(&x.t(), &x)?;
        let xty = dot(&x.t(), y)?;

        // xty is a single column, so its data is (xᵀy)ᵀ[0]
        let lu = LUPDecomposition::new(&xtx, Some(self.settings.lup_settings()))?;
        let weights = lu.solve(xty.data(), self.settings.precision)?;

        if self.settings.verbose {
            let residual = residual_norm(&x, &weights, y)?;
            self.print_fit(X.size(), &weights, residual)?;
        }

        Ok(self.weights.insert(weights).as_slice())
    }

    /// Predicted targets for features `X`, as a single column.
    ///
    /// # Errors
    /// * [`Untrained`](DenseMatrixError::Untrained) before [`train`](Self::train).
    /// * [`DimensionMismatch`](DenseMatrixError::DimensionMismatch) if `X`
    ///   has a different number of feature columns than the training data.
    pub fn predict(&self, X: &Matrix<T>) -> Result<Matrix<T>, DenseMatrixError> {
        let weights = self.weights.as_deref().ok_or(DenseMatrixError::Untrained)?;
        predict_with(X, weights)
    }

    /// Fitted weights, intercept first, or `None` before training
    pub fn weights(&self) -> Option<&[T]> {
        self.weights.as_deref()
    }

    pub fn is_trained(&self) -> bool {
        self.weights.is_some()
    }
}

// X with a leading column of ones
fn with_intercept<T: FloatT>(X: &Matrix<T>) -> Result<Matrix<T>, DenseMatrixError> {
    let ones = vec![T::one(); X.nrows()];
    prepend(X, &ones, MatrixAxis::Column)
}

fn predict_with<T: FloatT>(X: &Matrix<T>, weights: &[T]) -> Result<Matrix<T>, DenseMatrixError> {
    let x = with_intercept(X)?;
    let w = Matrix::new_from_slice((1, weights.len()), weights);
    dot(&x, &w.t())
}

// 2-norm of the training residual, x*w - y
fn residual_norm<T: FloatT>(x: &Matrix<T>, weights: &[T], y: &Matrix<T>) -> Result<T, DenseMatrixError> {
    let w = Matrix::new_from_slice((weights.len(), 1), weights);
    let yhat = dot(x, &w)?;
    Ok(yhat.data().dist(y.data()))
}

impl<T: FloatT> ConfigurablePrintTarget for LinearRegression<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
