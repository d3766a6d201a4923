//! Ordinary least squares with an intercept.
//!
//! Model:
//! - Centre features and target on their training means.
//! - Solve `Xc β = yc` in the least-squares sense through an SVD; singular
//!   values under `RCOND · max(σ)` count as zero, so rank-deficient designs
//!   get the minimum-norm β.
//! - Recover the intercept as `ȳ - β·x̄`.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

use crate::result::ForecastError;

/// Cut-off for singular values, relative to the largest one.
const RCOND: f64 = 1e-12;

/// Fitted linear model `y = intercept + Σ coefficients[j] * x[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Fit on `x` (one row per observation) against `y`.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Result<Self, ForecastError> {
        let (n, p) = x.dim();
        if n == 0 {
            return Err(ForecastError::InvalidInput(
                "cannot fit a linear model on zero rows".to_string(),
            ));
        }
        if n != y.len() {
            return Err(ForecastError::InvalidInput(format!(
                "feature rows ({n}) and targets ({}) differ in length",
                y.len()
            )));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidInput(
                "training data contains a non-finite value".to_string(),
            ));
        }

        let (Some(x_mean), Some(y_mean)) = (x.mean_axis(Axis(0)), y.mean()) else {
            return Err(ForecastError::InvalidInput(
                "cannot centre empty training data".to_string(),
            ));
        };

        let centred = DMatrix::from_fn(n, p, |i, j| x[[i, j]] - x_mean[j]);
        let target = DVector::from_iterator(n, y.iter().map(|v| v - y_mean));

        let svd = centred.svd(true, true);
        let largest = svd.singular_values.iter().copied().fold(0.0_f64, f64::max);
        let eps = largest * RCOND;
        let beta = svd
            .solve(&target, eps)
            .map_err(|e| ForecastError::InvalidInput(format!("least-squares solve failed: {e}")))?;

        let coefficients: Vec<f64> = beta.iter().copied().collect();
        let intercept = y_mean
            - coefficients
                .iter()
                .zip(x_mean.iter())
                .map(|(b, m)| b * m)
                .sum::<f64>();

        Ok(Self {
            intercept,
            coefficients,
        })
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Predict one row. Features beyond the fitted width are ignored.
    pub fn predict(&self, features: ArrayView1<'_, f64>) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features.iter())
                .map(|(b, x)| b * x)
                .sum::<f64>()
    }
}

/// Mean squared error between actual and predicted values.
///
/// Returns 0 for empty input.
pub fn mean_squared_error(actual: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    (actual - predicted).mapv(|d| d * d).mean().unwrap_or(0.0)
}
