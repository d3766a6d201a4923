use chrono::Utc;
use ndarray::{Array1, Array2, aview1};
use serde_json::json;
use tracing::{debug, info};

use crate::regression::{LinearModel, mean_squared_error};
use crate::result::{ForecastError, TrainingReport};
use crate::snapshot::{SalesObservation, SalesSnapshot};
use crate::split::train_test_split;

/// Fewest rows a training call accepts.
pub const DEFAULT_MIN_TRAINING_ROWS: usize = 5;

/// Share of rows held out to evaluate the fit.
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

/// Seed for the train/test shuffle.
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ForecasterState {
    Untrained,
    Trained,
}

/// Two-feature sales forecaster: `[stock, price] -> sales`.
///
/// Holds at most one fitted model. Each successful [`train`](Self::train)
/// replaces it; a failed call leaves the previous model (or its absence)
/// untouched.
#[derive(Debug, Clone)]
pub struct SalesForecaster {
    model: Option<LinearModel>,
    seed: u64,
    test_ratio: f64,
    min_rows: usize,
}

impl Default for SalesForecaster {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesForecaster {
    pub fn new() -> Self {
        Self {
            model: None,
            seed: DEFAULT_SEED,
            test_ratio: DEFAULT_TEST_RATIO,
            min_rows: DEFAULT_MIN_TRAINING_ROWS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    pub fn with_min_rows(mut self, min_rows: usize) -> Self {
        self.min_rows = min_rows;
        self
    }

    pub fn state(&self) -> ForecasterState {
        if self.model.is_some() {
            ForecasterState::Trained
        } else {
            ForecasterState::Untrained
        }
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    pub fn model(&self) -> Option<&LinearModel> {
        self.model.as_ref()
    }

    /// Fit a new model on `snapshot`, replacing any previous one.
    pub fn train(&mut self, snapshot: &SalesSnapshot) -> Result<TrainingReport, ForecastError> {
        let rows = snapshot.len();
        if rows < self.min_rows {
            return Err(ForecastError::InsufficientData {
                rows,
                required: self.min_rows,
            });
        }

        let split = train_test_split(rows, self.test_ratio, self.seed)?;
        debug!(
            train_rows = split.train.len(),
            test_rows = split.test.len(),
            seed = self.seed,
            "train/test split"
        );

        let pick = |indices: &[usize]| -> Vec<SalesObservation> {
            indices.iter().map(|&i| snapshot.observations[i]).collect()
        };
        let train = pick(&split.train);
        let test = pick(&split.test);

        let features = Array2::from_shape_fn((train.len(), 2), |(i, j)| train[i].features()[j]);
        let targets: Array1<f64> = train.iter().map(|o| o.sales).collect();
        let model = LinearModel::fit(&features, &targets)?;

        let actual: Array1<f64> = test.iter().map(|o| o.sales).collect();
        let predicted: Array1<f64> = test
            .iter()
            .map(|o| model.predict(aview1(&o.features())))
            .collect();
        let mse = mean_squared_error(&actual, &predicted);

        info!(mse, train_rows = train.len(), test_rows = test.len(), "sales forecast model trained");

        let report = TrainingReport {
            mse,
            train_rows: train.len(),
            test_rows: test.len(),
            seed: self.seed,
            intercept: model.intercept(),
            coefficients: model.coefficients().to_vec(),
            trained_at: Utc::now(),
            explanation: None,
            metadata: serde_json::Value::Null,
        }
        .with_explanation(format!(
            "ordinary least squares on [stock, price] -> sales, {} training row(s), {} held out",
            train.len(),
            test.len()
        ))
        .with_metadata(json!({
            "kind": "sales.linear_regression",
            "features": ["stock", "price"],
            "target": "sales",
            "test_ratio": self.test_ratio,
            "seed": self.seed,
        }));

        self.model = Some(model);
        Ok(report)
    }

    /// Predicted sales for one `(stock, price)` pair, unrounded.
    pub fn forecast(&self, stock: f64, price: f64) -> Result<f64, ForecastError> {
        let model = self.model.as_ref().ok_or(ForecastError::ModelNotTrained)?;
        Ok(model.predict(aview1(&[stock, price])))
    }
}
