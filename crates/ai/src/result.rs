use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use shelfcast_core::{Classify, ErrorKind};

/// Outcome of a successful training run.
///
/// This is an insight about the fitted model, not inventory state. Higher
/// layers may log it or display it; nothing writes it back to the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Mean squared error on the held-out partition.
    pub mse: f64,

    pub train_rows: usize,
    pub test_rows: usize,

    /// Seed used for the train/test shuffle.
    pub seed: u64,

    pub intercept: f64,

    /// One coefficient per feature, in `[stock, price]` order.
    pub coefficients: Vec<f64>,

    pub trained_at: DateTime<Utc>,

    /// Optional human-readable explanation.
    pub explanation: Option<String>,

    /// Free-form metadata (model kind, split settings, etc).
    pub metadata: JsonValue,
}

impl TrainingReport {
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn with_metadata(mut self, metadata: JsonValue) -> Self {
        self.metadata = metadata;
        self
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    #[error("not enough data to train the model: {rows} row(s), need at least {required}")]
    InsufficientData { rows: usize, required: usize },

    #[error("model is not trained yet")]
    ModelNotTrained,

    #[error("invalid forecaster input: {0}")]
    InvalidInput(String),
}

impl Classify for ForecastError {
    fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::InsufficientData { .. } => ErrorKind::InsufficientData,
            ForecastError::ModelNotTrained => ErrorKind::ModelNotTrained,
            ForecastError::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }
}
