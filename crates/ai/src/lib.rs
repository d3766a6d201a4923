//! `shelfcast-ai`
//!
//! **Responsibility:** optional sales forecasting over inventory snapshots.
//!
//! This crate is intentionally **not** part of the inventory model:
//! - It does not depend on the inventory crate; callers hand it a [`SalesSnapshot`].
//! - It never mutates inventory state.
//! - Its output is a fitted model plus a [`TrainingReport`], nothing persisted.

pub mod forecaster;
pub mod regression;
pub mod result;
pub mod snapshot;
pub mod split;

pub use forecaster::{
    DEFAULT_MIN_TRAINING_ROWS, DEFAULT_SEED, DEFAULT_TEST_RATIO, ForecasterState, SalesForecaster,
};
pub use regression::{LinearModel, mean_squared_error};
pub use result::{ForecastError, TrainingReport};
pub use snapshot::{SalesObservation, SalesSnapshot};
pub use split::{Split, train_test_split};
