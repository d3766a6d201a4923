use thiserror::Error;

use shelfcast_ai::ForecastError;
use shelfcast_core::{Classify, ErrorKind};
use shelfcast_inventory::InventoryError;

use crate::config::ConfigError;

/// Any failure surfaced by [`crate::InventorySystem`] or its setup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Classify for AppError {
    fn kind(&self) -> ErrorKind {
        match self {
            AppError::Inventory(e) => e.kind(),
            AppError::Forecast(e) => e.kind(),
            AppError::Config(e) => e.kind(),
        }
    }
}
