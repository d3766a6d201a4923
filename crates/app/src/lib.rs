//! Inventory tracking with an optional sales forecaster.
//!
//! [`InventorySystem`] owns the CSV-backed store and the forecaster; the
//! `shelfcast` binary drives it with [`demo::demo_items`].

pub mod config;
pub mod demo;
pub mod error;
pub mod report;
pub mod system;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use system::InventorySystem;
