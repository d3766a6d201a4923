//! Process configuration, read from environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use shelfcast_ai::{DEFAULT_MIN_TRAINING_ROWS, DEFAULT_SEED, DEFAULT_TEST_RATIO};
use shelfcast_core::{Classify, ErrorKind};
use shelfcast_observability::LogFormat;

pub const ENV_INVENTORY_FILE: &str = "SHELFCAST_INVENTORY_FILE";
pub const ENV_FORECAST_SEED: &str = "SHELFCAST_FORECAST_SEED";
pub const ENV_TEST_RATIO: &str = "SHELFCAST_TEST_RATIO";
pub const ENV_MIN_TRAINING_ROWS: &str = "SHELFCAST_MIN_TRAINING_ROWS";
pub const ENV_LOG_FORMAT: &str = "SHELFCAST_LOG_FORMAT";

pub const DEFAULT_INVENTORY_FILE: &str = "inventory.csv";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl Classify for ConfigError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub inventory_file: PathBuf,
    pub forecast_seed: u64,
    pub test_ratio: f64,
    pub min_training_rows: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            forecast_seed: DEFAULT_SEED,
            test_ratio: DEFAULT_TEST_RATIO,
            min_training_rows: DEFAULT_MIN_TRAINING_ROWS,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set-but-unparsable ones are errors.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let inventory_file = lookup(ENV_INVENTORY_FILE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_file);

        let forecast_seed = parse_or(&lookup, ENV_FORECAST_SEED, defaults.forecast_seed)?;
        let test_ratio = parse_or(&lookup, ENV_TEST_RATIO, defaults.test_ratio)?;
        if !(test_ratio > 0.0 && test_ratio < 1.0) {
            return Err(ConfigError::Invalid {
                key: ENV_TEST_RATIO,
                value: test_ratio.to_string(),
                reason: "must be strictly between 0 and 1".to_string(),
            });
        }
        let min_training_rows =
            parse_or(&lookup, ENV_MIN_TRAINING_ROWS, defaults.min_training_rows)?;
        let log_format = parse_or(&lookup, ENV_LOG_FORMAT, defaults.log_format)?;

        Ok(Self {
            inventory_file,
            forecast_seed,
            test_ratio,
            min_training_rows,
            log_format,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
