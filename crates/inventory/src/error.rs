use std::path::PathBuf;

use thiserror::Error;

use shelfcast_core::{Classify, ErrorKind};

/// Failures raised by [`crate::InventoryStore`].
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to read inventory file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("inventory file {path} has header {found:?}, expected {expected:?}")]
    Schema {
        path: PathBuf,
        found: Vec<String>,
        expected: Vec<String>,
    },

    #[error("item '{0}' not found in inventory")]
    ItemNotFound(String),

    #[error("stock of '{item}' ({stock}) cannot move by {delta}: out of range")]
    StockOverflow { item: String, stock: i64, delta: i64 },

    #[error("failed to write inventory file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("i/o error on inventory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Classify for InventoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::Read { source, .. } if source.is_io_error() => ErrorKind::Io,
            InventoryError::Read { .. } | InventoryError::Schema { .. } => ErrorKind::Parse,
            InventoryError::ItemNotFound(_) => ErrorKind::ItemNotFound,
            InventoryError::StockOverflow { .. } => ErrorKind::StockOverflow,
            InventoryError::Persist { .. } | InventoryError::Io { .. } => ErrorKind::Io,
        }
    }
}
