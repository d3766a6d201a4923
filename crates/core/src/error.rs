//! Shared error taxonomy.
//!
//! Each crate keeps its own error enum; this module only gives them a common
//! vocabulary so callers can branch on the *kind* of failure without matching
//! on every concrete variant.

use serde::{Deserialize, Serialize};

/// Classification of every failure the system can report.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The backing file exists but is not well-formed inventory data.
    Parse,

    /// A stock update targeted an item name with no matching row.
    ItemNotFound,

    /// A stock update would push a quantity outside the representable range.
    StockOverflow,

    /// Training was attempted with too few rows.
    InsufficientData,

    /// A forecast was requested before any successful training.
    ModelNotTrained,

    /// Reading or writing the backing file failed.
    Io,

    /// A setting or argument was outside its accepted domain.
    InvalidInput,
}

impl ErrorKind {
    /// Whether a caller may continue after this failure.
    ///
    /// Only load-time and I/O failures are fatal; everything else degrades to
    /// a no-op plus a notice.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            ErrorKind::ItemNotFound
                | ErrorKind::StockOverflow
                | ErrorKind::InsufficientData
                | ErrorKind::ModelNotTrained
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::ItemNotFound => "item_not_found",
            ErrorKind::StockOverflow => "stock_overflow",
            ErrorKind::InsufficientData => "insufficient_data",
            ErrorKind::ModelNotTrained => "model_not_trained",
            ErrorKind::Io => "io",
            ErrorKind::InvalidInput => "invalid_input",
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can report their [`ErrorKind`].
pub trait Classify {
    fn kind(&self) -> ErrorKind;

    fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_runtime_notices_are_recoverable() {
        assert!(ErrorKind::ItemNotFound.is_recoverable());
        assert!(ErrorKind::StockOverflow.is_recoverable());
        assert!(ErrorKind::InsufficientData.is_recoverable());
        assert!(ErrorKind::ModelNotTrained.is_recoverable());
        assert!(!ErrorKind::Parse.is_recoverable());
        assert!(!ErrorKind::Io.is_recoverable());
        assert!(!ErrorKind::InvalidInput.is_recoverable());
    }

    #[test]
    fn kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&ErrorKind::ModelNotTrained).unwrap();
        assert_eq!(json, "\"ModelNotTrained\"");
        assert_eq!(ErrorKind::ModelNotTrained.to_string(), "model_not_trained");
    }
}
