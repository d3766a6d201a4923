//! Inventory table backed by a flat CSV file.
//!
//! The table has a fixed five-column schema. Every mutation is written
//! through to disk before the call returns; there is no batching.

pub mod error;
pub mod item;
pub mod store;

pub use error::InventoryError;
pub use item::{COLUMNS, DEFAULT_RESTOCK_LEVEL, DEFAULT_SALES, InventoryItem, NewItem};
pub use store::InventoryStore;
