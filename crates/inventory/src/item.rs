use serde::{Deserialize, Serialize};

/// Column names of the backing file, in persisted order.
pub const COLUMNS: [&str; 5] = ["Item", "Stock", "Price", "Sales", "Restock_Level"];

/// Sales recorded for a new item when the caller gives none.
pub const DEFAULT_SALES: f64 = 0.0;

/// Restock threshold for a new item when the caller gives none.
pub const DEFAULT_RESTOCK_LEVEL: i64 = 10;

/// One row of the inventory table.
///
/// Field order matches [`COLUMNS`]; serde renames map each field onto its
/// column header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Item")]
    name: String,
    #[serde(rename = "Stock")]
    stock: i64,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Sales")]
    sales: f64,
    #[serde(rename = "Restock_Level")]
    restock_level: i64,
}

impl InventoryItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn sales(&self) -> f64 {
        self.sales
    }

    pub fn restock_level(&self) -> i64 {
        self.restock_level
    }

    /// An item needs restocking once stock is at or below its threshold.
    pub fn needs_restock(&self) -> bool {
        self.stock <= self.restock_level
    }

    /// Units needed to climb back to the restock threshold (0 if above it).
    pub fn shortfall(&self) -> i64 {
        self.restock_level.saturating_sub(self.stock).max(0)
    }

    /// Stock after adding `delta`, or `None` if it leaves the `i64` range.
    ///
    /// No clamping: a large negative delta yields stock below zero.
    pub fn stock_after(&self, delta: i64) -> Option<i64> {
        self.stock.checked_add(delta)
    }

    /// Stock is the only field that changes after a row is created.
    pub(crate) fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }
}

/// Builder for a row to append.
///
/// `sales` and `restock_level` default to [`DEFAULT_SALES`] and
/// [`DEFAULT_RESTOCK_LEVEL`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    name: String,
    stock: i64,
    price: f64,
    sales: f64,
    restock_level: i64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, stock: i64, price: f64) -> Self {
        Self {
            name: name.into(),
            stock,
            price,
            sales: DEFAULT_SALES,
            restock_level: DEFAULT_RESTOCK_LEVEL,
        }
    }

    pub fn with_sales(mut self, sales: impl Into<f64>) -> Self {
        self.sales = sales.into();
        self
    }

    pub fn with_restock_level(mut self, restock_level: i64) -> Self {
        self.restock_level = restock_level;
        self
    }
}

impl From<NewItem> for InventoryItem {
    fn from(new: NewItem) -> Self {
        Self {
            name: new.name,
            stock: new.stock,
            price: new.price,
            sales: new.sales,
            restock_level: new.restock_level,
        }
    }
}
