use serde::{Deserialize, Serialize};

/// One training observation: features `stock` and `price`, target `sales`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesObservation {
    pub stock: f64,
    pub price: f64,
    pub sales: f64,
}

impl SalesObservation {
    pub fn new(stock: f64, price: f64, sales: f64) -> Self {
        Self { stock, price, sales }
    }

    /// Feature vector in model order.
    pub fn features(&self) -> [f64; 2] {
        [self.stock, self.price]
    }
}

/// Point-in-time copy of the inventory columns the forecaster trains on.
///
/// This crate stays storage-agnostic: callers build the snapshot from
/// whatever holds the inventory table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesSnapshot {
    pub observations: Vec<SalesObservation>,
}

impl SalesSnapshot {
    pub fn new(observations: Vec<SalesObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

impl FromIterator<SalesObservation> for SalesSnapshot {
    fn from_iter<I: IntoIterator<Item = SalesObservation>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
