use tracing::warn;

use shelfcast_ai::{SalesForecaster, SalesObservation, SalesSnapshot, TrainingReport};
use shelfcast_core::Classify;
use shelfcast_inventory::{InventoryItem, InventoryStore, NewItem};

use crate::config::AppConfig;
use crate::error::AppError;

/// Inventory store and sales forecaster, owned together by one caller.
///
/// Recoverable failures (unknown item, too little data, untrained model) are
/// logged as a warning and still returned, so callers can branch on them.
#[derive(Debug)]
pub struct InventorySystem {
    store: InventoryStore,
    forecaster: SalesForecaster,
}

impl InventorySystem {
    pub fn new(store: InventoryStore, forecaster: SalesForecaster) -> Self {
        Self { store, forecaster }
    }

    /// Load the configured inventory file and set up an untrained forecaster.
    pub fn open(config: &AppConfig) -> Result<Self, AppError> {
        let store = InventoryStore::open(&config.inventory_file)?;
        let forecaster = SalesForecaster::new()
            .with_seed(config.forecast_seed)
            .with_test_ratio(config.test_ratio)
            .with_min_rows(config.min_training_rows);
        Ok(Self::new(store, forecaster))
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn forecaster(&self) -> &SalesForecaster {
        &self.forecaster
    }

    pub fn add_item(&mut self, item: NewItem) -> Result<&InventoryItem, AppError> {
        Ok(self.store.add_item(item)?)
    }

    pub fn update_stock(&mut self, name: &str, delta: i64) -> Result<usize, AppError> {
        self.store.update_stock(name, delta).map_err(notice)
    }

    /// Copy the Stock/Price/Sales columns out of the current table.
    pub fn sales_snapshot(&self) -> SalesSnapshot {
        self.store
            .items()
            .iter()
            .map(|item| {
                SalesObservation::new(item.stock() as f64, item.price(), item.sales())
            })
            .collect()
    }

    /// Retrain the forecaster on the table as it is right now.
    pub fn train_sales_forecast(&mut self) -> Result<TrainingReport, AppError> {
        let snapshot = self.sales_snapshot();
        self.forecaster.train(&snapshot).map_err(notice)
    }

    pub fn forecast_sales(&self, stock: f64, price: f64) -> Result<f64, AppError> {
        self.forecaster.forecast(stock, price).map_err(notice)
    }

    pub fn recommend_restock(&self) -> Vec<&InventoryItem> {
        self.store.recommend_restock()
    }

    pub fn view_inventory(&self) -> &[InventoryItem] {
        self.store.items()
    }
}

fn notice<E>(err: E) -> AppError
where
    E: Into<AppError>,
{
    let err = err.into();
    if err.is_recoverable() {
        warn!(kind = %err.kind(), "{err}");
    }
    err
}
