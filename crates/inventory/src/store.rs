use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::InventoryError;
use crate::item::{COLUMNS, InventoryItem, NewItem};

/// Authoritative inventory table mirrored to a CSV file.
///
/// Every successful mutation rewrites the whole file before returning. There is
/// no atomicity between the two: a crash after the in-memory change but before
/// the rewrite loses the change.
#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
    items: Vec<InventoryItem>,
}

impl InventoryStore {
    /// Load the table from `path`, or start empty if the file does not exist.
    ///
    /// A missing file is not created here; it appears on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, InventoryError> {
        let path = path.into();

        if !path.exists() {
            info!(path = %path.display(), "inventory file not found; starting with an empty table");
            return Ok(Self {
                path,
                items: Vec::new(),
            });
        }

        let items = read_items(&path)?;
        info!(path = %path.display(), rows = items.len(), "inventory loaded");

        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full table, in insertion order.
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append one row and persist.
    ///
    /// Names are not deduplicated: adding an existing name creates a second row.
    pub fn add_item(&mut self, item: NewItem) -> Result<&InventoryItem, InventoryError> {
        let index = self.items.len();
        self.items.push(item.into());
        self.persist()?;

        let added = &self.items[index];
        info!(item = added.name(), stock = added.stock(), rows = self.items.len(), "item added");
        Ok(added)
    }

    /// Add `delta` to the stock of every row named `name`, then persist.
    ///
    /// Returns how many rows were touched. When nothing matches, or when any
    /// match would overflow, the table and the backing file are left untouched.
    pub fn update_stock(&mut self, name: &str, delta: i64) -> Result<usize, InventoryError> {
        // Work out every new value first so an overflow leaves all rows as they were.
        let mut updates: Vec<(usize, i64)> = Vec::new();
        let matching = self.items.iter().enumerate().filter(|(_, item)| item.name() == name);
        for (index, item) in matching {
            let stock = item.stock_after(delta).ok_or_else(|| InventoryError::StockOverflow {
                item: name.to_string(),
                stock: item.stock(),
                delta,
            })?;
            updates.push((index, stock));
        }

        if updates.is_empty() {
            return Err(InventoryError::ItemNotFound(name.to_string()));
        }

        for &(index, stock) in &updates {
            self.items[index].set_stock(stock);
        }
        let touched = updates.len();

        self.persist()?;
        info!(item = name, delta, rows = touched, "stock updated");
        Ok(touched)
    }

    /// Rows whose stock is at or below their restock level, in table order.
    pub fn recommend_restock(&self) -> Vec<&InventoryItem> {
        self.items.iter().filter(|item| item.needs_restock()).collect()
    }

    /// Rewrite the backing file from the in-memory table.
    ///
    /// The header is always written, so an empty table still produces a
    /// loadable file.
    pub fn persist(&self) -> Result<(), InventoryError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)
            .map_err(|e| write_error(&self.path, e))?;

        writer
            .write_record(COLUMNS)
            .map_err(|e| write_error(&self.path, e))?;
        for item in &self.items {
            writer
                .serialize(item)
                .map_err(|e| write_error(&self.path, e))?;
        }
        writer.flush().map_err(|source| InventoryError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), rows = self.items.len(), "inventory persisted");
        Ok(())
    }
}

fn read_items(path: &Path) -> Result<Vec<InventoryItem>, InventoryError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| read_error(path, e))?;

    let headers = reader.headers().map_err(|e| read_error(path, e))?;
    if headers.iter().ne(COLUMNS) {
        return Err(InventoryError::Schema {
            path: path.to_path_buf(),
            found: headers.iter().map(str::to_string).collect(),
            expected: COLUMNS.iter().map(|c| c.to_string()).collect(),
        });
    }

    reader
        .deserialize::<InventoryItem>()
        .map(|row| row.map_err(|e| read_error(path, e)))
        .collect()
}

fn read_error(path: &Path, err: csv::Error) -> InventoryError {
    InventoryError::Read {
        path: path.to_path_buf(),
        source: err,
    }
}

fn write_error(path: &Path, err: csv::Error) -> InventoryError {
    InventoryError::Persist {
        path: path.to_path_buf(),
        source: err,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shelfcast_core::{Classify, ErrorKind};
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, InventoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = InventoryStore::open(dir.path().join("inventory.csv")).unwrap();
        (dir, store)
    }

    fn seed(store: &mut InventoryStore) {
        store
            .add_item(NewItem::new("Laptop", 50, 1000.0).with_sales(30).with_restock_level(10))
            .unwrap();
        store
            .add_item(NewItem::new("Phone", 100, 500.0).with_sales(70).with_restock_level(15))
            .unwrap();
        store.add_item(NewItem::new("Cable", 4, 9.99)).unwrap();
    }

    #[test]
    fn missing_file_starts_empty_without_creating_it() {
        let (dir, store) = temp_store();
        assert!(store.is_empty());
        assert!(!dir.path().join("inventory.csv").exists());
    }

    #[test]
    fn add_item_persists_header_and_rows() {
        let (_dir, mut store) = temp_store();
        seed(&mut store);

        let text = std::fs::read_to_string(store.path()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Item,Stock,Price,Sales,Restock_Level"));
        assert_eq!(lines.next(), Some("Laptop,50,1000.0,30.0,10"));
        assert_eq!(lines.next(), Some("Phone,100,500.0,70.0,15"));
        assert_eq!(lines.next(), Some("Cable,4,9.99,0.0,10"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn reload_yields_identical_table() {
        let (_dir, mut store) = temp_store();
        seed(&mut store);
        store.add_item(NewItem::new("Quoted, name", -3, 0.1)).unwrap();

        let reloaded = InventoryStore::open(store.path()).unwrap();
        assert_eq!(reloaded.items(), store.items());
    }

    #[test]
    fn duplicate_names_are_appended_and_all_updated() {
        let (_dir, mut store) = temp_store();
        store.add_item(NewItem::new("Widget", 5, 1.0)).unwrap();
        store.add_item(NewItem::new("Widget", 7, 2.0)).unwrap();
        assert_eq!(store.len(), 2);

        let touched = store.update_stock("Widget", 3).unwrap();
        assert_eq!(touched, 2);
        assert_eq!(store.items()[0].stock(), 8);
        assert_eq!(store.items()[1].stock(), 10);
    }

    #[test]
    fn update_stock_may_go_negative_and_is_persisted() {
        let (_dir, mut store) = temp_store();
        seed(&mut store);

        store.update_stock("Cable", -10).unwrap();
        assert_eq!(store.items()[2].stock(), -6);

        let reloaded = InventoryStore::open(store.path()).unwrap();
        assert_eq!(reloaded.items()[2].stock(), -6);
    }

    #[test]
    fn update_unknown_item_leaves_file_untouched() {
        let (_dir, mut store) = temp_store();
        seed(&mut store);
        let before = std::fs::read(store.path()).unwrap();

        let err = store.update_stock("Toaster", 5).unwrap_err();
        assert!(matches!(err, InventoryError::ItemNotFound(ref name) if name == "Toaster"));
        assert_eq!(err.kind(), ErrorKind::ItemNotFound);
        assert!(err.is_recoverable());

        let after = std::fs::read(store.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn overflowing_update_is_rejected_without_touching_any_row() {
        let (_dir, mut store) = temp_store();
        store.add_item(NewItem::new("A", 0, 1.0)).unwrap();
        store.add_item(NewItem::new("A", i64::MAX, 1.0)).unwrap();
        let before = std::fs::read(store.path()).unwrap();

        let err = store.update_stock("A", 1).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::StockOverflow { ref item, stock: i64::MAX, delta: 1 } if item == "A"
        ));
        assert_eq!(err.kind(), ErrorKind::StockOverflow);
        assert!(err.is_recoverable());

        assert_eq!(store.items()[0].stock(), 0);
        assert_eq!(store.items()[1].stock(), i64::MAX);
        assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn fractional_and_integer_sales_cells_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(
            &path,
            "Item,Stock,Price,Sales,Restock_Level\nLaptop,50,1000,30,10\nPen,3,1.5,30.5,10\n",
        )
        .unwrap();

        let store = InventoryStore::open(&path).unwrap();
        assert_eq!(store.items()[0].sales(), 30.0);
        assert_eq!(store.items()[0].price(), 1000.0);
        assert_eq!(store.items()[1].sales(), 30.5);
    }

    #[test]
    fn recommend_restock_keeps_table_order() {
        let (_dir, mut store) = temp_store();
        store
            .add_item(NewItem::new("Low", 5, 1.0).with_restock_level(10))
            .unwrap();
        store
            .add_item(NewItem::new("High", 20, 1.0).with_restock_level(10))
            .unwrap();
        store
            .add_item(NewItem::new("Edge", 10, 1.0).with_restock_level(10))
            .unwrap();

        let names: Vec<&str> = store.recommend_restock().iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Low", "Edge"]);
    }

    #[test]
    fn header_mismatch_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(&path, "Item,Stock,Price\nLaptop,1,2.0\n").unwrap();

        let err = InventoryStore::open(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Schema { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn malformed_value_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(
            &path,
            "Item,Stock,Price,Sales,Restock_Level\nLaptop,many,2.0,1,10\n",
        )
        .unwrap();

        let err = InventoryStore::open(&path).unwrap_err();
        assert!(matches!(err, InventoryError::Read { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(&path, "Item,Stock,Price,Sales,Restock_Level\nLaptop,1,2.0\n").unwrap();

        let err = InventoryStore::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn empty_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(&path, "").unwrap();

        let err = InventoryStore::open(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn header_only_file_loads_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        std::fs::write(&path, "Item,Stock,Price,Sales,Restock_Level\n").unwrap();

        let store = InventoryStore::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn persist_into_missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = InventoryStore::open(dir.path().join("nope").join("inventory.csv")).unwrap();

        let err = store.add_item(NewItem::new("Laptop", 1, 1.0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        // The row stays in memory; only the rewrite failed.
        assert_eq!(store.len(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 32,
            ..ProptestConfig::default()
        })]

        /// Property: N adds always yield N rows, on disk as well as in memory.
        #[test]
        fn n_adds_yield_n_rows(names in prop::collection::vec("[a-c]{1,2}", 0..12)) {
            let (_dir, mut store) = temp_store();
            for (i, name) in names.iter().enumerate() {
                store.add_item(NewItem::new(name.clone(), i as i64, 1.5)).unwrap();
            }
            prop_assert_eq!(store.len(), names.len());

            if !names.is_empty() {
                let reloaded = InventoryStore::open(store.path()).unwrap();
                prop_assert_eq!(reloaded.items(), store.items());
            }
        }
    }
}
