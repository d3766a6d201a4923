//! Sample catalogue used by the `shelfcast` binary.

use shelfcast_inventory::NewItem;

pub fn demo_items() -> Vec<NewItem> {
    vec![
        NewItem::new("Laptop", 50, 1000.0).with_sales(30).with_restock_level(10),
        NewItem::new("Phone", 100, 500.0).with_sales(70).with_restock_level(15),
        NewItem::new("Tablet", 30, 300.0).with_sales(15).with_restock_level(5),
        NewItem::new("Headphones", 200, 100.0).with_sales(50).with_restock_level(20),
        NewItem::new("Monitor", 40, 200.0).with_sales(25).with_restock_level(10),
    ]
}
