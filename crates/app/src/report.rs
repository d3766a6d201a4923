//! Plain-text rendering of inventory tables.

use std::fmt::Write as _;

use shelfcast_inventory::{COLUMNS, InventoryItem};

/// Render rows as a right-aligned table with the inventory column headers.
///
/// An empty table renders as the header line alone.
pub fn render_inventory<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let rows: Vec<[String; 5]> = items
        .into_iter()
        .map(|item| {
            [
                item.name().to_string(),
                item.stock().to_string(),
                item.price().to_string(),
                item.sales().to_string(),
                item.restock_level().to_string(),
            ]
        })
        .collect();
    render(COLUMNS, &rows)
}

/// Render restock candidates with how many units each is short.
pub fn render_restock<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a InventoryItem>,
{
    let rows: Vec<[String; 4]> = items
        .into_iter()
        .map(|item| {
            [
                item.name().to_string(),
                item.stock().to_string(),
                item.restock_level().to_string(),
                item.shortfall().to_string(),
            ]
        })
        .collect();
    render(["Item", "Stock", "Restock_Level", "Shortfall"], &rows)
}

fn render<const N: usize>(headers: [&str; N], rows: &[[String; N]]) -> String {
    let mut widths = headers.map(str::len);
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, headers.iter().copied(), &widths);
    for row in rows {
        write_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn write_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{cell:>w$}", w = *w))
        .collect();
    let _ = writeln!(out, "{}", line.join("  "));
}
