//! Stock status classification.

use stockline_models::{columns, PartDataset, StockStatus, StockStatusRow};

use crate::cells::{numeric_cell, require_columns};
use crate::error::ReportResult;

/// Columns [`classify_stock`] consumes.
pub const STOCK_STATUS_COLUMNS: &[&str] = &[columns::PART_NUMBER, columns::ON_HAND];

/// On-hand at or below this is out of stock. Zero units means nothing to
/// ship, so the boundary itself classifies as out of stock.
pub const OUT_OF_STOCK_MAX: f64 = 0.0;

/// On-hand strictly above this is overstock; exactly this many units is
/// still normal.
pub const OVERSTOCK_THRESHOLD: f64 = 5000.0;

/// Classify a single on-hand quantity. Total: every finite value lands in
/// exactly one bucket.
pub fn classify_on_hand(on_hand: f64) -> StockStatus {
    if on_hand <= OUT_OF_STOCK_MAX {
        StockStatus::OutOfStock
    } else if on_hand > OVERSTOCK_THRESHOLD {
        StockStatus::Overstock
    } else {
        StockStatus::Normal
    }
}

/// Stock status for every row of the dataset, in input order. Unlike
/// buildability there is no status filter; inactive and obsolete rows are
/// classified like any other.
pub fn classify_stock(dataset: &PartDataset) -> ReportResult<Vec<StockStatusRow>> {
    require_columns(dataset, STOCK_STATUS_COLUMNS)?;

    let mut rows = Vec::with_capacity(dataset.row_count());
    for row in dataset.rows() {
        let on_hand = numeric_cell(row, columns::ON_HAND)?;
        rows.push(StockStatusRow {
            part_number: row.cell(columns::PART_NUMBER).unwrap_or("").to_string(),
            on_hand,
            stock_status: classify_on_hand(on_hand),
        });
    }
    Ok(rows)
}
