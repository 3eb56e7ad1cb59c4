//! Rows of the three derived reports.
//!
//! Field names serialize under the exact column labels downstream consumers
//! and the CSV export expect, hence the `rename` attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of the clear-to-build summary: the most constrained component
/// bounds how many units of the final product can currently be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildabilitySummary {
    #[serde(rename = "Final_Product")]
    pub final_product: String,
    #[serde(rename = "Buildable_Units")]
    pub buildable_units: f64,
}

/// Three-way stock classification for a single part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Overstock")]
    Overstock,
    #[serde(rename = "Normal")]
    Normal,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::Overstock => "Overstock",
            Self::Normal => "Normal",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the stock status report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockStatusRow {
    #[serde(rename = "Part_Number")]
    pub part_number: String,
    #[serde(rename = "On_Hand")]
    pub on_hand: f64,
    #[serde(rename = "Stock_Status")]
    pub stock_status: StockStatus,
}

/// One line of the purchase-order suggestion report. Only parts with a
/// strictly positive suggested quantity appear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoSuggestionRow {
    #[serde(rename = "Part_Number")]
    pub part_number: String,
    #[serde(rename = "On_Hand")]
    pub on_hand: f64,
    #[serde(rename = "Daily_Demand")]
    pub daily_demand: f64,
    #[serde(rename = "Suggested_Order_Qty")]
    pub suggested_order_qty: f64,
}
