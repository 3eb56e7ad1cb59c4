//! Purchase-order quantity suggestions.

use stockline_models::{columns, PartDataset, PoSuggestionRow};

use crate::cells::{numeric_cell, require_columns};
use crate::error::{ReportError, ReportResult};

/// Columns [`suggest_purchase_orders`] consumes.
pub const PO_SUGGESTION_COLUMNS: &[&str] = &[
    columns::PART_NUMBER,
    columns::ON_HAND,
    columns::DAILY_DEMAND,
];

/// Days of forward demand an order should cover when the caller supplies no
/// target of their own.
pub const DEFAULT_TARGET_DAYS: i64 = 14;

/// Ordering policy for purchase suggestions. The target is the one tunable
/// the operation has: how many days of forward demand on-hand stock should
/// cover after the suggested order arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoPolicy {
    pub target_days_of_inventory: i64,
}

impl PoPolicy {
    pub fn new(target_days_of_inventory: i64) -> Self {
        Self {
            target_days_of_inventory,
        }
    }

    fn validate(&self) -> ReportResult<()> {
        if self.target_days_of_inventory < 0 {
            return Err(ReportError::invalid_configuration(format!(
                "target_days_of_inventory must be non-negative, got {}",
                self.target_days_of_inventory
            )));
        }
        Ok(())
    }
}

impl Default for PoPolicy {
    fn default() -> Self {
        Self {
            target_days_of_inventory: DEFAULT_TARGET_DAYS,
        }
    }
}

/// Suggested order quantity per part: `target_days × Daily_Demand − On_Hand`,
/// clamped at zero, keeping only parts that still need quantity. Surpluses
/// never offset shortfalls. Input order is preserved among kept rows.
///
/// The policy is validated before any row is read; a negative target fails
/// without touching the data.
pub fn suggest_purchase_orders(
    dataset: &PartDataset,
    policy: &PoPolicy,
) -> ReportResult<Vec<PoSuggestionRow>> {
    policy.validate()?;
    require_columns(dataset, PO_SUGGESTION_COLUMNS)?;

    let target = policy.target_days_of_inventory as f64;
    let mut rows = Vec::new();
    for row in dataset.rows() {
        let on_hand = numeric_cell(row, columns::ON_HAND)?;
        let daily_demand = numeric_cell(row, columns::DAILY_DEMAND)?;
        let suggested_order_qty = (target * daily_demand - on_hand).max(0.0);
        if suggested_order_qty > 0.0 {
            rows.push(PoSuggestionRow {
                part_number: row.cell(columns::PART_NUMBER).unwrap_or("").to_string(),
                on_hand,
                daily_demand,
                suggested_order_qty,
            });
        }
    }
    Ok(rows)
}
