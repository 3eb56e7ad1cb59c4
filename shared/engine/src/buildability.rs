//! Clear-to-build aggregation.

use std::collections::BTreeMap;

use stockline_models::{columns, BuildabilitySummary, PartDataset, ACTIVE_STATUS};

use crate::cells::{numeric_cell, require_columns};
use crate::error::ReportResult;

/// Columns [`compute_buildability`] consumes.
pub const BUILDABILITY_COLUMNS: &[&str] = &[
    columns::FINAL_PRODUCT,
    columns::STATUS,
    columns::CTB_QUANTITY,
];

/// How many units of each final product can be built right now, bounded by
/// the most constraining component.
///
/// Only rows whose `Status` is exactly `"Active"` participate; rows with any
/// other status, a differently-cased spelling, or no status at all are
/// excluded before their cells are inspected. A product whose rows are all
/// excluded is absent from the output, as is a row with no `Final_Product`
/// value. Output order is not contractual but is emitted sorted by product
/// name so repeated runs read identically.
pub fn compute_buildability(dataset: &PartDataset) -> ReportResult<Vec<BuildabilitySummary>> {
    require_columns(dataset, BUILDABILITY_COLUMNS)?;

    let mut groups: BTreeMap<String, f64> = BTreeMap::new();
    for row in dataset.rows() {
        if row.cell(columns::STATUS) != Some(ACTIVE_STATUS) {
            continue;
        }
        let product = match row.cell(columns::FINAL_PRODUCT) {
            Some(product) if !product.is_empty() => product.to_string(),
            _ => continue,
        };
        let quantity = numeric_cell(row, columns::CTB_QUANTITY)?;
        groups
            .entry(product)
            .and_modify(|units| *units = units.min(quantity))
            .or_insert(quantity);
    }

    Ok(groups
        .into_iter()
        .map(|(final_product, buildable_units)| BuildabilitySummary {
            final_product,
            buildable_units,
        })
        .collect())
}
