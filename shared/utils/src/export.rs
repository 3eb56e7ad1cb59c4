//! Report serialization for download.

use stockline_models::PoSuggestionRow;

use crate::error::{StocklineError, StocklineResult};

/// Serialize purchase-order suggestions to CSV under the contract headers
/// `Part_Number`, `On_Hand`, `Daily_Demand`, `Suggested_Order_Qty`. An empty
/// report still produces the header line so the download is never a zero
/// byte file.
pub fn po_suggestions_to_csv(rows: &[PoSuggestionRow]) -> StocklineResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if rows.is_empty() {
        writer
            .write_record(["Part_Number", "On_Hand", "Daily_Demand", "Suggested_Order_Qty"])
            .map_err(|e| StocklineError::internal(format!("CSV write failed: {}", e)))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| StocklineError::internal(format!("CSV write failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| StocklineError::internal(format!("CSV buffer error: {}", e)))
}
