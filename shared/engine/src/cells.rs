//! Column and cell checks shared by the report operations.

use stockline_models::{PartDataset, PartRow};

use crate::error::{ReportError, ReportResult};

/// Verify that `dataset` carries every column in `required`, reporting all
/// absent columns at once. Runs before any row is read.
pub(crate) fn require_columns(dataset: &PartDataset, required: &[&str]) -> ReportResult<()> {
    let missing = dataset.missing_columns(required);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ReportError::missing_columns(missing))
    }
}

/// Read a cell as a finite number. Empty, absent, non-numeric and non-finite
/// cells are all malformed: the callers feed the value straight into min and
/// clamp arithmetic, which would silently absorb a NaN.
pub(crate) fn numeric_cell(row: &PartRow, column: &str) -> ReportResult<f64> {
    let raw = row.cell(column).unwrap_or("");
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ReportError::malformed_value(row.label(), column, raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockline_models::columns;

    fn one_row(on_hand: &str) -> PartDataset {
        PartDataset::from_cells(
            &[columns::PART_NUMBER, columns::ON_HAND],
            &[&["PN-001", on_hand]],
        )
    }

    #[test]
    fn test_numeric_cell_parses_plain_and_padded_numbers() {
        assert_eq!(numeric_cell(&one_row("42").rows()[0], columns::ON_HAND), Ok(42.0));
        assert_eq!(numeric_cell(&one_row(" 3.5 ").rows()[0], columns::ON_HAND), Ok(3.5));
        assert_eq!(numeric_cell(&one_row("-10").rows()[0], columns::ON_HAND), Ok(-10.0));
    }

    #[test]
    fn test_numeric_cell_rejects_text_empty_and_non_finite() {
        for bad in ["many", "", "NaN", "inf", "1,000"] {
            let dataset = one_row(bad);
            let error = numeric_cell(&dataset.rows()[0], columns::ON_HAND).unwrap_err();
            assert_eq!(
                error,
                ReportError::malformed_value("part PN-001", columns::ON_HAND, bad)
            );
        }
    }

    #[test]
    fn test_require_columns_passes_exact_headers_only() {
        let dataset = one_row("1");
        assert!(require_columns(&dataset, &[columns::PART_NUMBER, columns::ON_HAND]).is_ok());

        let error = require_columns(&dataset, &[columns::ON_HAND, columns::DAILY_DEMAND]).unwrap_err();
        assert_eq!(
            error,
            ReportError::missing_columns(vec!["Daily_Demand".to_string()])
        );
    }
}
