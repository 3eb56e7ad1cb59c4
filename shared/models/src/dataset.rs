//! Tabular part dataset consumed by the report engine.
//!
//! A [`PartDataset`] is the in-memory form of one uploaded spreadsheet: the
//! ordered header row plus every data row as raw text cells keyed by exact
//! column name. Typing of numeric cells is deliberately deferred to the
//! report operations, so a malformed value is reported by the operation that
//! actually consumes it rather than at load time.

use std::collections::HashMap;

/// Contract column names. Matching is exact and case-sensitive; `status`,
/// `Part Number` or `ON_HAND` do not satisfy these.
pub mod columns {
    pub const PART_NUMBER: &str = "Part_Number";
    pub const FINAL_PRODUCT: &str = "Final_Product";
    pub const STATUS: &str = "Status";
    pub const CTB_QUANTITY: &str = "CTB_Quantity";
    pub const ON_HAND: &str = "On_Hand";
    pub const DAILY_DEMAND: &str = "Daily_Demand";
    pub const DUE_DATE: &str = "Due_Date";
    pub const VENDOR_NAME: &str = "Vendor_Name";
    pub const PO_NUMBER: &str = "PO_Number";
}

/// `Status` value that admits a row into buildability aggregation.
/// Case-sensitive: `"active"` and `"ACTIVE"` do not qualify.
pub const ACTIVE_STATUS: &str = "Active";

/// One data row: the 1-based spreadsheet row number (the header is row 1,
/// so data starts at 2) and the raw cell text per column.
#[derive(Debug, Clone, PartialEq)]
pub struct PartRow {
    row_number: usize,
    cells: HashMap<String, String>,
}

impl PartRow {
    pub fn new(row_number: usize, cells: HashMap<String, String>) -> Self {
        Self { row_number, cells }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Raw cell text for a column, if the row carries one.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Identifier used when reporting this row in errors: the part number
    /// when present and non-empty, otherwise the spreadsheet row number.
    pub fn label(&self) -> String {
        match self.cell(columns::PART_NUMBER) {
            Some(part) if !part.is_empty() => format!("part {part}"),
            _ => format!("row {}", self.row_number),
        }
    }
}

/// An uploaded dataset: ordered headers plus data rows in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDataset {
    columns: Vec<String>,
    rows: Vec<PartRow>,
}

impl PartDataset {
    pub fn new(columns: Vec<String>, rows: Vec<PartRow>) -> Self {
        Self { columns, rows }
    }

    /// Build a dataset from literal header and cell text, numbering data
    /// rows from 2 the way the file parsers do. Intended for tests and
    /// fixtures.
    pub fn from_cells(columns: &[&str], rows: &[&[&str]]) -> Self {
        let column_names: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = rows
            .iter()
            .enumerate()
            .map(|(idx, cells)| {
                let cells = column_names
                    .iter()
                    .cloned()
                    .zip(cells.iter().map(|c| c.to_string()))
                    .collect();
                PartRow::new(idx + 2, cells)
            })
            .collect();
        Self::new(column_names, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[PartRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Columns from `required` that the dataset lacks, in `required` order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|c| !self.has_column(c))
            .map(|c| c.to_string())
            .collect()
    }
}
