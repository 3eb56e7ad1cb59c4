//! Dataset File Parser
//!
//! Multi-format parser turning uploaded CSV and Excel part tables into
//! [`PartDataset`] rows.
//!
//! Headers are trimmed but never renamed or re-cased; the report contract
//! matches column names exactly, so a file with `status` instead of `Status`
//! must arrive that way at the engine and fail there, visibly. Cell text is
//! kept raw for the same reason: what a value means is decided by the report
//! operation that consumes it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use stockline_models::{PartDataset, PartRow};

/// Supported dataset file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Excel, // XLSX/XLS
}

impl TableFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Excel),
            _ => None,
        }
    }

    /// Detect format from content type header
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            "text/csv" | "application/csv" => Some(Self::Csv),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(Self::Excel)
            }
            "application/vnd.ms-excel" => Some(Self::Excel),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Excel => "Excel",
        }
    }
}

/// A parsed upload: the dataset plus load-time metadata.
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub dataset: PartDataset,
    pub format: TableFormat,
    pub warnings: Vec<String>,
}

/// Tabular file parser
pub struct TableParser;

impl Default for TableParser {
    fn default() -> Self {
        Self
    }
}

impl TableParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse an uploaded file from bytes, detecting the format from the
    /// explicit hint or the filename extension.
    pub fn parse_bytes(
        &self,
        filename: &str,
        data: &[u8],
        format: Option<TableFormat>,
    ) -> Result<ParsedTable> {
        let format = format
            .or_else(|| TableFormat::from_extension(Path::new(filename)))
            .context("Could not determine file format")?;

        match format {
            TableFormat::Csv => self.parse_csv(data),
            TableFormat::Excel => self.parse_excel(data),
        }
    }

    /// Parse CSV format
    fn parse_csv(&self, data: &[u8]) -> Result<ParsedTable> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read CSV headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let cells: HashMap<String, String> = headers
                        .iter()
                        .enumerate()
                        .filter_map(|(i, h)| {
                            record.get(i).map(|v| (h.clone(), v.trim().to_string()))
                        })
                        .collect();

                    // Fully blank lines are padding, not data rows.
                    if cells.values().all(|v| v.is_empty()) {
                        continue;
                    }
                    rows.push(PartRow::new(idx + 2, cells));
                }
                Err(e) => {
                    warnings.push(format!("Row {}: parse error - {}", idx + 2, e));
                }
            }
        }

        Ok(ParsedTable {
            dataset: PartDataset::new(headers, rows),
            format: TableFormat::Csv,
            warnings,
        })
    }

    /// Parse Excel format
    fn parse_excel(&self, data: &[u8]) -> Result<ParsedTable> {
        use calamine::{open_workbook_auto_from_rs, DataType, Reader};

        let cursor = std::io::Cursor::new(data);
        let mut workbook =
            open_workbook_auto_from_rs(cursor).context("Failed to open Excel workbook")?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .context("No sheets found in workbook")?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .context("Failed to read worksheet")??;

        let mut rows_iter = range.rows();

        // First row is headers
        let headers: Vec<String> = rows_iter
            .next()
            .context("Empty worksheet")?
            .iter()
            .map(|cell: &DataType| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();

        for (idx, row) in rows_iter.enumerate() {
            let cells: HashMap<String, String> = headers
                .iter()
                .enumerate()
                .filter_map(|(i, h): (usize, &String)| {
                    row.get(i)
                        .map(|v: &DataType| (h.clone(), v.to_string().trim().to_string()))
                })
                .collect();

            if cells.values().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(PartRow::new(idx + 2, cells));
        }

        Ok(ParsedTable {
            dataset: PartDataset::new(headers, rows),
            format: TableFormat::Excel,
            warnings: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stockline_models::columns;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            TableFormat::from_extension(Path::new("parts.csv")),
            Some(TableFormat::Csv)
        );
        assert_eq!(
            TableFormat::from_extension(Path::new("parts.xlsx")),
            Some(TableFormat::Excel)
        );
        assert_eq!(
            TableFormat::from_extension(Path::new("parts.XLS")),
            Some(TableFormat::Excel)
        );
        assert_eq!(TableFormat::from_extension(Path::new("parts.txt")), None);
        assert_eq!(
            TableFormat::from_content_type("text/csv"),
            Some(TableFormat::Csv)
        );
        assert_eq!(TableFormat::from_content_type("application/pdf"), None);
    }

    #[test]
    fn test_csv_parsing_preserves_header_case() {
        let data = b"Part_Number,Status,On_Hand\nPN-001,Active,20\nPN-002,Retired,0\n";
        let parsed = TableParser::new().parse_csv(data).unwrap();

        assert_eq!(
            parsed.dataset.columns(),
            &["Part_Number", "Status", "On_Hand"]
        );
        assert_eq!(parsed.dataset.row_count(), 2);
        assert_eq!(parsed.dataset.rows()[0].cell(columns::STATUS), Some("Active"));
        assert_eq!(parsed.dataset.rows()[1].cell(columns::ON_HAND), Some("0"));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_csv_cells_are_trimmed_but_not_recased() {
        let data = b" Part_Number , Status \n PN-001 , ACTIVE \n";
        let parsed = TableParser::new().parse_csv(data).unwrap();

        assert_eq!(parsed.dataset.columns(), &["Part_Number", "Status"]);
        assert_eq!(parsed.dataset.rows()[0].cell(columns::STATUS), Some("ACTIVE"));
    }

    #[test]
    fn test_blank_rows_skipped_without_renumbering() {
        let data = b"Part_Number,On_Hand\nPN-001,5\n,\nPN-002,7\n";
        let parsed = TableParser::new().parse_csv(data).unwrap();

        assert_eq!(parsed.dataset.row_count(), 2);
        // The blank line consumed row 3; PN-002 keeps its file position.
        assert_eq!(parsed.dataset.rows()[1].row_number(), 4);
    }

    #[test]
    fn test_unreadable_record_becomes_warning_not_failure() {
        let mut data = b"Part_Number,On_Hand\nPN-001,5\nPN-".to_vec();
        data.extend_from_slice(&[0xFF, 0xFE]);
        data.extend_from_slice(b",3\nPN-003,9\n");

        let parsed = TableParser::new().parse_csv(&data).unwrap();
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].starts_with("Row 3:"));
        assert_eq!(parsed.dataset.row_count(), 2);
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let result = TableParser::new().parse_bytes("parts.pdf", b"x", None);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_format_hint_wins_over_extension() {
        let data = b"Part_Number\nPN-001\n";
        let parsed = TableParser::new()
            .parse_bytes("upload.bin", data, Some(TableFormat::Csv))
            .unwrap();
        assert_eq!(parsed.format, TableFormat::Csv);
        assert_eq!(parsed.dataset.row_count(), 1);
    }

    proptest! {
        /// Parsing keeps every non-blank row and its cell text verbatim.
        #[test]
        fn prop_csv_roundtrips_cell_text(
            part in "[A-Z]{2}-[0-9]{3}",
            on_hand in 0u32..100_000,
        ) {
            let data = format!("Part_Number,On_Hand\n{},{}\n", part, on_hand);
            let parsed = TableParser::new().parse_csv(data.as_bytes()).unwrap();

            prop_assert_eq!(parsed.dataset.row_count(), 1);
            prop_assert_eq!(
                parsed.dataset.rows()[0].cell(columns::PART_NUMBER),
                Some(part.as_str())
            );
            let on_hand_text = on_hand.to_string();
            prop_assert_eq!(
                parsed.dataset.rows()[0].cell(columns::ON_HAND),
                Some(on_hand_text.as_str())
            );
        }
    }
}
