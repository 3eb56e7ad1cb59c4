//! Report operation errors.
//!
//! Every failure of a report operation is one of three kinds: the dataset
//! lacks a column the operation consumes, a consumed cell cannot be read as
//! the required type, or a caller-supplied parameter is outside its domain.
//! There is no partial-success mode; an operation returns either a complete
//! result or exactly one of these.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// The dataset is missing one or more columns the operation needs.
    /// Detected before any row is read, and all absences are reported in
    /// one error.
    #[error("missing required column(s): {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A cell consumed by the operation could not be read as a number.
    /// `row` names the part when the dataset carries a part number,
    /// otherwise the spreadsheet row.
    #[error("malformed {column} value {value:?} in {row}")]
    MalformedValue {
        row: String,
        column: String,
        value: String,
    },

    /// A caller-supplied parameter is outside its valid domain. Rejected
    /// before any row processing begins.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl ReportError {
    pub fn missing_columns(columns: Vec<String>) -> Self {
        Self::MissingColumns { columns }
    }

    pub fn malformed_value(
        row: impl Into<String>,
        column: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedValue {
            row: row.into(),
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message_lists_all() {
        let error = ReportError::missing_columns(vec![
            "Status".to_string(),
            "CTB_Quantity".to_string(),
        ]);
        assert_eq!(
            error.to_string(),
            "missing required column(s): Status, CTB_Quantity"
        );
    }

    #[test]
    fn test_malformed_value_message_locates_row() {
        let error = ReportError::malformed_value("part PN-007", "On_Hand", "lots");
        assert_eq!(
            error.to_string(),
            "malformed On_Hand value \"lots\" in part PN-007"
        );
    }

    #[test]
    fn test_invalid_configuration_message() {
        let error = ReportError::invalid_configuration("target_days_of_inventory must be non-negative, got -3");
        assert!(error.to_string().starts_with("invalid configuration:"));
    }
}
