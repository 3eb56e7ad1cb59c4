use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockline_engine::ReportError;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum StocklineError {
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Dataset parse error: {message}")]
    DatasetParse { message: String },

    #[error("Report error: {message}")]
    Report { message: String },

    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl StocklineError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn dataset_parse(message: impl Into<String>) -> Self {
        Self::DatasetParse {
            message: message.into(),
        }
    }

    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::DatasetParse { .. } => "DATASET_PARSE_ERROR",
            Self::Report { .. } => "REPORT_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Configuration { .. } => 500,
            Self::DatasetParse { .. } => 422,
            Self::Report { .. } => 422,
            Self::ExternalService { .. } => 502,
            Self::NotFound { .. } => 404,
            Self::Internal { .. } => 500,
        }
    }
}

pub type StocklineResult<T> = Result<T, StocklineError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<StocklineError> for ErrorResponse {
    fn from(error: StocklineError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: None,
        }
    }
}

impl From<ReportError> for StocklineError {
    fn from(error: ReportError) -> Self {
        match &error {
            // A bad report parameter is the caller's mistake, not the
            // dataset's. Everything else stays a report failure.
            ReportError::InvalidConfiguration { .. } => {
                Self::validation("target_days_of_inventory", error.to_string())
            }
            _ => Self::report(error.to_string()),
        }
    }
}
