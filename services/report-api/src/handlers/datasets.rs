//! Dataset Intake Handlers
//!
//! Multipart spreadsheet upload with the intake questionnaire, stored
//! dataset summary, and session profile updates.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use stockline_models::{BusinessRole, PartDataset, SessionProfile};
use stockline_utils::{
    content_fingerprint, validate_file_size, validate_file_type, validate_model, ErrorResponse,
    StocklineError, TableFormat, TableParser,
};

use crate::state::{AppState, StoredDataset};

/// Convert an application error into the HTTP reply shape shared by every
/// handler in this service.
pub(crate) fn error_reply(error: StocklineError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(error.http_status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(error)))
}

/// Dataset upload response
#[derive(Debug, Serialize)]
pub struct DatasetUploadResponse {
    pub dataset_id: Uuid,
    pub fingerprint: String,
    pub filename: String,
    pub format: String,
    pub total_rows: usize,
    pub columns: Vec<String>,
    pub supported_reports: SupportedReports,
    pub warnings: Vec<String>,
    pub profile: SessionProfile,
}

/// Which of the three reports this dataset's columns can feed. A probe, not
/// a gate: the report endpoints re-check and answer with the exact missing
/// columns.
#[derive(Debug, Serialize)]
pub struct SupportedReports {
    pub buildability: bool,
    pub stock_status: bool,
    pub po_suggestions: bool,
}

impl SupportedReports {
    pub(crate) fn for_dataset(dataset: &PartDataset) -> Self {
        Self {
            buildability: dataset
                .missing_columns(stockline_engine::BUILDABILITY_COLUMNS)
                .is_empty(),
            stock_status: dataset
                .missing_columns(stockline_engine::STOCK_STATUS_COLUMNS)
                .is_empty(),
            po_suggestions: dataset
                .missing_columns(stockline_engine::PO_SUGGESTION_COLUMNS)
                .is_empty(),
        }
    }
}

/// Upload a part dataset, optionally alongside questionnaire answers.
///
/// POST /api/v1/datasets/upload
///
/// Multipart fields: `file` (required), `role`, `industry`,
/// `target_days_of_inventory`.
pub async fn upload_dataset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DatasetUploadResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut filename: Option<String> = None;
    let mut format_hint: Option<TableFormat> = None;
    let mut data: Option<axum::body::Bytes> = None;
    let mut profile = SessionProfile::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error_reply(StocklineError::validation(
            "upload",
            format!("Failed to read upload: {}", e),
        ))
    })? {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(|s| s.to_string());
                format_hint = field.content_type().and_then(TableFormat::from_content_type);
                data = Some(field.bytes().await.map_err(|e| {
                    error_reply(StocklineError::validation(
                        "file",
                        format!("Failed to read file data: {}", e),
                    ))
                })?);
            }
            Some("role") => {
                let answer = read_text_field(field, "role").await?;
                if !answer.trim().is_empty() {
                    profile.role = Some(BusinessRole::from_answer(&answer));
                }
            }
            Some("industry") => {
                let answer = read_text_field(field, "industry").await?;
                if !answer.trim().is_empty() {
                    profile.industry = Some(answer.trim().to_string());
                }
            }
            Some("target_days_of_inventory") => {
                let answer = read_text_field(field, "target_days_of_inventory").await?;
                let days = answer.trim().parse::<i64>().map_err(|_| {
                    error_reply(StocklineError::validation(
                        "target_days_of_inventory",
                        format!("Not a whole number: {:?}", answer.trim()),
                    ))
                })?;
                profile.target_days_of_inventory = Some(days);
            }
            _ => {}
        }
    }

    let filename = filename.unwrap_or_else(|| "unknown.csv".to_string());
    let data = data.ok_or_else(|| {
        error_reply(StocklineError::validation("file", "No file provided"))
    })?;

    validate_file_type(&filename, &state.config.reporting.allowed_upload_extensions)
        .map_err(error_reply)?;
    validate_file_size(data.len() as u64, state.config.server.max_upload_bytes as u64)
        .map_err(error_reply)?;
    validate_model(&profile).map_err(error_reply)?;

    let parser = TableParser::new();
    let parsed = parser.parse_bytes(&filename, &data, format_hint).map_err(|e| {
        error_reply(StocklineError::dataset_parse(format!(
            "Failed to parse dataset: {}",
            e
        )))
    })?;

    let stored = StoredDataset {
        id: Uuid::new_v4(),
        fingerprint: content_fingerprint(&data),
        filename: filename.clone(),
        format: parsed.format,
        dataset: parsed.dataset,
        warnings: parsed.warnings,
        profile,
        uploaded_at: Utc::now(),
    };

    tracing::info!(
        dataset_id = %stored.id,
        rows = stored.dataset.row_count(),
        format = stored.format.as_str(),
        "dataset uploaded"
    );

    let response = DatasetUploadResponse {
        dataset_id: stored.id,
        fingerprint: stored.fingerprint.clone(),
        filename,
        format: stored.format.as_str().to_string(),
        total_rows: stored.dataset.row_count(),
        columns: stored.dataset.columns().to_vec(),
        supported_reports: SupportedReports::for_dataset(&stored.dataset),
        warnings: stored.warnings.clone(),
        profile: stored.profile.clone(),
    };

    let mut datasets = state.datasets.write().await;
    datasets.insert(stored.id, stored);

    Ok(Json(response))
}

async fn read_text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, (StatusCode, Json<ErrorResponse>)> {
    field.text().await.map_err(|e| {
        error_reply(StocklineError::validation(
            name,
            format!("Failed to read field: {}", e),
        ))
    })
}

/// Stored dataset summary
#[derive(Debug, Serialize)]
pub struct DatasetSummaryResponse {
    pub dataset_id: Uuid,
    pub fingerprint: String,
    pub filename: String,
    pub format: String,
    pub total_rows: usize,
    pub columns: Vec<String>,
    pub supported_reports: SupportedReports,
    pub warnings: Vec<String>,
    pub profile: SessionProfile,
    pub uploaded_at: String,
}

/// Fetch the summary of a previously uploaded dataset.
///
/// GET /api/v1/datasets/{id}
pub async fn get_dataset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DatasetSummaryResponse>, (StatusCode, Json<ErrorResponse>)> {
    let datasets = state.datasets.read().await;
    let stored = datasets
        .get(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;

    Ok(Json(DatasetSummaryResponse {
        dataset_id: stored.id,
        fingerprint: stored.fingerprint.clone(),
        filename: stored.filename.clone(),
        format: stored.format.as_str().to_string(),
        total_rows: stored.dataset.row_count(),
        columns: stored.dataset.columns().to_vec(),
        supported_reports: SupportedReports::for_dataset(&stored.dataset),
        warnings: stored.warnings.clone(),
        profile: stored.profile.clone(),
        uploaded_at: stored.uploaded_at.to_rfc3339(),
    }))
}

/// Replace the session profile attached to a dataset.
///
/// PUT /api/v1/datasets/{id}/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<SessionProfile>,
) -> Result<Json<SessionProfile>, (StatusCode, Json<ErrorResponse>)> {
    validate_model(&profile).map_err(error_reply)?;

    let mut datasets = state.datasets.write().await;
    let stored = datasets
        .get_mut(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;
    stored.profile = profile.clone();

    Ok(Json(profile))
}
