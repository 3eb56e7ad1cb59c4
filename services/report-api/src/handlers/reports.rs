//! Report Handlers
//!
//! The three derived reports over a stored dataset, individually or as one
//! bundle. Session state never leaks into the engine: the questionnaire's
//! target-days answer is folded into an explicit policy per call, and a
//! query parameter on the call wins over the stored answer.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stockline_engine::{classify_stock, compute_buildability, suggest_purchase_orders, PoPolicy};
use stockline_models::{BuildabilitySummary, PoSuggestionRow, StockStatusRow};
use stockline_utils::{ErrorResponse, StocklineError};

use crate::handlers::datasets::error_reply;
use crate::state::{AppState, StoredDataset};

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub target_days_of_inventory: Option<i64>,
}

/// Resolve the purchase policy for one call: explicit request value, else
/// the dataset's questionnaire answer, else the configured default. The
/// engine still validates whatever comes out.
pub(crate) fn resolve_policy(
    state: &AppState,
    stored: &StoredDataset,
    requested: Option<i64>,
) -> PoPolicy {
    let days = requested
        .or(stored.profile.target_days_of_inventory)
        .unwrap_or(state.config.reporting.default_target_days_of_inventory);
    PoPolicy::new(days)
}

#[derive(Debug, Serialize)]
pub struct BuildabilityReport {
    pub dataset_id: Uuid,
    pub rows: Vec<BuildabilitySummary>,
    pub generated_at: String,
}

/// Clear-to-build report.
///
/// GET /api/v1/datasets/{id}/reports/buildability
pub async fn get_buildability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BuildabilityReport>, (StatusCode, Json<ErrorResponse>)> {
    let datasets = state.datasets.read().await;
    let stored = datasets
        .get(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;

    let rows = compute_buildability(&stored.dataset).map_err(|e| error_reply(e.into()))?;

    Ok(Json(BuildabilityReport {
        dataset_id: id,
        rows,
        generated_at: Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Serialize)]
pub struct StockStatusReport {
    pub dataset_id: Uuid,
    pub rows: Vec<StockStatusRow>,
    pub generated_at: String,
}

/// Stock status report.
///
/// GET /api/v1/datasets/{id}/reports/stock-status
pub async fn get_stock_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StockStatusReport>, (StatusCode, Json<ErrorResponse>)> {
    let datasets = state.datasets.read().await;
    let stored = datasets
        .get(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;

    let rows = classify_stock(&stored.dataset).map_err(|e| error_reply(e.into()))?;

    Ok(Json(StockStatusReport {
        dataset_id: id,
        rows,
        generated_at: Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Serialize)]
pub struct PoSuggestionReport {
    pub dataset_id: Uuid,
    pub target_days_of_inventory: i64,
    pub rows: Vec<PoSuggestionRow>,
    pub generated_at: String,
}

/// Purchase-order suggestion report.
///
/// GET /api/v1/datasets/{id}/reports/po-suggestions
pub async fn get_po_suggestions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<PoSuggestionReport>, (StatusCode, Json<ErrorResponse>)> {
    let datasets = state.datasets.read().await;
    let stored = datasets
        .get(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;

    let policy = resolve_policy(&state, stored, query.target_days_of_inventory);
    let rows =
        suggest_purchase_orders(&stored.dataset, &policy).map_err(|e| error_reply(e.into()))?;

    Ok(Json(PoSuggestionReport {
        dataset_id: id,
        target_days_of_inventory: policy.target_days_of_inventory,
        rows,
        generated_at: Utc::now().to_rfc3339(),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct RunReportsRequest {
    pub target_days_of_inventory: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ReportBundle {
    pub dataset_id: Uuid,
    pub target_days_of_inventory: i64,
    pub buildability: Vec<BuildabilitySummary>,
    pub stock_status: Vec<StockStatusRow>,
    pub po_suggestions: Vec<PoSuggestionRow>,
    pub generated_at: String,
}

/// Run all three reports in one call. The first failing report aborts the
/// bundle; there is no partial bundle.
///
/// POST /api/v1/datasets/{id}/reports
pub async fn run_reports(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<RunReportsRequest>>,
) -> Result<Json<ReportBundle>, (StatusCode, Json<ErrorResponse>)> {
    let requested = body.and_then(|Json(request)| request.target_days_of_inventory);

    let datasets = state.datasets.read().await;
    let stored = datasets
        .get(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;

    let policy = resolve_policy(&state, stored, requested);
    let buildability = compute_buildability(&stored.dataset).map_err(|e| error_reply(e.into()))?;
    let stock_status = classify_stock(&stored.dataset).map_err(|e| error_reply(e.into()))?;
    let po_suggestions =
        suggest_purchase_orders(&stored.dataset, &policy).map_err(|e| error_reply(e.into()))?;

    Ok(Json(ReportBundle {
        dataset_id: id,
        target_days_of_inventory: policy.target_days_of_inventory,
        buildability,
        stock_status,
        po_suggestions,
        generated_at: Utc::now().to_rfc3339(),
    }))
}
