//! Report Download Handler

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Json},
};
use uuid::Uuid;

use stockline_engine::suggest_purchase_orders;
use stockline_utils::{po_suggestions_to_csv, ErrorResponse, StocklineError};

use crate::handlers::datasets::error_reply;
use crate::handlers::reports::{resolve_policy, ReportQuery};
use crate::state::AppState;

/// Download the purchase-order suggestion report as a CSV attachment. The
/// rows are recomputed at download time, so the file always reflects the
/// current profile and query parameters.
///
/// GET /api/v1/datasets/{id}/reports/po-suggestions/download
pub async fn download_po_suggestions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let datasets = state.datasets.read().await;
    let stored = datasets
        .get(&id)
        .ok_or_else(|| error_reply(StocklineError::not_found(format!("dataset {}", id))))?;

    let policy = resolve_policy(&state, stored, query.target_days_of_inventory);
    let rows =
        suggest_purchase_orders(&stored.dataset, &policy).map_err(|e| error_reply(e.into()))?;
    let csv = po_suggestions_to_csv(&rows).map_err(error_reply)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"PO_Suggestions.csv\""),
    );

    Ok((headers, csv))
}
