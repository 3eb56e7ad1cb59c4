use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers::*, state::AppState};

pub fn create_api_routes() -> Router<AppState> {
    Router::new()
        .route("/health/detailed", get(detailed_health_check))
        // Dataset intake and session profile
        .route("/datasets/upload", post(upload_dataset))
        .route("/datasets/:id", get(get_dataset))
        .route("/datasets/:id/profile", put(update_profile))
        // Derived reports
        .route("/datasets/:id/reports", post(run_reports))
        .route("/datasets/:id/reports/buildability", get(get_buildability))
        .route("/datasets/:id/reports/stock-status", get(get_stock_status))
        .route("/datasets/:id/reports/po-suggestions", get(get_po_suggestions))
        .route(
            "/datasets/:id/reports/po-suggestions/download",
            get(download_po_suggestions),
        )
}
