use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn detailed_health_check(State(state): State<AppState>) -> Json<Value> {
    let mut health_status = json!({
        "status": "healthy",
        "service": "stockline-report-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {}
    });

    // Check the in-memory dataset store
    let store_status = match state.datasets.try_read() {
        Ok(datasets) => json!({
            "status": "healthy",
            "datasets_held": datasets.len(),
        }),
        Err(_) => json!({
            "status": "degraded",
            "message": "Dataset store busy",
        }),
    };
    health_status["checks"]["dataset_store"] = store_status;

    // Report the effective defaults so a misconfigured deployment is visible
    health_status["checks"]["reporting"] = json!({
        "status": "healthy",
        "default_target_days_of_inventory": state.config.reporting.default_target_days_of_inventory,
        "allowed_upload_extensions": state.config.reporting.allowed_upload_extensions,
    });

    // Determine overall status
    let all_healthy = health_status["checks"]
        .as_object()
        .map(|checks| checks.values().all(|check| check["status"] == "healthy"))
        .unwrap_or(false);

    if !all_healthy {
        health_status["status"] = json!("degraded");
    }

    Json(health_status)
}
