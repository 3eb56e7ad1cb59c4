//! Stockline Insight Service
//!
//! Ad-hoc web-search lookups with optional LLM summarization, kept apart
//! from the report pipeline: nothing here can touch a report result. The
//! service degrades instead of failing, so an unreachable upstream means an
//! empty result list or a missing summary, never an error page.

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use stockline_models::InsightAnswer;
use stockline_utils::AppConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod search_client;
mod service;
mod summarizer;

use service::InsightService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();
    info!("Starting Stockline Insight Service");

    let config = AppConfig::load().unwrap_or_else(|_| {
        eprintln!("Failed to load configuration, using defaults");
        AppConfig::default()
    });

    // Initialize service
    let service = InsightService::new(&config.insight);

    // Build router
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/insight/query", post(run_query))
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8082));
    let listener = TcpListener::bind(&addr).await?;
    info!("Insight Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "stockline-insight",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Run a search query, optionally summarized
#[derive(Debug, Deserialize)]
struct InsightQueryRequest {
    query: String,
    #[serde(default)]
    summarize: bool,
}

async fn run_query(
    State(service): State<InsightService>,
    Json(request): Json<InsightQueryRequest>,
) -> Result<Json<InsightAnswer>, (StatusCode, String)> {
    if request.query.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Query must not be empty".to_string()));
    }

    let answer = service.answer(request.query.trim(), request.summarize).await;
    Ok(Json(answer))
}
