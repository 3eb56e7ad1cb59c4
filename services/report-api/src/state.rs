//! Shared application state.
//!
//! Uploaded datasets live in process memory for the lifetime of the
//! service. Nothing is persisted; a restart clears the store. That is the
//! intended scope of this tool, not a missing feature.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use stockline_models::{PartDataset, SessionProfile};
use stockline_utils::{AppConfig, TableFormat};

/// One uploaded dataset and everything captured alongside it.
#[derive(Debug, Clone)]
pub struct StoredDataset {
    pub id: Uuid,
    pub fingerprint: String,
    pub filename: String,
    pub format: TableFormat,
    pub dataset: PartDataset,
    pub warnings: Vec<String>,
    pub profile: SessionProfile,
    pub uploaded_at: DateTime<Utc>,
}

pub type DatasetStore = Arc<RwLock<HashMap<Uuid, StoredDataset>>>;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub datasets: DatasetStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            datasets: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}
