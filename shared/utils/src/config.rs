use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub reporting: ReportingConfig,
    pub insight: InsightConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Days of forward demand a purchase order covers when neither the
    /// request nor the session profile supplies a target.
    pub default_target_days_of_inventory: i64,
    /// File extensions the dataset upload endpoint accepts.
    pub allowed_upload_extensions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    pub search_api_url: String,
    pub search_api_key: Option<String>,
    pub max_results: usize,
    pub llm_api_url: String,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with STOCKLINE prefix
            .add_source(Environment::with_prefix("STOCKLINE").separator("__"));

        config.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                max_upload_bytes: 16 * 1024 * 1024, // 16MB
                timeout_seconds: 30,
            },
            reporting: ReportingConfig {
                default_target_days_of_inventory: 14,
                allowed_upload_extensions: vec![
                    "csv".to_string(),
                    "xlsx".to_string(),
                    "xls".to_string(),
                ],
            },
            insight: InsightConfig {
                search_api_url: "https://serpapi.com/search".to_string(),
                search_api_key: None,
                max_results: 5,
                llm_api_url: "https://api.openai.com/v1".to_string(),
                llm_api_key: None,
                llm_model: "gpt-4o-mini".to_string(),
                timeout_seconds: 20,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "json".to_string(),
                file_path: None,
            },
        }
    }
}
