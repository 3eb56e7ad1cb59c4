//! Search Client
//!
//! Outbound call to the configured web-search endpoint. The contract is
//! deliberately small: a finite list of (title, link, snippet) hits, or an
//! empty list whenever the upstream misbehaves.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use stockline_models::SearchResult;
use stockline_utils::InsightConfig;

pub struct SearchClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    max_results: usize,
}

impl SearchClient {
    pub fn new(config: &InsightConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.search_api_url.clone(),
            api_key: config.search_api_key.clone(),
            max_results: config.max_results,
        }
    }

    /// Run one search. Transport errors, non-success statuses and
    /// undecodable bodies all collapse to an empty result list.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json")])
            .header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "search request failed");
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "search endpoint returned non-success");
            return Vec::new();
        }

        let body: SearchResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "failed to decode search response");
                return Vec::new();
            }
        };

        body.results
            .into_iter()
            .take(self.max_results)
            .map(|hit| SearchResult {
                title: hit.title,
                link: hit.link,
                snippet: hit.snippet.unwrap_or_default(),
            })
            .collect()
    }
}

/// Search endpoint response body
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    link: String,
    snippet: Option<String>,
}
