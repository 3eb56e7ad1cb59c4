//! Insight Service
//!
//! Orchestrates the search lookup and the optional summary call.

use std::sync::Arc;

use tracing::warn;

use stockline_models::InsightAnswer;
use stockline_utils::InsightConfig;

use crate::search_client::SearchClient;
use crate::summarizer::SummaryClient;

#[derive(Clone)]
pub struct InsightService {
    search: Arc<SearchClient>,
    summarizer: Arc<SummaryClient>,
}

impl InsightService {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            search: Arc::new(SearchClient::new(config)),
            summarizer: Arc::new(SummaryClient::new(config)),
        }
    }

    /// Search hits for the query, optionally condensed by the language
    /// model. Upstream trouble degrades the answer rather than failing it:
    /// no hits when the search is down, no summary when the model is.
    pub async fn answer(&self, query: &str, summarize: bool) -> InsightAnswer {
        let results = self.search.search(query).await;

        let summary = if summarize && !results.is_empty() {
            match self.summarizer.summarize(query, &results).await {
                Ok(summary) => Some(summary),
                Err(e) => {
                    warn!(error = %e, "summary call failed, returning results only");
                    None
                }
            }
        } else {
            None
        };

        InsightAnswer {
            query: query.to_string(),
            results,
            summary,
        }
    }
}
