//! Wire types for the web-search insight capability.

use serde::{Deserialize, Serialize};

/// A single web-search hit. The external contract is exactly this triple;
/// anything else the upstream returns is dropped at the client boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}

/// Response of the insight service: the hits, plus an optional LLM-written
/// condensation of their snippets when summarization was requested and the
/// language model was reachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightAnswer {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub summary: Option<String>,
}
