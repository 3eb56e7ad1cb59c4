//! Summary Client
//!
//! Chat-completion call that condenses search hits into a short answer.
//! The caller decides whether a summary is wanted; this module only knows
//! how to ask for one.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use stockline_models::SearchResult;
use stockline_utils::InsightConfig;

const SUMMARY_PROMPT: &str = r#"You are a supply-chain research assistant. Summarize the provided search results into a short, factual answer to the user's question. Only state facts that appear in the results; do not invent figures or sources. If the results do not answer the question, say so in one sentence."#;

pub struct SummaryClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

impl SummaryClient {
    pub fn new(config: &InsightConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.llm_api_url.clone(),
            api_key: config.llm_api_key.clone(),
            model: config.llm_model.clone(),
        }
    }

    pub async fn summarize(&self, query: &str, results: &[SearchResult]) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .context("No LLM API key configured")?;

        let digest = results
            .iter()
            .map(|r| format!("- {} ({}): {}", r.title, r.link, r.snippet))
            .collect::<Vec<_>>()
            .join("\n");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SUMMARY_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Question: {}\n\nSearch results:\n{}", query, digest),
                },
            ],
            max_tokens: 512,
            temperature: 0.2,
        };

        debug!(model = %self.model, results = results.len(), "requesting summary");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send summary request")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            bail!("Summary API error {}: {}", status, text);
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Failed to parse summary response")?;

        body.choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .context("No response content")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}
