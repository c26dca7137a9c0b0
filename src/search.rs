// SPDX-License-Identifier: MIT

//! Web search capability
//!
//! Search is a black-box collaborator: given a text query, return a text
//! blob of related information, or fail. Agents inject the blob into their
//! prompts as extra context and absorb failures with canned fallbacks.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::CompassError;

/// Provider of web search context
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search the web and return a formatted text blob of results
    async fn search(&self, query: &str) -> Result<String, CompassError>;
}

#[derive(Debug, Deserialize)]
struct BraveWebResult {
    title: String,
    url: String,
    #[serde(default)]
    description: String,
}

/// Brave Search API provider
pub struct BraveSearch {
    client: Client,
    api_key: String,
}

impl BraveSearch {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a BraveSearch from the `BRAVE_API_KEY` environment variable
    pub fn from_env() -> Result<Self, CompassError> {
        let api_key = std::env::var("BRAVE_API_KEY")
            .map_err(|_| CompassError::config("BRAVE_API_KEY must be set"))?;
        Ok(Self::new(api_key))
    }
}

#[async_trait]
impl SearchProvider for BraveSearch {
    async fn search(&self, query: &str) -> Result<String, CompassError> {
        let resp = self
            .client
            .get("https://api.search.brave.com/res/v1/web/search")
            .query(&[("q", query), ("count", "10")])
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .send()
            .await?;

        if !resp.status().is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(CompassError::other(format!("Brave API error: {}", text)));
        }

        let body: serde_json::Value = resp.json().await?;

        let results_json = body
            .get("web")
            .and_then(|w| w.get("results"))
            .ok_or("Invalid response format: missing web.results")?;

        let results: Vec<BraveWebResult> = serde_json::from_value(results_json.clone())?;

        Ok(format_results(&results))
    }
}

/// Format search results as a markdown-ish text blob for prompt injection
fn format_results(results: &[BraveWebResult]) -> String {
    results
        .iter()
        .map(|r| format!("- {} ({})\n  {}", r.title, r.url, r.description))
        .collect::<Vec<_>>()
        .join("\n")
}
