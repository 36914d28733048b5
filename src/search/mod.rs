//! Web search integration.
//!
//! The research steps of the advisory pipeline ground their prompts in
//! current web results. The `SearchProvider` trait keeps the pipeline
//! testable; `SerperClient` is the production implementation.

mod serper;

pub use serper::SerperClient;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::SearchError;

/// One organic web search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// Abstraction over a hosted web search API.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a search query, returning organic results in rank order.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError>;
}

/// Render search results as a markdown block for prompt injection.
///
/// Returns `None` when there are no results, so callers can omit the
/// research section entirely rather than embed an empty header.
pub fn format_research_context(results: &[SearchResult]) -> Option<String> {
    if results.is_empty() {
        return None;
    }
    let mut block = String::from("Relevant web research:\n");
    for result in results {
        block.push_str(&format!(
            "- {} ({})\n  {}\n",
            result.title, result.link, result.snippet
        ));
    }
    Some(block)
}
