//! Serper.dev search client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use super::{SearchProvider, SearchResult};
use crate::error::SearchError;

const SERPER_ENDPOINT: &str = "https://google.serper.dev/search";

/// How many organic results to request per query.
const RESULT_COUNT: u8 = 5;

/// Client for the Serper.dev Google search API.
pub struct SerperClient {
    http: reqwest::Client,
    api_key: SecretString,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SearchResult>,
}

impl SerperClient {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .http
            .post(SERPER_ENDPOINT)
            .header("X-API-KEY", self.api_key.expose_secret())
            .json(&json!({ "q": query, "num": RESULT_COUNT }))
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: SerperResponse = response
            .json()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))?;

        tracing::debug!(query = query, results = body.organic.len(), "Serper search completed");
        Ok(body.organic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serper_response_parses_organic_results() {
        let raw = r#"{
            "searchParameters": {"q": "nutrition"},
            "organic": [
                {"title": "Dietary Guidelines", "link": "https://example.gov/dga", "snippet": "Eat a variety of foods", "position": 1},
                {"title": "Macronutrients", "link": "https://example.org/macros"}
            ]
        }"#;
        let parsed: SerperResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.organic.len(), 2);
        assert_eq!(parsed.organic[0].title, "Dietary Guidelines");
        // Snippet is optional in the API response.
        assert!(parsed.organic[1].snippet.is_empty());
    }

    #[test]
    fn serper_response_tolerates_missing_organic() {
        let parsed: SerperResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.organic.is_empty());
    }
}
