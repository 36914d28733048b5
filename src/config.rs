//! Service configuration, read from the environment.

use secrecy::SecretString;

use crate::llm::LlmBackend;

/// Default model, matching the hosted advisor deployment.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default HTTP port for the intake form server.
pub const DEFAULT_PORT: u16 = 8080;

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which LLM backend to use.
    pub backend: LlmBackend,
    /// Model identifier passed to the backend.
    pub model: String,
    /// API key for the model provider (OPENAI_API_KEY or ANTHROPIC_API_KEY).
    pub model_api_key: Option<SecretString>,
    /// API key for the Serper web search API (SERPER_API_KEY).
    pub search_api_key: Option<SecretString>,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// Missing API keys are allowed: submission is never blocked on
    /// credentials, the affected upstream call simply fails at request time.
    pub fn from_env() -> Self {
        let backend = match std::env::var("NOURISH_LLM_BACKEND").as_deref() {
            Ok("anthropic") => LlmBackend::Anthropic,
            _ => LlmBackend::OpenAi,
        };

        let key_var = match backend {
            LlmBackend::OpenAi => "OPENAI_API_KEY",
            LlmBackend::Anthropic => "ANTHROPIC_API_KEY",
        };

        let model = std::env::var("NOURISH_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let port = std::env::var("NOURISH_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            backend,
            model,
            model_api_key: std::env::var(key_var).ok().map(SecretString::from),
            search_api_key: std::env::var("SERPER_API_KEY").ok().map(SecretString::from),
            port,
        }
    }

    /// Names of the required credentials that are not set.
    ///
    /// Their absence produces a warning banner on the form but does not block
    /// submission.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.model_api_key.is_none() {
            missing.push(match self.backend {
                LlmBackend::OpenAi => "OPENAI_API_KEY",
                LlmBackend::Anthropic => "ANTHROPIC_API_KEY",
            });
        }
        if self.search_api_key.is_none() {
            missing.push("SERPER_API_KEY");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_reports_both_when_unset() {
        let config = Config {
            backend: LlmBackend::OpenAi,
            model: DEFAULT_MODEL.to_string(),
            model_api_key: None,
            search_api_key: None,
            port: DEFAULT_PORT,
        };
        assert_eq!(config.missing_keys(), vec!["OPENAI_API_KEY", "SERPER_API_KEY"]);
    }

    #[test]
    fn missing_keys_empty_when_both_set() {
        let config = Config {
            backend: LlmBackend::OpenAi,
            model: DEFAULT_MODEL.to_string(),
            model_api_key: Some(SecretString::from("sk-test")),
            search_api_key: Some(SecretString::from("serper-test")),
            port: DEFAULT_PORT,
        };
        assert!(config.missing_keys().is_empty());
    }

    #[test]
    fn missing_keys_names_anthropic_var_for_anthropic_backend() {
        let config = Config {
            backend: LlmBackend::Anthropic,
            model: "claude-sonnet-4-20250514".to_string(),
            model_api_key: None,
            search_api_key: Some(SecretString::from("serper-test")),
            port: DEFAULT_PORT,
        };
        assert_eq!(config.missing_keys(), vec!["ANTHROPIC_API_KEY"]);
    }
}
