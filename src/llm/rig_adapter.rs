//! Bridge from rig-core's `CompletionModel` to our `LlmProvider` trait.

use async_trait::async_trait;

use rig::completion::CompletionModel;
use rig::message::AssistantContent;

use crate::error::LlmError;
use crate::llm::{CompletionRequest, CompletionResponse, LlmProvider, Role};

/// Wraps any rig completion model behind `LlmProvider`.
pub struct RigAdapter<M> {
    model: M,
    model_name: String,
}

impl<M> RigAdapter<M> {
    pub fn new(model: M, model_name: &str) -> Self {
        Self {
            model,
            model_name: model_name.to_string(),
        }
    }
}

#[async_trait]
impl<M> LlmProvider for RigAdapter<M>
where
    M: CompletionModel,
{
    fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Execute a single-turn completion.
    ///
    /// System messages are folded into rig's preamble; everything else is
    /// joined into the prompt. The advisory pipeline only ever issues
    /// one system + one user message per call.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let mut preamble_parts = Vec::new();
        let mut prompt_parts = Vec::new();
        for message in &request.messages {
            match message.role {
                Role::System => preamble_parts.push(message.content.as_str()),
                Role::User | Role::Assistant => prompt_parts.push(message.content.as_str()),
            }
        }

        let mut builder = self.model.completion_request(prompt_parts.join("\n\n"));
        if !preamble_parts.is_empty() {
            builder = builder.preamble(preamble_parts.join("\n\n"));
        }
        if let Some(max_tokens) = request.max_tokens {
            builder = builder.max_tokens(max_tokens);
        }
        if let Some(temperature) = request.temperature {
            builder = builder.temperature(temperature);
        }

        let response = builder.send().await.map_err(|e| LlmError::RequestFailed {
            provider: self.model_name.clone(),
            reason: e.to_string(),
        })?;

        let content: String = response
            .choice
            .iter()
            .filter_map(|part| match part {
                AssistantContent::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("");

        if content.is_empty() {
            return Err(LlmError::InvalidResponse {
                provider: self.model_name.clone(),
                reason: "completion contained no text".to_string(),
            });
        }

        Ok(CompletionResponse { content })
    }
}
