//! The three-step advisory pipeline.
//!
//! Steps run strictly in sequence: each later step's prompt embeds the raw
//! output of the steps it depends on, so there is no parallelism to exploit.
//! A failure at any step (model call, search call, empty completion) aborts
//! the whole request; no partial results are kept.

use std::sync::Arc;

use crate::error::PipelineError;
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};
use crate::search::{SearchProvider, format_research_context};

use super::profile::UserProfile;
use super::prompts::{StepSpec, build_steps};

/// Fixed filename the final plan is offered under.
pub const PLAN_FILENAME: &str = "my_nutrition_plan.md";

/// Completion budget per step. The final plan is long-form markdown.
const STEP_MAX_TOKENS: u64 = 4096;

const STEP_TEMPERATURE: f64 = 0.7;

/// The final plan text. Opaque markdown, rendered and downloaded verbatim.
#[derive(Debug, Clone)]
pub struct PlanResult {
    pub markdown: String,
}

/// Runs the fixed demographic → medical → plan sequence.
pub struct NutritionPipeline {
    llm: Arc<dyn LlmProvider>,
    search: Option<Arc<dyn SearchProvider>>,
}

impl NutritionPipeline {
    pub fn new(llm: Arc<dyn LlmProvider>, search: Option<Arc<dyn SearchProvider>>) -> Self {
        Self { llm, search }
    }

    /// Generate a nutrition plan for a fully-populated profile.
    pub async fn generate_plan(&self, profile: &UserProfile) -> Result<PlanResult, PipelineError> {
        let steps = build_steps(profile);
        let mut outputs: Vec<String> = Vec::with_capacity(steps.len());

        for (index, step) in steps.iter().enumerate() {
            let research = self.fetch_research(step).await?;
            let prompt = compose_step_prompt(step, &outputs, research.as_deref());

            tracing::info!(step = step.name, index, "Running pipeline step");
            let request = CompletionRequest {
                messages: vec![
                    ChatMessage::system(step.preamble.clone()),
                    ChatMessage::user(prompt),
                ],
                max_tokens: Some(STEP_MAX_TOKENS),
                temperature: Some(STEP_TEMPERATURE),
            };
            let response = self.llm.complete(request).await?;

            let output = response.content.trim().to_string();
            if output.is_empty() {
                return Err(PipelineError::EmptyCompletion {
                    step: step.name.to_string(),
                });
            }
            tracing::debug!(step = step.name, chars = output.len(), "Step completed");
            outputs.push(output);
        }

        let markdown = outputs.pop().ok_or_else(|| PipelineError::EmptyCompletion {
            step: "diet_plan".to_string(),
        })?;
        Ok(PlanResult { markdown })
    }

    /// Run the step's search query, if the step has one and a search provider
    /// is configured. Without a provider the step simply runs unaided.
    async fn fetch_research(&self, step: &StepSpec) -> Result<Option<String>, PipelineError> {
        let (Some(search), Some(query)) = (&self.search, &step.search_query) else {
            return Ok(None);
        };
        let results = search.search(query).await?;
        Ok(format_research_context(&results))
    }
}

/// Assemble the user-turn prompt for a step: task text, then research, then
/// the raw outputs of its context steps, then the expected-output hint.
fn compose_step_prompt(step: &StepSpec, outputs: &[String], research: Option<&str>) -> String {
    let mut prompt = step.description.clone();

    if let Some(research) = research {
        prompt.push_str("\n\n");
        prompt.push_str(research);
    }

    for &index in step.context {
        if let Some(output) = outputs.get(index) {
            prompt.push_str("\n\nContext from a previous specialist:\n");
            prompt.push_str(output);
        }
    }

    prompt.push_str("\n\nExpected output: ");
    prompt.push_str(step.expected_output);
    prompt
}
