//! The advisory pipeline: profile in, plan text out.

pub mod pipeline;
pub mod profile;
pub mod prompts;

pub use pipeline::{NutritionPipeline, PLAN_FILENAME, PlanResult};
pub use profile::{IntakeForm, UserProfile};
