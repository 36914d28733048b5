//! HTTP surface: the intake form page and the plan API.

mod page;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use uuid::Uuid;

use crate::advisor::{IntakeForm, NutritionPipeline, PLAN_FILENAME};

/// Shown to the user whenever any upstream call fails. The real cause is
/// logged server-side only.
const GENERIC_ERROR: &str =
    "An error occurred while generating your nutrition plan. Please try again.";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<NutritionPipeline>,
    /// Credential names that were not configured at startup.
    pub missing_keys: Vec<String>,
}

/// Build the Axum router for the intake form and plan API.
pub fn routes(pipeline: Arc<NutritionPipeline>, missing_keys: Vec<String>) -> Router {
    let state = AppState {
        pipeline,
        missing_keys,
    };

    Router::new()
        .route("/", get(form_page))
        .route("/health", get(health))
        .route("/api/config/status", get(config_status))
        .route("/api/plan", post(generate_plan))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn form_page() -> impl IntoResponse {
    Html(page::FORM_PAGE)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "nourish-ai"
    }))
}

/// Reports which credentials are missing so the form can show a warning.
/// Missing keys never block submission.
async fn config_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({ "missing_keys": state.missing_keys }))
}

async fn generate_plan(
    State(state): State<AppState>,
    Json(form): Json<IntakeForm>,
) -> impl IntoResponse {
    if let Err(e) = form.validate() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({ "error": e.to_string() })),
        );
    }

    let request_id = Uuid::new_v4();
    let profile = form.into_profile();
    info!(request_id = %request_id, goals = %profile.goals, "Generating nutrition plan");

    match state.pipeline.generate_plan(&profile).await {
        Ok(plan) => {
            info!(request_id = %request_id, chars = plan.markdown.len(), "Plan generated");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "plan": plan.markdown,
                    "filename": PLAN_FILENAME,
                    "profile": profile,
                })),
            )
        }
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Plan generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": GENERIC_ERROR })),
            )
        }
    }
}
