//! End-to-end tests for the intake form API, with the upstream model and
//! search providers replaced by local fakes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use nourish_ai::advisor::NutritionPipeline;
use nourish_ai::error::LlmError;
use nourish_ai::llm::{CompletionRequest, CompletionResponse, LlmProvider, Role};
use nourish_ai::web::routes;

/// Fake model: records each user prompt and answers with a canned plan,
/// or fails every call when `fail` is set.
struct FakeLlm {
    prompts: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeLlm {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            fail,
        })
    }

    fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for FakeLlm {
    fn model_name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let user_prompt = request
            .messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();
        let step = self.prompts.lock().unwrap().len();
        self.prompts.lock().unwrap().push(user_prompt);

        if self.fail {
            return Err(LlmError::RequestFailed {
                provider: "fake".to_string(),
                reason: "simulated outage".to_string(),
            });
        }
        Ok(CompletionResponse {
            content: format!("# Output of step {step}\n\nSome advice."),
        })
    }
}

fn app(llm: Arc<FakeLlm>, missing_keys: Vec<String>) -> axum::Router {
    let pipeline = Arc::new(NutritionPipeline::new(llm, None));
    routes(pipeline, missing_keys)
}

async fn post_plan(app: axum::Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::post("/api/plan")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn serves_the_intake_form() {
    let response = app(FakeLlm::new(false), Vec::new())
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("NourishAI"));
    assert!(html.contains("Generate Nutrition Plan"));
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let response = app(FakeLlm::new(false), Vec::new())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn config_status_lists_missing_keys() {
    let response = app(
        FakeLlm::new(false),
        vec!["OPENAI_API_KEY".to_string(), "SERPER_API_KEY".to_string()],
    )
    .oneshot(
        Request::get("/api/config/status")
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body["missing_keys"],
        serde_json::json!(["OPENAI_API_KEY", "SERPER_API_KEY"])
    );
}

#[tokio::test]
async fn rejects_submission_without_goals() {
    let llm = FakeLlm::new(false);
    let (status, body) = post_plan(app(llm.clone(), Vec::new()), r#"{"goals": []}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Please select at least one nutrition goal.");
    // The pipeline was never invoked.
    assert_eq!(llm.call_count(), 0);
}

#[tokio::test]
async fn generates_a_plan_for_a_valid_submission() {
    let llm = FakeLlm::new(false);
    let (status, body) = post_plan(
        app(llm.clone(), Vec::new()),
        r#"{
            "age": 27,
            "gender": "Female",
            "goals": ["Muscle Building", "General Health"],
            "allergies": "Gluten"
        }"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["filename"], "my_nutrition_plan.md");
    let plan = body["plan"].as_str().unwrap();
    assert!(!plan.trim().is_empty());

    // Exactly one pipeline run: three sequential steps.
    assert_eq!(llm.call_count(), 3);

    // All thirteen fields populated, defaults substituted for blanks.
    let profile = &body["profile"];
    assert_eq!(profile["age"], 27);
    assert_eq!(profile["gender"], "Female");
    assert_eq!(profile["height"], "5'10\"");
    assert_eq!(profile["goals"], "Muscle Building, General Health");
    assert_eq!(profile["allergies"], "Gluten");
    assert_eq!(profile["medical_conditions"], "None reported");
    assert_eq!(profile["food_preferences"], "No specific preferences");
    assert_eq!(profile["cultural_factors"], "No specific factors");
}

#[tokio::test]
async fn later_step_prompts_contain_earlier_outputs() {
    let llm = FakeLlm::new(false);
    post_plan(
        app(llm.clone(), Vec::new()),
        r#"{"goals": ["Weight Loss"]}"#,
    )
    .await;

    let prompts = llm.prompts.lock().unwrap().clone();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[1].contains("# Output of step 0"));
    assert!(prompts[2].contains("# Output of step 0"));
    assert!(prompts[2].contains("# Output of step 1"));
}

#[tokio::test]
async fn upstream_failure_yields_a_single_generic_error() {
    let llm = FakeLlm::new(true);
    let (status, body) = post_plan(
        app(llm.clone(), Vec::new()),
        r#"{"goals": ["Better Energy"]}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("error occurred"));
    // No partial plan text and no upstream detail leaks to the user.
    assert!(body.get("plan").is_none());
    assert!(!message.contains("simulated outage"));
    // The pipeline stopped at the first failing step.
    assert_eq!(llm.call_count(), 1);
}
