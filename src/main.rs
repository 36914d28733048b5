use std::sync::Arc;

use nourish_ai::advisor::NutritionPipeline;
use nourish_ai::config::Config;
use nourish_ai::llm::{LlmConfig, create_provider};
use nourish_ai::search::{SearchProvider, SerperClient};
use nourish_ai::web::routes;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();

    let missing_keys: Vec<String> = config
        .missing_keys()
        .into_iter()
        .map(str::to_string)
        .collect();
    for key in &missing_keys {
        // Warn but never block: the affected upstream call fails at request time.
        tracing::warn!(key = %key, "API key not set");
    }

    eprintln!("🥗 NourishAI v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Model: {}", config.model);
    eprintln!("   Form: http://0.0.0.0:{}/", config.port);
    eprintln!("   Plan API: http://0.0.0.0:{}/api/plan", config.port);

    // Create LLM provider. rig clients accept any key string at construction;
    // a missing key surfaces as an auth failure on the first completion.
    let llm_config = LlmConfig {
        backend: config.backend,
        api_key: config
            .model_api_key
            .clone()
            .unwrap_or_else(|| secrecy::SecretString::from("")),
        model: config.model.clone(),
    };
    let llm = create_provider(&llm_config)?;

    // Web search is optional: without a key the research steps run unaided.
    let search: Option<Arc<dyn SearchProvider>> = match config.search_api_key.clone() {
        Some(key) => Some(Arc::new(SerperClient::new(key))),
        None => {
            eprintln!("   Search: disabled (SERPER_API_KEY not set)");
            None
        }
    };

    let pipeline = Arc::new(NutritionPipeline::new(llm, search));
    let app = routes(pipeline, missing_keys);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "Intake form server started");
    axum::serve(listener, app).await?;

    Ok(())
}
