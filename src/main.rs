use std::sync::Arc;

use moodlog_api::{
    build_app, config::Config, services::llm::ClaudeClient, store::MemoryStore, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodlog_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    if config.anthropic_api_key.is_empty() {
        tracing::warn!("ANTHROPIC_API_KEY not set; AI endpoints will serve fallbacks");
    }

    let generator = Arc::new(ClaudeClient::new(&config)?);
    let addr = config.listen_addr();

    // Entries live only as long as the process
    let state = AppState::new(config, Arc::new(MemoryStore::new()), generator);
    let app = build_app(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
