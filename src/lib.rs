pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use services::insights::InsightService;
use services::llm::TextGenerator;
use store::MoodStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MoodStore>,
    pub insights: Arc<InsightService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<dyn MoodStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let insights = InsightService::new(generator, config.ai_timeout());
        Self {
            store,
            insights: Arc::new(insights),
            config: Arc::new(config),
        }
    }
}

/// Build the full Axum application router.
pub fn build_app(state: AppState) -> Router {
    let allowed_origins: Vec<HeaderValue> = state
        .config
        .allowed_origins()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([HeaderName::from_static(
            handlers::ai::INSIGHT_SOURCE_HEADER,
        )]);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/moods", get(handlers::mood_entries::list_moods))
        // Journal
        .route(
            "/api/mood-entries",
            get(handlers::mood_entries::list_entries).post(handlers::mood_entries::create_entry),
        )
        .route("/api/mood-entries/stats", get(handlers::mood_entries::get_stats))
        // AI
        .route("/api/ai/analyze-mood", post(handlers::ai::analyze_mood))
        .route("/api/ai/insights", get(handlers::ai::get_insights))
        .route("/api/ai/recommendations", post(handlers::ai::get_recommendations))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
