#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use moodlog_api::config::Config;
use moodlog_api::models::mood_entry::{InsertMoodEntry, MoodEntry};
use moodlog_api::services::llm::{ChatMessage, InsightError, TextGenerator};
use moodlog_api::store::{MemoryStore, MoodStore};
use moodlog_api::{build_app, AppState};
use serde_json::Value;

/// Model double: answers every prompt with the same reply and counts calls.
pub struct ScriptedModel {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: Err("upstream unavailable".to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedModel {
    async fn generate(
        &self,
        _messages: &[ChatMessage],
        _max_tokens: u32,
    ) -> Result<String, InsightError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().map_err(InsightError::RemoteCall)
    }
}

/// Store double whose backend is always down.
pub struct FailingStore;

#[async_trait]
impl MoodStore for FailingStore {
    async fn list(&self) -> anyhow::Result<Vec<MoodEntry>> {
        anyhow::bail!("connection pool exhausted")
    }

    async fn create(&self, _input: InsertMoodEntry) -> anyhow::Result<MoodEntry> {
        anyhow::bail!("connection pool exhausted")
    }
}

pub struct TestApp {
    pub router: Router,
    pub model: Arc<ScriptedModel>,
}

impl TestApp {
    /// App whose model is unreachable, so every AI call falls back.
    pub fn new() -> Self {
        Self::with_model(ScriptedModel::failing())
    }

    pub fn with_model(model: Arc<ScriptedModel>) -> Self {
        Self::with_parts(Arc::new(MemoryStore::new()), model)
    }

    /// App whose store fails every call.
    pub fn with_broken_store() -> Self {
        Self::with_parts(Arc::new(FailingStore), ScriptedModel::failing())
    }

    fn with_parts(store: Arc<dyn MoodStore>, model: Arc<ScriptedModel>) -> Self {
        let state = AppState::new(Config::default(), store, model.clone());
        Self {
            router: build_app(state),
            model,
        }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.request(req).await
    }

    /// POST JSON as a cross-origin browser request from `origin`.
    pub async fn post_json_from(&self, origin: &str, uri: &str, body: Value) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("origin", origin)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> Response {
        self.post_raw(uri, &body.to_string()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> Response {
        let req = Request::builder()
            .uri(uri)
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(req).await
    }

    /// Create an entry and return its JSON, asserting a 201.
    pub async fn create_entry(&self, body: Value) -> Value {
        let resp = self.post_json("/api/mood-entries", body).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await
    }
}

/// Read the full response body as JSON.
pub async fn body_json(resp: Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Value of the `x-insight-source` header.
pub fn insight_source(resp: &Response) -> String {
    resp.headers()
        .get("x-insight-source")
        .expect("AI responses carry an insight source")
        .to_str()
        .unwrap()
        .to_string()
}
