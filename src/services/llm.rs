//! Text generation over the Anthropic Messages API.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("remote call failed: {0}")]
    RemoteCall(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for InsightError {
    fn from(e: reqwest::Error) -> Self {
        InsightError::RemoteCall(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A remote model that turns role-tagged messages into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, InsightError>;
}

pub struct ClaudeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

impl ClaudeClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.ai_timeout())
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            http,
            api_key: config.anthropic_api_key.clone(),
            base_url: config.anthropic_base_url.trim_end_matches('/').to_string(),
            model: config.claude_model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for ClaudeClient {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, InsightError> {
        if self.api_key.is_empty() {
            return Err(InsightError::RemoteCall("ANTHROPIC_API_KEY is not set".into()));
        }

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&MessagesRequest {
                model: &self.model,
                max_tokens,
                messages,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::RemoteCall(format!(
                "Claude API error {status}: {body}"
            )));
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|e| InsightError::MalformedResponse(e.to_string()))?;

        let text: String = body
            .content
            .into_iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text),
                ContentBlock::Other => None,
            })
            .collect();

        if text.is_empty() {
            return Err(InsightError::MalformedResponse(
                "no text content in reply".into(),
            ));
        }
        Ok(text)
    }
}
