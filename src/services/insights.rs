//! Mood insights backed by a remote model.
//!
//! Every operation has a fixed fallback. Remote errors, timeouts and replies
//! that fail validation are logged and replaced by that fallback, so callers
//! always get a usable value along with its [`InsightSource`].

use std::{sync::Arc, time::Duration};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;

use super::llm::{ChatMessage, InsightError, TextGenerator};
use crate::models::mood::{canonical_names, find_canonical};
use crate::models::mood_entry::MoodEntry;

pub const EMPTY_JOURNAL_INSIGHT: &str = "Start tracking your moods to get personalized insights!";
pub const FALLBACK_INSIGHT: &str =
    "Keep tracking your moods! Every entry helps you understand your emotional patterns better.";
pub const FALLBACK_RECOMMENDATIONS: [&str; 3] = [
    "Take a moment to breathe",
    "Practice gratitude",
    "Connect with someone you care about",
];

/// Entries included in a summary prompt.
pub const SUMMARY_WINDOW: usize = 10;
pub const RECOMMENDATION_COUNT: usize = 3;

const CLASSIFY_MAX_TOKENS: u32 = 150;
const SUMMARY_MAX_TOKENS: u32 = 300;
const RECOMMEND_MAX_TOKENS: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightSource {
    /// Parsed from a model reply.
    Model,
    /// The remote call or its reply was unusable.
    Fallback,
    /// Fixed answer that needs no model call.
    Canned,
}

impl InsightSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightSource::Model => "model",
            InsightSource::Fallback => "fallback",
            InsightSource::Canned => "canned",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight<T> {
    pub value: T,
    pub source: InsightSource,
}

impl<T> Insight<T> {
    fn model(value: T) -> Self {
        Self {
            value,
            source: InsightSource::Model,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            source: InsightSource::Fallback,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodSuggestion {
    pub suggested_mood: String,
    pub confidence: f64,
    pub emoji: String,
}

impl MoodSuggestion {
    pub fn fallback() -> Self {
        Self {
            suggested_mood: "Calm".into(),
            confidence: 0.5,
            emoji: "😌".into(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSuggestion {
    suggested_mood: String,
    confidence: f64,
    emoji: Option<String>,
}

pub struct InsightService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl InsightService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub async fn classify_mood(&self, note: &str) -> Insight<MoodSuggestion> {
        let result = self
            .ask(classify_prompt(note), CLASSIFY_MAX_TOKENS)
            .await
            .and_then(|reply| parse_suggestion(&reply));

        match result {
            Ok(suggestion) => Insight::model(suggestion),
            Err(e) => {
                tracing::warn!(error = %e, "Mood analysis failed, using fallback");
                Insight::fallback(MoodSuggestion::fallback())
            }
        }
    }

    /// `entries` must be newest first; only the most recent few are sent.
    pub async fn summarize(&self, entries: &[MoodEntry]) -> Insight<String> {
        if entries.is_empty() {
            return Insight {
                value: EMPTY_JOURNAL_INSIGHT.into(),
                source: InsightSource::Canned,
            };
        }

        let result = self
            .ask(summary_prompt(entries), SUMMARY_MAX_TOKENS)
            .await
            .and_then(|reply| {
                if reply.trim().is_empty() {
                    Err(InsightError::MalformedResponse("empty summary".into()))
                } else {
                    Ok(reply)
                }
            });

        match result {
            Ok(text) => Insight::model(text),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    entries = entries.len(),
                    "Insight generation failed, using fallback"
                );
                Insight::fallback(FALLBACK_INSIGHT.into())
            }
        }
    }

    pub async fn recommend(&self, mood: &str, note: Option<&str>) -> Insight<Vec<String>> {
        let result = self
            .ask(recommend_prompt(mood, note), RECOMMEND_MAX_TOKENS)
            .await
            .and_then(|reply| parse_recommendations(&reply));

        match result {
            Ok(list) => Insight::model(list),
            Err(e) => {
                tracing::warn!(error = %e, mood, "Recommendations failed, using fallback");
                let fallback: Vec<String> =
                    FALLBACK_RECOMMENDATIONS.iter().map(|s| s.to_string()).collect();
                Insight::fallback(fallback)
            }
        }
    }

    async fn ask(&self, prompt: String, max_tokens: u32) -> Result<String, InsightError> {
        let messages = [ChatMessage::user(prompt)];
        let call = self.generator.generate(&messages, max_tokens);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(reply) => reply,
            Err(_) => Err(InsightError::RemoteCall(format!(
                "timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

fn classify_prompt(note: &str) -> String {
    format!(
        r#"Analyze this mood note and suggest the most appropriate mood: "{note}"

Respond with a JSON object containing:
- suggestedMood: one of [{moods}]
- confidence: number between 0-1
- emoji: appropriate emoji for the mood

Example: {{"suggestedMood": "Happy", "confidence": 0.85, "emoji": "😊"}}"#,
        moods = canonical_names(),
    )
}

fn summary_prompt(entries: &[MoodEntry]) -> String {
    let mood_data: Vec<_> = entries
        .iter()
        .take(SUMMARY_WINDOW)
        .map(|e| {
            json!({
                "mood": e.mood,
                "note": e.note.as_deref().unwrap_or(""),
                "date": e.created_at,
            })
        })
        .collect();

    format!(
        r#"Analyze these recent mood entries and provide helpful insights: {}

Provide a warm, encouraging analysis that includes:
- Overall mood patterns you notice
- Positive trends to celebrate
- Gentle suggestions for emotional wellbeing
- Keep it under 200 words and supportive in tone"#,
        serde_json::Value::Array(mood_data)
    )
}

fn recommend_prompt(mood: &str, note: Option<&str>) -> String {
    let note_clause = match note.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => format!(r#" with the note: "{n}""#),
        None => String::new(),
    };

    format!(
        r#"Given someone is feeling "{mood}"{note_clause}, suggest {RECOMMENDATION_COUNT} brief, actionable wellness activities.

Respond with a JSON array of {RECOMMENDATION_COUNT} short suggestions (max 50 chars each).
Example: ["Take 5 deep breaths", "Go for a short walk", "Listen to uplifting music"]"#
    )
}

/// Parse the outermost `open`..`close` span of `reply`, ignoring code fences
/// or prose the model wraps around it.
fn parse_embedded<T: DeserializeOwned>(
    reply: &str,
    open: char,
    close: char,
) -> Result<T, InsightError> {
    let start = reply.find(open);
    let end = reply.rfind(close);
    let span = match (start, end) {
        (Some(s), Some(e)) if s < e => &reply[s..=e],
        _ => {
            return Err(InsightError::MalformedResponse(format!(
                "no JSON {open}...{close} in reply"
            )))
        }
    };
    serde_json::from_str(span).map_err(|e| InsightError::MalformedResponse(e.to_string()))
}

fn parse_suggestion(reply: &str) -> Result<MoodSuggestion, InsightError> {
    let raw: RawSuggestion = parse_embedded(reply, '{', '}')?;

    let canonical = find_canonical(&raw.suggested_mood).ok_or_else(|| {
        InsightError::MalformedResponse(format!("unknown mood {:?}", raw.suggested_mood))
    })?;

    if !raw.confidence.is_finite() || !(0.0..=1.0).contains(&raw.confidence) {
        return Err(InsightError::MalformedResponse(format!(
            "confidence {} out of range",
            raw.confidence
        )));
    }

    let emoji = raw
        .emoji
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| canonical.emoji.to_string());

    Ok(MoodSuggestion {
        suggested_mood: canonical.name.to_string(),
        confidence: raw.confidence,
        emoji,
    })
}

fn parse_recommendations(reply: &str) -> Result<Vec<String>, InsightError> {
    let raw: Vec<String> = parse_embedded(reply, '[', ']')?;

    let list: Vec<String> = raw
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if list.len() != RECOMMENDATION_COUNT {
        return Err(InsightError::MalformedResponse(format!(
            "expected {RECOMMENDATION_COUNT} recommendations, got {}",
            list.len()
        )));
    }
    Ok(list)
}
