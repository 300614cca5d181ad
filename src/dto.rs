//! # Moodlog — Request/Response DTOs
//!
//! API contract types that are not domain models.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Response` → serialized to client JSON
//! - Field-level rules are expressed via `validator` derive macros; required
//!   text inputs of the AI endpoints are checked by `require_*` helpers so the
//!   message stays the same for missing and blank values
//! - JSON keys are camelCase

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::mood_entry::InsertMoodEntry;

// ============================================================================
// Mood entries
// ============================================================================

/// POST /api/mood-entries
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMoodEntryRequest {
    /// Optional display label
    #[validate(length(max = 100, message = "Name must be under 100 characters"))]
    pub name: Option<String>,

    #[validate(
        required(message = "Mood is required"),
        length(min = 1, max = 50, message = "Mood must be 1-50 characters")
    )]
    pub mood: Option<String>,

    #[validate(
        required(message = "Emoji is required"),
        length(min = 1, max = 16, message = "Emoji must be 1-16 characters")
    )]
    pub emoji: Option<String>,

    /// Free-text note
    #[validate(length(max = 5000, message = "Note must be under 5000 characters"))]
    pub note: Option<String>,
}

impl CreateMoodEntryRequest {
    pub fn into_insert(self) -> Result<InsertMoodEntry, ValidationErrors> {
        self.validate()?;

        match (self.mood, self.emoji) {
            (Some(mood), Some(emoji)) => Ok(InsertMoodEntry {
                name: self.name,
                mood,
                emoji,
                note: self.note,
            }),
            (mood, emoji) => {
                let mut errors = ValidationErrors::new();
                if mood.is_none() {
                    errors.add("mood", required("Mood is required"));
                }
                if emoji.is_none() {
                    errors.add("emoji", required("Emoji is required"));
                }
                Err(errors)
            }
        }
    }
}

fn required(message: &'static str) -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some(message.into());
    error
}

// ============================================================================
// AI
// ============================================================================

/// POST /api/ai/analyze-mood
#[derive(Debug, Deserialize)]
pub struct AnalyzeMoodRequest {
    pub note: Option<String>,
}

impl AnalyzeMoodRequest {
    pub fn require_note(&self) -> Result<&str, String> {
        non_blank(self.note.as_deref()).ok_or_else(|| "Note text is required".into())
    }
}

/// POST /api/ai/recommendations
#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    pub mood: Option<String>,
    pub note: Option<String>,
}

impl RecommendationsRequest {
    pub fn require_mood(&self) -> Result<&str, String> {
        non_blank(self.mood.as_deref()).ok_or_else(|| "Mood is required".into())
    }
}

/// GET /api/ai/insights
#[derive(Debug, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: String,
}

/// POST /api/ai/recommendations
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<String>,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
