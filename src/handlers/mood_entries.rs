use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;

use crate::dto::CreateMoodEntryRequest;
use crate::error::{AppError, AppResult};
use crate::models::mood::{CanonicalMood, CANONICAL_MOODS};
use crate::models::mood_entry::{MoodEntry, MoodStats};
use crate::AppState;

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<MoodEntry>>> {
    let entries = state.store.list().await?;
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateMoodEntryRequest>, AppError>,
) -> AppResult<(StatusCode, Json<MoodEntry>)> {
    let input = body.into_insert()?;
    let entry = state.store.create(input).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<MoodStats>> {
    let entries = state.store.list().await?;
    Ok(Json(MoodStats::from_entries(&entries, Utc::now())))
}

pub async fn list_moods() -> Json<&'static [CanonicalMood]> {
    Json(&CANONICAL_MOODS[..])
}
