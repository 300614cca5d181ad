use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::dto::{
    AnalyzeMoodRequest, InsightsResponse, RecommendationsRequest, RecommendationsResponse,
};
use crate::error::{AppError, AppResult};
use crate::services::insights::Insight;
use crate::AppState;

/// Tells the client whether an AI answer is real or a fallback.
pub const INSIGHT_SOURCE_HEADER: &str = "x-insight-source";

fn respond<T, B: Serialize>(insight: Insight<T>, body: impl FnOnce(T) -> B) -> Response {
    (
        [(INSIGHT_SOURCE_HEADER, insight.source.as_str())],
        Json(body(insight.value)),
    )
        .into_response()
}

pub async fn analyze_mood(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<AnalyzeMoodRequest>, AppError>,
) -> AppResult<Response> {
    let note = body.require_note().map_err(AppError::Validation)?;

    let suggestion = state.insights.classify_mood(note).await;
    Ok(respond(suggestion, |s| s))
}

pub async fn get_insights(State(state): State<AppState>) -> AppResult<Response> {
    let entries = state.store.list().await?;

    let summary = state.insights.summarize(&entries).await;
    Ok(respond(summary, |insights| InsightsResponse { insights }))
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RecommendationsRequest>, AppError>,
) -> AppResult<Response> {
    let mood = body.require_mood().map_err(AppError::Validation)?;

    let list = state.insights.recommend(mood, body.note.as_deref()).await;
    Ok(respond(list, |recommendations| RecommendationsResponse { recommendations }))
}
