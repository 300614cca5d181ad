use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use validator::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationErrors),

    #[error("Malformed request body: {0}")]
    BadRequest(#[from] JsonRejection),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::Validation(msg) => json!({ "message": msg }),
            AppError::InvalidInput(errors) => {
                let details = field_messages(errors);
                let message = details
                    .values()
                    .flatten()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join("; ");
                json!({ "message": message, "details": details })
            }
            AppError::BadRequest(rejection) => json!({ "message": rejection.body_text() }),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                json!({ "message": "Internal server error" })
            }
        };

        let status = match &self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(body)).into_response()
    }
}

/// Field name → human-readable messages, ordered by field name.
fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{field} is invalid ({})", e.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

pub type AppResult<T> = Result<T, AppError>;
