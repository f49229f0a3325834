use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::recognition::RecognitionError;

/// User-facing message attached when sketch recognition fails, inviting
/// the manual-entry fallback.
pub const RECOGNITION_FAILURE_MESSAGE: &str =
    "Could not process the sketch. Try entering the measurements manually.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported upload type: {0}")]
    UnsupportedUpload(String),

    #[error("Invalid upload: {0}")]
    Upload(#[from] axum::extract::multipart::MultipartError),

    #[error("A sketch is already being processed")]
    RecognitionInFlight,

    #[error("The session changed while the sketch was processing")]
    RecognitionSuperseded,

    #[error("Recognition error: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedUpload(kind) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNSUPPORTED_UPLOAD",
                format!("Only image uploads are accepted (got '{kind}')"),
            ),
            AppError::Upload(e) => (StatusCode::BAD_REQUEST, "UPLOAD_ERROR", e.to_string()),
            AppError::RecognitionInFlight => (
                StatusCode::CONFLICT,
                "RECOGNITION_IN_FLIGHT",
                "A sketch is already being processed".to_string(),
            ),
            AppError::RecognitionSuperseded => (
                StatusCode::CONFLICT,
                "RECOGNITION_SUPERSEDED",
                "The session was reset while the sketch was processing".to_string(),
            ),
            AppError::Recognition(e) => {
                tracing::error!("Recognition error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "RECOGNITION_FAILED",
                    RECOGNITION_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
