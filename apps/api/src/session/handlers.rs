use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use tracing::info;

use crate::errors::{AppError, RECOGNITION_FAILURE_MESSAGE};
use crate::intake::{coerce, ManualEntryForm};
use crate::models::measurement::MeasurementRecord;
use crate::pricing::view::{render_quote, QuoteView};
use crate::session::SessionPhase;
use crate::state::AppState;

/// Session state as reported to the presentation layer.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub state: SessionPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<MeasurementRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST /api/v1/quote/manual
///
/// Coercion never fails, so a manual submission always yields a quote —
/// unless a sketch is currently being processed.
pub async fn handle_manual(
    State(state): State<AppState>,
    Json(form): Json<ManualEntryForm>,
) -> Result<Json<QuoteView>, AppError> {
    let record = coerce(&form);
    let quote = state.session.lock().await.submit_record(record)?;
    Ok(Json(render_quote(&quote)))
}

/// POST /api/v1/quote/sketch
///
/// Accepts a multipart image upload, hands it to the recognition service,
/// and prices the recognized measurements.
pub async fn handle_sketch(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<QuoteView>, AppError> {
    let field = multipart
        .next_field()
        .await?
        .ok_or_else(|| AppError::Validation("upload contained no file".to_string()))?;

    let content_type = field.content_type().unwrap_or("").to_string();
    if !content_type.starts_with("image/") {
        return Err(AppError::UnsupportedUpload(if content_type.is_empty() {
            "unknown".to_string()
        } else {
            content_type
        }));
    }
    let data = field.bytes().await?;

    let token = state.session.lock().await.begin_recognition()?;
    info!(
        "recognition request {token:?} started ({} bytes, {content_type})",
        data.len()
    );

    // The session lock is NOT held across the recognition call; the token
    // decides whether the outcome still applies when it lands.
    let payload = encode_sketch(&content_type, &data);
    let outcome = state.recognizer.recognize(&payload).await;

    let mut session = state.session.lock().await;
    match outcome {
        Ok(record) => {
            let quote = session
                .complete_recognition(token, record)
                .ok_or(AppError::RecognitionSuperseded)?;
            Ok(Json(render_quote(&quote)))
        }
        Err(err) => {
            session.fail_recognition(token, RECOGNITION_FAILURE_MESSAGE);
            Err(AppError::Recognition(err))
        }
    }
}

/// GET /api/v1/quote
pub async fn handle_get_quote(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot {
        state: session.phase(),
        measurements: session.record().copied(),
        quote: session.quote().map(render_quote),
        error: session.last_error().map(str::to_owned),
    })
}

/// POST /api/v1/quote/reset
pub async fn handle_reset(State(state): State<AppState>) -> StatusCode {
    state.session.lock().await.reset();
    StatusCode::NO_CONTENT
}

/// Encodes an uploaded sketch as the data-URL string the recognition
/// service expects in its `image` field.
fn encode_sketch(content_type: &str, data: &[u8]) -> String {
    format!("data:{content_type};base64,{}", STANDARD.encode(data))
}
