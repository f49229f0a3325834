/// Recognition client — the single point of entry for the external
/// sketch-recognition service.
///
/// ARCHITECTURAL RULE: no other module may call the recognition endpoint
/// directly. All sketch processing MUST go through this module.
///
/// Failures are surfaced immediately and never retried: the user's
/// fallback is manual entry, not a second recognition attempt.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::measurement::MeasurementRecord;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("recognition service returned status {status}: {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct RecognitionRequest<'a> {
    // Wire name is part of the service contract — do not rename.
    image: &'a str,
}

/// Raw measurement payload as the recognition service reports it. Field
/// names are bit-exact per the service contract; values may arrive as
/// floats even for counts.
#[derive(Debug, Deserialize)]
pub struct SketchMeasurements {
    pub perimeter: f64,
    pub area: f64,
    pub corners: f64,
    pub chandeliers: f64,
    pub spotlights: f64,
}

impl SketchMeasurements {
    /// Sanitizes the service payload into a well-formed record: negative
    /// values clamp to zero and counts truncate to whole numbers, so the
    /// engine only ever sees non-negative input.
    pub fn into_record(self) -> MeasurementRecord {
        MeasurementRecord {
            perimeter: self.perimeter.max(0.0),
            area: self.area.max(0.0),
            corners: self.corners.max(0.0) as u32,
            chandeliers: self.chandeliers.max(0.0) as u32,
            spotlights: self.spotlights.max(0.0) as u32,
        }
    }
}

/// The recognition seam. Implement this to swap backends without touching
/// the session handlers.
///
/// Carried in `AppState` as `Arc<dyn Recognizer>`; tests substitute canned
/// backends for the HTTP one.
#[async_trait]
pub trait Recognizer: Send + Sync {
    /// Converts an encoded sketch image into a measurement record.
    async fn recognize(&self, image: &str) -> Result<MeasurementRecord, RecognitionError>;
}

/// Production backend: POSTs the encoded sketch to the configured
/// recognition endpoint as JSON `{"image": "..."}`.
pub struct HttpRecognizer {
    client: Client,
    endpoint: String,
}

impl HttpRecognizer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl Recognizer for HttpRecognizer {
    async fn recognize(&self, image: &str) -> Result<MeasurementRecord, RecognitionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RecognitionRequest { image })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("recognition service returned {status}: {message}");
            return Err(RecognitionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let measurements: SketchMeasurements = response.json().await?;
        debug!("recognition succeeded: {measurements:?}");

        Ok(measurements.into_record())
    }
}
