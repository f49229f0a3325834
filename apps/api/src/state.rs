use std::sync::Arc;

use tokio::sync::Mutex;

use crate::recognition::Recognizer;
use crate::session::QuoteSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single live quote session. Handlers lock it briefly and never
    /// hold the lock across the recognition call.
    pub session: Arc<Mutex<QuoteSession>>,
    /// Pluggable recognition backend. Default: HttpRecognizer against
    /// RECOGNITION_URL. Tests swap in canned backends.
    pub recognizer: Arc<dyn Recognizer>,
}
