// Quote session — the orchestration state machine.
// AwaitingInput → Processing → Displaying, with reset back to
// AwaitingInput from any state. Exactly one measurement/quote pair is
// live at a time.

pub mod handlers;

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::measurement::MeasurementRecord;
use crate::models::quote::Quote;
use crate::pricing::compute_quote;

/// Identity of one recognition request. Tokens are minted monotonically;
/// an outcome whose token no longer matches the live request is stale and
/// must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Externally visible phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    AwaitingInput,
    Processing,
    Displaying,
}

#[derive(Debug)]
enum SessionState {
    AwaitingInput,
    Processing { token: RequestToken },
    Displaying { record: MeasurementRecord, quote: Quote },
}

#[derive(Debug)]
pub struct QuoteSession {
    state: SessionState,
    next_token: u64,
    last_error: Option<String>,
}

impl Default for QuoteSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::AwaitingInput,
            next_token: 0,
            last_error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match self.state {
            SessionState::AwaitingInput => SessionPhase::AwaitingInput,
            SessionState::Processing { .. } => SessionPhase::Processing,
            SessionState::Displaying { .. } => SessionPhase::Displaying,
        }
    }

    pub fn quote(&self) -> Option<&Quote> {
        match &self.state {
            SessionState::Displaying { quote, .. } => Some(quote),
            _ => None,
        }
    }

    /// The record the displayed quote was derived from.
    pub fn record(&self) -> Option<&MeasurementRecord> {
        match &self.state {
            SessionState::Displaying { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Prices a manually entered record. A submission while a sketch is
    /// processing is rejected; a submission while a quote is displaying
    /// replaces it.
    pub fn submit_record(&mut self, record: MeasurementRecord) -> Result<Quote, AppError> {
        if matches!(self.state, SessionState::Processing { .. }) {
            return Err(AppError::RecognitionInFlight);
        }
        let quote = compute_quote(&record);
        self.last_error = None;
        self.state = SessionState::Displaying {
            record,
            quote: quote.clone(),
        };
        Ok(quote)
    }

    /// Starts a recognition request and mints its identity token. Only one
    /// request may be in flight at a time.
    pub fn begin_recognition(&mut self) -> Result<RequestToken, AppError> {
        if matches!(self.state, SessionState::Processing { .. }) {
            return Err(AppError::RecognitionInFlight);
        }
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.last_error = None;
        self.state = SessionState::Processing { token };
        Ok(token)
    }

    /// Applies a recognition result. Returns `None` when the token is
    /// stale — the session was reset or replaced while the request was in
    /// flight — and the result is dropped without touching the state.
    pub fn complete_recognition(
        &mut self,
        token: RequestToken,
        record: MeasurementRecord,
    ) -> Option<Quote> {
        if !self.is_current(token) {
            debug!("discarding stale recognition result for {token:?}");
            return None;
        }
        let quote = compute_quote(&record);
        self.last_error = None;
        self.state = SessionState::Displaying {
            record,
            quote: quote.clone(),
        };
        Some(quote)
    }

    /// Records a recognition failure and returns to `AwaitingInput` with
    /// the given user-visible message. Stale failures are discarded.
    pub fn fail_recognition(&mut self, token: RequestToken, message: &str) -> bool {
        if !self.is_current(token) {
            debug!("discarding stale recognition failure for {token:?}");
            return false;
        }
        self.last_error = Some(message.to_string());
        self.state = SessionState::AwaitingInput;
        true
    }

    /// Discards the current quote and record. A recognition request left
    /// in flight becomes stale: its token will no longer match.
    pub fn reset(&mut self) {
        self.state = SessionState::AwaitingInput;
        self.last_error = None;
    }

    fn is_current(&self, token: RequestToken) -> bool {
        matches!(self.state, SessionState::Processing { token: current } if current == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MeasurementRecord {
        MeasurementRecord {
            perimeter: 10.0,
            area: 12.0,
            corners: 6,
            chandeliers: 0,
            spotlights: 0,
        }
    }

    #[test]
    fn test_manual_submission_displays_quote() {
        let mut session = QuoteSession::new();
        assert_eq!(session.phase(), SessionPhase::AwaitingInput);

        let quote = session.submit_record(record()).unwrap();
        assert_eq!(quote.grand_total, 9500.0);
        assert_eq!(session.phase(), SessionPhase::Displaying);
        assert_eq!(session.quote().unwrap().grand_total, 9500.0);
        assert_eq!(session.record(), Some(&record()));
    }

    #[test]
    fn test_recognition_round_trip() {
        let mut session = QuoteSession::new();
        let token = session.begin_recognition().unwrap();
        assert_eq!(session.phase(), SessionPhase::Processing);

        let quote = session.complete_recognition(token, record()).unwrap();
        assert_eq!(quote.grand_total, 9500.0);
        assert_eq!(session.phase(), SessionPhase::Displaying);
    }

    #[test]
    fn test_submissions_rejected_while_processing() {
        let mut session = QuoteSession::new();
        session.begin_recognition().unwrap();

        assert!(matches!(
            session.submit_record(record()),
            Err(AppError::RecognitionInFlight)
        ));
        assert!(matches!(
            session.begin_recognition(),
            Err(AppError::RecognitionInFlight)
        ));
        assert_eq!(session.phase(), SessionPhase::Processing);
    }

    #[test]
    fn test_stale_result_after_reset_is_discarded() {
        let mut session = QuoteSession::new();
        let token = session.begin_recognition().unwrap();
        session.reset();

        assert!(session.complete_recognition(token, record()).is_none());
        assert_eq!(session.phase(), SessionPhase::AwaitingInput);
        assert!(session.quote().is_none());
    }

    #[test]
    fn test_stale_result_cannot_clobber_newer_request() {
        let mut session = QuoteSession::new();
        let stale = session.begin_recognition().unwrap();
        session.reset();
        let current = session.begin_recognition().unwrap();
        assert_ne!(stale, current);

        assert!(session.complete_recognition(stale, record()).is_none());
        assert_eq!(session.phase(), SessionPhase::Processing);

        assert!(session.complete_recognition(current, record()).is_some());
        assert_eq!(session.phase(), SessionPhase::Displaying);
    }

    #[test]
    fn test_failure_returns_to_awaiting_with_message() {
        let mut session = QuoteSession::new();
        let token = session.begin_recognition().unwrap();

        assert!(session.fail_recognition(token, "could not process"));
        assert_eq!(session.phase(), SessionPhase::AwaitingInput);
        assert_eq!(session.last_error(), Some("could not process"));
    }

    #[test]
    fn test_stale_failure_leaves_no_message() {
        let mut session = QuoteSession::new();
        let token = session.begin_recognition().unwrap();
        session.reset();

        assert!(!session.fail_recognition(token, "could not process"));
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn test_new_submission_clears_previous_error() {
        let mut session = QuoteSession::new();
        let token = session.begin_recognition().unwrap();
        session.fail_recognition(token, "could not process");

        session.submit_record(record()).unwrap();
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn test_reset_discards_displayed_quote() {
        let mut session = QuoteSession::new();
        session.submit_record(record()).unwrap();
        session.reset();

        assert_eq!(session.phase(), SessionPhase::AwaitingInput);
        assert!(session.quote().is_none());
        assert!(session.record().is_none());
    }

    #[test]
    fn test_submission_while_displaying_replaces_quote() {
        let mut session = QuoteSession::new();
        session.submit_record(record()).unwrap();

        let bigger = MeasurementRecord {
            perimeter: 20.0,
            ..record()
        };
        let quote = session.submit_record(bigger).unwrap();
        assert_eq!(session.quote().unwrap(), &quote);
    }
}
