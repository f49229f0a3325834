pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::session::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/quote", get(handlers::handle_get_quote))
        .route("/api/v1/quote/manual", post(handlers::handle_manual))
        .route("/api/v1/quote/sketch", post(handlers::handle_sketch))
        .route("/api/v1/quote/reset", post(handlers::handle_reset))
        .with_state(state)
}
