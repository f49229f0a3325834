mod config;
mod errors;
mod intake;
mod models;
mod pricing;
mod recognition;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::recognition::HttpRecognizer;
use crate::routes::build_router;
use crate::session::QuoteSession;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CeilQuote API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the recognition client
    let recognizer = Arc::new(HttpRecognizer::new(config.recognition_url.clone()));
    info!(
        "Recognition client initialized (endpoint: {})",
        config.recognition_url
    );

    // Build app state: one quote session, one recognition backend
    let state = AppState {
        session: Arc::new(Mutex::new(QuoteSession::new())),
        recognizer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
