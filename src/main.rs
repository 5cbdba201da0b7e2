//! Pulse: a minimal JSON status API.
//!
//! This is the application entry point. It initializes tracing, reads
//! configuration from the environment, sets up the axum router, and starts
//! the HTTP server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::{AppConfig, DEFAULT_LOG_FILTER};
use pulse::routes::create_router;
use pulse::server::{start_server, ServerError};
use pulse::state::AppState;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.port,
        environment = %config.environment,
        "Loaded configuration"
    );

    let state = AppState::new(config.clone());
    let app = create_router(state);

    start_server(app, &config).await
}
