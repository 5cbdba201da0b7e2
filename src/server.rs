//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Bind the listener and serve until the process is terminated.
///
/// Binding the port is the only fallible step at startup; a failed bind
/// (e.g. port already in use) propagates to the caller. Once bound, a
/// single readiness line is logged and this function blocks for the life
/// of the process.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(port = config.port, "Server running on port {}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
