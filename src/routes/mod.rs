//! HTTP route handlers.
//!
//! Two fixed routes: a health check and a root informational route. Any
//! other path falls through to axum's default 404 fallback, and an
//! unmatched method on a known path gets the default 405.
//!
//! Request tracing is enabled via middleware that generates a unique
//! request ID for each incoming request.

pub mod health;
pub mod root;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the axum router with both routes and the request-span middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health::health))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
