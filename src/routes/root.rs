//! Root informational route.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::config::API_MESSAGE;
use crate::state::AppState;

/// Root route response body.
#[derive(Debug, Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    pub version: String,
    pub environment: String,
}

/// GET /
///
/// Reports that the API is up, along with its version and the configured
/// environment name.
pub async fn index(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(ApiInfo {
        message: API_MESSAGE,
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
    })
}
