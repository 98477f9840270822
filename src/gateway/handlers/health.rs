//! Health check handler

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State};
use utoipa::ToSchema;

use super::super::state::AppState;

/// Health check response data
#[derive(Debug, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Build git hash
    #[schema(example = "a1b2c3d")]
    pub version: String,
    #[schema(example = "crypto-7f9c")]
    pub hostname: String,
    pub invocations: u64,
    pub uptime_secs: u64,
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json")
    ),
    tag = "System"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.to_string(),
        hostname: state.hostname.clone(),
        invocations: state.invocations(),
        uptime_secs: state.uptime_secs(),
        timestamp_ms,
    })
}
