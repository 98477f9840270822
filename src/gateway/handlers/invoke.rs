//! Benchmark invocation handler

use std::sync::Arc;
use std::time::Instant;

use axum::{Json, body::Bytes, extract::State};

use crate::bench::harness::TARGET_INVOKE;
use crate::bench::{self, BenchError, BenchmarkRequest, BenchmarkResult};

use super::super::error::ErrorResponse;
use super::super::state::AppState;

/// Run one encrypt/decrypt benchmark
///
/// Accepts the request either as a JSON object or as a JSON string holding
/// the serialized object. Also served at `/function/crypto`.
///
/// - Success: 200 OK + `{latency, data}`
/// - Bad payload: 400 + `{error: "INVALID_REQUEST", message}`
/// - Cipher failure: 500 + `{error: "ENCRYPTION_FAILURE", message}`
#[utoipa::path(
    post,
    path = "/",
    request_body = BenchmarkRequest,
    responses(
        (status = 200, description = "Round trip completed", body = BenchmarkResult),
        (status = 400, description = "Malformed payload", body = ErrorResponse),
        (status = 500, description = "Cipher round trip failed", body = ErrorResponse)
    ),
    tag = "Benchmark"
)]
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BenchmarkResult>, BenchError> {
    let received = Instant::now();
    let req = BenchmarkRequest::from_slice(&body)?;
    let seq = state.record_invocation();

    // CPU-bound loop: keep it off the reactor threads.
    let result = tokio::task::spawn_blocking(move || bench::run(&req))
        .await
        .map_err(|e| BenchError::EncryptionFailure(format!("harness task aborted: {e}")))??;

    tracing::info!(
        target: TARGET_INVOKE,
        "[INVOKE] #{} len={} iters={} latency={:.6}s e2e={:.6}s",
        seq,
        req.length_of_message,
        req.num_of_iterations,
        result.latency,
        received.elapsed().as_secs_f64()
    );

    Ok(Json(result))
}
