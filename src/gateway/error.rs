//! HTTP mapping for benchmark errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::bench::BenchError;

impl BenchError {
    /// Get error name string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::EncryptionFailure(_) => "ENCRYPTION_FAILURE",
        }
    }

    /// Get HTTP status code.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::EncryptionFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON response body for failed invocations.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "INVALID_REQUEST")]
    pub error: String,
    #[schema(example = "missing field `length_of_message`")]
    pub message: String,
}

impl IntoResponse for BenchError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let error = self.name();
        let message = match self {
            BenchError::InvalidRequest(msg) => {
                tracing::warn!("[INVOKE] rejected: {}", msg);
                msg
            }
            BenchError::EncryptionFailure(msg) => {
                tracing::error!("[INVOKE] cipher round trip failed: {}", msg);
                msg
            }
        };
        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
