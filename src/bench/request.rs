//! Inbound benchmark request
//!
//! The payload arrives either as a JSON object or as a JSON string holding the
//! serialized object (a body that was encoded twice by the caller). Both forms
//! are accepted; anything else is an [`BenchError::InvalidRequest`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::error::BenchError;

pub const FIELD_LENGTH: &str = "length_of_message";
pub const FIELD_ITERATIONS: &str = "num_of_iterations";

/// Largest accepted message (16 MiB of text); bounds the generator's allocation.
pub const MAX_LENGTH_OF_MESSAGE: usize = 16 * 1024 * 1024;

/// Validated benchmark parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BenchmarkRequest {
    /// Number of characters in the generated plaintext
    #[schema(example = 1000)]
    pub length_of_message: usize,
    /// Number of encrypt/decrypt round trips
    #[schema(example = 100)]
    pub num_of_iterations: u64,
}

impl BenchmarkRequest {
    pub fn new(length_of_message: usize, num_of_iterations: u64) -> Self {
        Self {
            length_of_message,
            num_of_iterations,
        }
    }

    /// Check bounds not expressible in the field types.
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.length_of_message > MAX_LENGTH_OF_MESSAGE {
            return Err(BenchError::InvalidRequest(format!(
                "`{FIELD_LENGTH}` must be at most {MAX_LENGTH_OF_MESSAGE}, got {}",
                self.length_of_message
            )));
        }
        Ok(())
    }

    /// Parse a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, BenchError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| BenchError::InvalidRequest(format!("body is not valid JSON: {e}")))?;
        Self::from_value(&value)
    }

    /// Parse an already-decoded payload.
    pub fn from_value(value: &Value) -> Result<Self, BenchError> {
        match value {
            Value::Object(map) => Self::from_map(map),
            Value::String(text) => {
                let inner: Value = serde_json::from_str(text).map_err(|e| {
                    BenchError::InvalidRequest(format!("body string is not valid JSON: {e}"))
                })?;
                match inner {
                    Value::Object(map) => Self::from_map(&map),
                    _ => Err(BenchError::InvalidRequest(
                        "payload must be a JSON object".into(),
                    )),
                }
            }
            _ => Err(BenchError::InvalidRequest(
                "payload must be a JSON object".into(),
            )),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, BenchError> {
        let length = required_count(map, FIELD_LENGTH)?;
        let length_of_message = usize::try_from(length).map_err(|_| {
            BenchError::InvalidRequest(format!("`{FIELD_LENGTH}` is too large: {length}"))
        })?;
        let num_of_iterations = required_count(map, FIELD_ITERATIONS)?;
        let req = Self {
            length_of_message,
            num_of_iterations,
        };
        req.validate()?;
        Ok(req)
    }
}

/// Read a required non-negative integer field.
fn required_count(map: &Map<String, Value>, field: &str) -> Result<u64, BenchError> {
    let value = map
        .get(field)
        .ok_or_else(|| BenchError::InvalidRequest(format!("missing field `{field}`")))?;

    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                Ok(v)
            } else if n.as_i64().is_some() {
                Err(BenchError::InvalidRequest(format!(
                    "`{field}` must be non-negative, got {n}"
                )))
            } else {
                Err(BenchError::InvalidRequest(format!(
                    "`{field}` must be an integer, got {n}"
                )))
            }
        }
        other => Err(BenchError::InvalidRequest(format!(
            "`{field}` must be an integer, got {other}"
        ))),
    }
}
