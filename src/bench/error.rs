use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BenchError {
    /// Payload unparseable, or a required field is absent, non-integer or negative.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The cipher round trip failed (hex or UTF-8 decode of the recovered text).
    #[error("Encryption failure: {0}")]
    EncryptionFailure(String),
}

impl From<hex::FromHexError> for BenchError {
    fn from(e: hex::FromHexError) -> Self {
        BenchError::EncryptionFailure(format!("ciphertext is not valid hex: {e}"))
    }
}

impl From<std::string::FromUtf8Error> for BenchError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        BenchError::EncryptionFailure(format!("recovered plaintext is not UTF-8: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_error_maps_to_encryption_failure() {
        let err: BenchError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, BenchError::EncryptionFailure(_)));
        assert!(err.to_string().starts_with("Encryption failure"));
    }

    #[test]
    fn test_invalid_request_display() {
        let err = BenchError::InvalidRequest("missing field `length_of_message`".into());
        assert_eq!(
            err.to_string(),
            "Invalid request: missing field `length_of_message`"
        );
    }
}
