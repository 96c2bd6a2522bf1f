//! Classification service client: trait, HTTP implementation, and response
//! normalization.

pub mod http;
pub mod mock;

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;
use thiserror::Error;

use crate::{PendingFile, PredictionResult};

pub use http::{DEFAULT_BASE_URL, HttpClient};

/// Errors from a single classification exchange.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-success status with a structured `detail` message in the body.
    #[error("{0}")]
    Service(String),
    /// Non-success status with no usable body.
    #[error("API error: {0}")]
    Status(u16),
    /// Success status but a body that does not decode as a prediction.
    #[error("failed to parse classification response: {0}")]
    Parse(String),
    /// Connection, TLS, or timeout failure below HTTP.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The selected file could not be read for upload.
    #[error("failed to read {name}: {source}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// A backend that can classify text or documents.
///
/// Exactly one network exchange per call, no retries — retry policy, if any,
/// belongs to the caller. Implementations must pass the probability through
/// unmodified; resolving its units is [`crate::verdict`]'s job.
pub trait ClassificationClient: Send + Sync {
    /// Classify raw article text. The caller guarantees the trimmed text is
    /// non-empty; this layer does not re-check.
    fn classify_text<'a>(
        &'a self,
        text: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + 'a>>;

    /// Classify a document file, sent as binary multipart content.
    fn classify_file<'a>(
        &'a self,
        file: &'a PendingFile,
    ) -> Pin<Box<dyn Future<Output = Result<PredictionResult, ApiError>> + Send + 'a>>;
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Normalize a raw HTTP response into a prediction or an error.
///
/// Non-success statuses prefer the JSON `detail` field when the body carries
/// one, falling back to a generic `API error: <status>` message. Success
/// bodies must decode as `{label, probability}`. Factored out of the
/// transport so normalization is testable without a socket.
pub fn decode_response(status: u16, body: &[u8]) -> Result<PredictionResult, ApiError> {
    if !(200..300).contains(&status) {
        if let Ok(err) = serde_json::from_slice::<ErrorBody>(body) {
            return Err(ApiError::Service(err.detail));
        }
        return Err(ApiError::Status(status));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_decodes() {
        let body = br#"{"label": "REAL NEWS", "probability": 0.92}"#;
        let result = decode_response(200, body).unwrap();
        assert_eq!(result.label, "REAL NEWS");
        assert_eq!(result.probability, 0.92);
    }

    #[test]
    fn probability_is_passed_through_raw() {
        // Percentage-form values must not be scaled or rejected here.
        let body = br#"{"label": "FAKE NEWS", "probability": 87}"#;
        let result = decode_response(200, body).unwrap();
        assert_eq!(result.probability, 87.0);
    }

    #[test]
    fn error_status_without_body_is_generic() {
        let err = decode_response(500, b"").unwrap_err();
        assert_eq!(err.to_string(), "API error: 500");
    }

    #[test]
    fn error_status_with_detail_uses_detail() {
        let body = br#"{"detail": "Unsupported File Format. Upload .docx or .pdf"}"#;
        let err = decode_response(422, body).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported File Format. Upload .docx or .pdf"
        );
    }

    #[test]
    fn error_status_with_unstructured_body_is_generic() {
        let err = decode_response(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "API error: 502");
    }

    #[test]
    fn undecodable_success_body_is_parse_error() {
        let err = decode_response(200, b"not json at all").unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn success_body_missing_fields_is_parse_error() {
        let err = decode_response(200, br#"{"verdict": "ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
