//! Error types for writing and reading feature documents.

use featurejson_codec::Report;
use featurejson_core::FeatureError;
use thiserror::Error;

/// Errors that can occur while writing or reading JSON.
#[derive(Debug, Error)]
pub enum JsonIoError {
    /// The sink failed; output written so far is unusable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generator used out of order (key in an array, unbalanced end, ...).
    #[error("Generator misuse: {0}")]
    Generator(String),

    /// The document does not have the expected structure.
    #[error("Invalid document at {location}: {reason}")]
    InvalidDocument { location: String, reason: String },

    /// A model value in the document is malformed.
    #[error("Invalid model value: {0}")]
    Model(#[from] FeatureError),

    /// Decoding produced errors and the caller asked to fail on them.
    #[error("Rejected: {0}")]
    Rejected(Report),
}

impl JsonIoError {
    pub(crate) fn invalid(location: impl Into<String>, reason: impl Into<String>) -> Self {
        JsonIoError::InvalidDocument {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Sort a serde_json error into a sink failure or a JSON failure.
    pub(crate) fn from_serde(err: serde_json::Error) -> Self {
        if err.is_io() {
            JsonIoError::Io(err.into())
        } else {
            JsonIoError::Json(err)
        }
    }
}

impl From<Report> for JsonIoError {
    fn from(report: Report) -> Self {
        JsonIoError::Rejected(report)
    }
}

/// Result type for writer and reader operations.
pub type JsonIoResult<T> = Result<T, JsonIoError>;

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn JsonIoError___io___displays_message() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: JsonIoError = io_err.into();

        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn JsonIoError___invalid_document___displays_location() {
        let err = JsonIoError::invalid("bundles/0", "expected string or object");

        assert_eq!(
            err.to_string(),
            "Invalid document at bundles/0: expected string or object"
        );
    }

    #[test]
    fn JsonIoError___from_feature_error___converts() {
        let err: JsonIoError = FeatureError::InvalidVersion("x".to_string()).into();

        assert!(matches!(err, JsonIoError::Model(_)));
    }

    #[test]
    fn JsonIoError___from_report___is_rejected() {
        let mut report = Report::new();
        report.error("c/a", "bad");

        let err: JsonIoError = report.into();

        assert!(matches!(err, JsonIoError::Rejected(ref r) if r.errors.len() == 1));
        assert!(err.to_string().starts_with("Rejected: 1 error(s)"));
    }

    #[test]
    fn JsonIoError___from_serde___separates_io_failures() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        assert!(matches!(
            JsonIoError::from_serde(parse_err),
            JsonIoError::Json(_)
        ));
    }
}
