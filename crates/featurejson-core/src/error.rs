//! Error types for the feature model

use thiserror::Error;

/// Result type alias for model operations
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Error type for constructing or parsing model values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// An artifact coordinate could not be parsed
    #[error("invalid artifact id '{id}': {reason}")]
    InvalidArtifactId { id: String, reason: String },

    /// An OSGi version could not be parsed
    #[error("invalid version: {0}")]
    InvalidVersion(String),

    /// An extension type name is not one of JSON, TEXT or ARTIFACTS
    #[error("unknown extension type: {0}")]
    UnknownExtensionType(String),

    /// An extension state is not one of true, false, REQUIRED, OPTIONAL or TRANSIENT
    #[error("unknown extension state: {0}")]
    UnknownExtensionState(String),

    /// An extension key is not of the form `name:TYPE|state`
    #[error("invalid extension key: {0}")]
    InvalidExtensionKey(String),

    /// A configuration name is empty or malformed
    #[error("invalid configuration name: {0}")]
    InvalidConfigurationName(String),

    /// A value kind name is unknown
    #[error("unknown value kind: {0}")]
    UnknownKind(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl FeatureError {
    /// Shorthand for an [`FeatureError::InvalidArtifactId`]
    pub fn invalid_artifact_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        FeatureError::InvalidArtifactId {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for FeatureError {
    fn from(err: serde_json::Error) -> Self {
        FeatureError::ConfigError(err.to_string())
    }
}
