//! Extensions: named, typed side-channel sections of a feature

use crate::artifact::Artifact;
use crate::error::{FeatureError, FeatureResult};
use std::fmt;

/// Disposition of an extension
///
/// On the wire the state is the suffix of the extension key:
/// ```text
/// Required  -> "true"
/// Optional  -> "false"
/// Transient -> "TRANSIENT"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionState {
    /// Consumers must understand the extension
    Required,
    /// Consumers may ignore the extension
    #[default]
    Optional,
    /// The extension is not carried over when features are aggregated
    Transient,
}

impl ExtensionState {
    /// Suffix used in the extension key
    pub fn wire_name(&self) -> &'static str {
        match self {
            ExtensionState::Required => "true",
            ExtensionState::Optional => "false",
            ExtensionState::Transient => "TRANSIENT",
        }
    }

    /// Parse a key suffix; accepts `true`/`false` and the state names in any case
    pub fn parse(value: &str) -> FeatureResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "TRUE" | "REQUIRED" => Ok(ExtensionState::Required),
            "FALSE" | "OPTIONAL" => Ok(ExtensionState::Optional),
            "TRANSIENT" => Ok(ExtensionState::Transient),
            _ => Err(FeatureError::UnknownExtensionState(value.to_string())),
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ExtensionState::Required)
    }
}

impl fmt::Display for ExtensionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionState::Required => write!(f, "REQUIRED"),
            ExtensionState::Optional => write!(f, "OPTIONAL"),
            ExtensionState::Transient => write!(f, "TRANSIENT"),
        }
    }
}

/// Payload type of an extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionType {
    Json,
    Text,
    Artifacts,
}

impl ExtensionType {
    pub fn wire_name(&self) -> &'static str {
        match self {
            ExtensionType::Json => "JSON",
            ExtensionType::Text => "TEXT",
            ExtensionType::Artifacts => "ARTIFACTS",
        }
    }

    pub fn parse(value: &str) -> FeatureResult<Self> {
        match value.to_ascii_uppercase().as_str() {
            "JSON" => Ok(ExtensionType::Json),
            "TEXT" => Ok(ExtensionType::Text),
            "ARTIFACTS" => Ok(ExtensionType::Artifacts),
            _ => Err(FeatureError::UnknownExtensionType(value.to_string())),
        }
    }
}

impl fmt::Display for ExtensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Payload of an extension; the variant determines the [`ExtensionType`]
#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionContent {
    Json(serde_json::Value),
    Text(String),
    Artifacts(Vec<Artifact>),
}

impl ExtensionContent {
    pub fn extension_type(&self) -> ExtensionType {
        match self {
            ExtensionContent::Json(_) => ExtensionType::Json,
            ExtensionContent::Text(_) => ExtensionType::Text,
            ExtensionContent::Artifacts(_) => ExtensionType::Artifacts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extension {
    name: String,
    state: ExtensionState,
    content: ExtensionContent,
}

impl Extension {
    pub fn new(name: impl Into<String>, state: ExtensionState, content: ExtensionContent) -> Self {
        Self {
            name: name.into(),
            state,
            content,
        }
    }

    pub fn json(name: impl Into<String>, state: ExtensionState, value: serde_json::Value) -> Self {
        Self::new(name, state, ExtensionContent::Json(value))
    }

    pub fn text(name: impl Into<String>, state: ExtensionState, text: impl Into<String>) -> Self {
        Self::new(name, state, ExtensionContent::Text(text.into()))
    }

    pub fn artifacts(name: impl Into<String>, state: ExtensionState, artifacts: Vec<Artifact>) -> Self {
        Self::new(name, state, ExtensionContent::Artifacts(artifacts))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> ExtensionState {
        self.state
    }

    pub fn extension_type(&self) -> ExtensionType {
        self.content.extension_type()
    }

    pub fn content(&self) -> &ExtensionContent {
        &self.content
    }

    /// Artifacts of an artifact-list extension, empty for other types
    pub fn artifact_list(&self) -> &[Artifact] {
        match &self.content {
            ExtensionContent::Artifacts(artifacts) => artifacts,
            _ => &[],
        }
    }

    /// Composite key `name:TYPE|state`
    pub fn key(&self) -> String {
        format!(
            "{}:{}|{}",
            self.name,
            self.extension_type().wire_name(),
            self.state.wire_name()
        )
    }

    /// Split a composite key into name, type and state
    ///
    /// Both the type and the state are split off at the last separator, so
    /// names may contain `:` and `|`. A key without `|state` is optional.
    pub fn parse_key(key: &str) -> FeatureResult<(String, ExtensionType, ExtensionState)> {
        let (head, state) = match key.rsplit_once('|') {
            Some((head, state)) if !state.contains(':') => (head, ExtensionState::parse(state)?),
            _ => (key, ExtensionState::Optional),
        };
        let Some((name, type_name)) = head.rsplit_once(':') else {
            return Err(FeatureError::InvalidExtensionKey(key.to_string()));
        };
        if name.is_empty() {
            return Err(FeatureError::InvalidExtensionKey(key.to_string()));
        }
        Ok((name.to_string(), ExtensionType::parse(type_name)?, state))
    }
}


#[cfg(test)]
#[path = "extension/extension_parameterized_tests.rs"]
mod extension_parameterized_tests;
