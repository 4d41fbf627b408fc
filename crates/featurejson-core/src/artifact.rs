//! Artifact coordinates and artifacts

use crate::error::{FeatureError, FeatureResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Default artifact type, omitted from the canonical form
pub const DEFAULT_TYPE: &str = "jar";

/// Prefix of the maven URL form
const MVN_URL_PREFIX: &str = "mvn:";

/// A normalized artifact coordinate
///
/// The canonical string form ("mvn id") is
/// `group:artifact[:type[:classifier]]:version`, where the type is only
/// written when it is not `jar` or when a classifier is present.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactId {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    type_: String,
}

impl ArtifactId {
    /// Create a coordinate, normalizing an empty classifier or type away
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
        type_: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: classifier.filter(|c| !c.is_empty()),
            type_: type_
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| DEFAULT_TYPE.to_string()),
        }
    }

    /// Parse the canonical `group:artifact[:type[:classifier]]:version` form
    pub fn parse(mvn_id: &str) -> FeatureResult<Self> {
        let parts: Vec<&str> = mvn_id.split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(FeatureError::invalid_artifact_id(
                mvn_id,
                "coordinate segments must not be empty",
            ));
        }
        match parts.as_slice() {
            [g, a, v] => Ok(Self::new(*g, *a, *v, None, None)),
            [g, a, t, v] => Ok(Self::new(*g, *a, *v, None, Some(t.to_string()))),
            [g, a, t, c, v] => Ok(Self::new(
                *g,
                *a,
                *v,
                Some(c.to_string()),
                Some(t.to_string()),
            )),
            _ => Err(FeatureError::invalid_artifact_id(
                mvn_id,
                "expected 3 to 5 ':'-separated segments",
            )),
        }
    }

    /// Parse the `mvn:group/artifact/version[/type[/classifier]]` URL form
    pub fn from_mvn_url(url: &str) -> FeatureResult<Self> {
        let Some(path) = url.strip_prefix(MVN_URL_PREFIX) else {
            return Err(FeatureError::invalid_artifact_id(
                url,
                "maven URL must start with 'mvn:'",
            ));
        };
        let parts: Vec<&str> = path.split('/').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(FeatureError::invalid_artifact_id(
                url,
                "URL segments must not be empty",
            ));
        }
        match parts.as_slice() {
            [g, a, v] => Ok(Self::new(*g, *a, *v, None, None)),
            [g, a, v, t] => Ok(Self::new(*g, *a, *v, None, Some(t.to_string()))),
            [g, a, v, t, c] => Ok(Self::new(
                *g,
                *a,
                *v,
                Some(c.to_string()),
                Some(t.to_string()),
            )),
            _ => Err(FeatureError::invalid_artifact_id(
                url,
                "expected 3 to 5 '/'-separated segments",
            )),
        }
    }

    /// Canonical string form
    pub fn to_mvn_id(&self) -> String {
        let mut id = format!("{}:{}", self.group_id, self.artifact_id);
        if self.classifier.is_some() || self.type_ != DEFAULT_TYPE {
            id.push(':');
            id.push_str(&self.type_);
            if let Some(classifier) = &self.classifier {
                id.push(':');
                id.push_str(classifier);
            }
        }
        id.push(':');
        id.push_str(&self.version);
        id
    }

    /// Maven URL form
    pub fn to_mvn_url(&self) -> String {
        let mut url = format!(
            "{MVN_URL_PREFIX}{}/{}/{}",
            self.group_id, self.artifact_id, self.version
        );
        if self.classifier.is_some() || self.type_ != DEFAULT_TYPE {
            url.push('/');
            url.push_str(&self.type_);
            if let Some(classifier) = &self.classifier {
                url.push('/');
                url.push_str(classifier);
            }
        }
        url
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mvn_id())
    }
}

impl FromStr for ArtifactId {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactId::parse(s)
    }
}

impl Serialize for ArtifactId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_mvn_id())
    }
}

impl<'de> Deserialize<'de> for ArtifactId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ArtifactId::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// An artifact: a coordinate plus string metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    id: ArtifactId,
    metadata: BTreeMap<String, String>,
}

impl Artifact {
    pub fn new(id: ArtifactId) -> Self {
        Self {
            id,
            metadata: BTreeMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.metadata
    }
}

impl From<ArtifactId> for Artifact {
    fn from(id: ArtifactId) -> Self {
        Artifact::new(id)
    }
}
