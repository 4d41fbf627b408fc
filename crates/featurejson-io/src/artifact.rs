//! Artifact entries: a bare id string, or an object with id and metadata

use crate::configuration_writer::{Body, write_configurations_field};
use crate::constants::{ARTIFACT_ID, ARTIFACT_RUN_MODES, ARTIFACT_RUNMODES_LEGACY, FEATURE_CONFIGURATIONS};
use crate::error::{JsonIoError, JsonIoResult};
use crate::generator::JsonGenerator;
use featurejson_codec::PropertyCodec;
use featurejson_core::{Artifact, ArtifactId, Configuration};
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::io::Write;

/// Metadata as written: `runmodes` renamed to `run-modes`, `id` left out
///
/// When both spellings are present the legacy value wins.
pub(crate) fn written_metadata(artifact: &Artifact) -> BTreeMap<&str, &str> {
    let mut metadata: BTreeMap<&str, &str> = artifact
        .metadata()
        .iter()
        .filter(|(key, _)| key.as_str() != ARTIFACT_ID)
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    if let Some(run_modes) = metadata.remove(ARTIFACT_RUNMODES_LEGACY) {
        metadata.insert(ARTIFACT_RUN_MODES, run_modes);
    }
    metadata
}

/// Configurations whose scope names this artifact
pub(crate) fn scoped_configurations<'c>(
    artifact: &Artifact,
    configurations: &'c [Configuration],
) -> Vec<&'c Configuration> {
    let id = artifact.id().to_mvn_id();
    configurations
        .iter()
        .filter(|configuration| configuration.artifact_ref() == Some(id.as_str()))
        .collect()
}

/// Write one artifact as an array element
///
/// An artifact with nothing to write besides its id is written as the bare
/// id. With `nest` set, scoped configurations are written inside the
/// artifact object and take the `configurations` key over any metadata of
/// that name.
pub(crate) fn write_artifact<W: Write, F: Formatter>(
    generator: &mut JsonGenerator<W, F>,
    artifact: &Artifact,
    scoped: &[&Configuration],
    nest: Option<&PropertyCodec>,
) -> JsonIoResult<()> {
    let id = artifact.id().to_mvn_id();
    let mut metadata = written_metadata(artifact);
    if nest.is_some()
        && !scoped.is_empty()
        && metadata.remove(FEATURE_CONFIGURATIONS).is_some()
    {
        tracing::warn!(
            "artifact {} has '{}' metadata, dropped in favor of its nested configurations",
            id,
            FEATURE_CONFIGURATIONS
        );
    }
    if metadata.is_empty() && scoped.is_empty() {
        return generator.string(&id);
    }
    generator.begin_object()?;
    generator.string_field(ARTIFACT_ID, &id)?;
    for (key, value) in metadata {
        generator.string_field(key, value)?;
    }
    if let Some(codec) = nest {
        write_configurations_field(generator, codec, scoped, Body::Unscoped)?;
    }
    generator.end()
}

/// An artifact read from a document, plus its nested configurations if any
pub(crate) struct ReadArtifact<'v> {
    pub artifact: Artifact,
    pub configurations: Option<&'v Value>,
}

/// Read one artifact entry (string or object form)
pub(crate) fn read_artifact<'v>(location: &str, value: &'v Value) -> JsonIoResult<ReadArtifact<'v>> {
    match value {
        Value::String(id) => Ok(ReadArtifact {
            artifact: Artifact::new(ArtifactId::parse(id)?),
            configurations: None,
        }),
        Value::Object(object) => read_artifact_object(location, object),
        _ => Err(JsonIoError::invalid(location, "expected an artifact id or object")),
    }
}

fn read_artifact_object<'v>(
    location: &str,
    object: &'v Map<String, Value>,
) -> JsonIoResult<ReadArtifact<'v>> {
    let id = match object.get(ARTIFACT_ID) {
        Some(Value::String(id)) => ArtifactId::parse(id)?,
        _ => return Err(JsonIoError::invalid(location, "missing or non-string id")),
    };
    let mut artifact = Artifact::new(id);
    let mut configurations = None;
    for (key, value) in object {
        match (key.as_str(), value) {
            (ARTIFACT_ID, _) => {}
            (FEATURE_CONFIGURATIONS, Value::Object(_)) => configurations = Some(value),
            (_, Value::String(s)) => {
                artifact.metadata_mut().insert(key.clone(), s.clone());
            }
            // numbers and booleans, e.g. "start-order": 5, are kept as text
            (_, Value::Number(_) | Value::Bool(_)) => {
                artifact.metadata_mut().insert(key.clone(), value.to_string());
            }
            _ => {
                return Err(JsonIoError::invalid(
                    format!("{location}/{key}"),
                    "metadata values must be strings",
                ));
            }
        }
    }
    Ok(ReadArtifact {
        artifact,
        configurations,
    })
}

/// Read a JSON array of artifact ids in string form
pub(crate) fn read_id_list(location: &str, value: &Value) -> JsonIoResult<Vec<ArtifactId>> {
    let Value::Array(items) = value else {
        return Err(JsonIoError::invalid(location, "expected an array"));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(id) => Ok(ArtifactId::parse(id)?),
            _ => Err(JsonIoError::invalid(
                format!("{location}/{index}"),
                "expected an artifact id",
            )),
        })
        .collect()
}

/// Read a JSON array of strings
pub(crate) fn read_string_list(location: &str, value: &Value) -> JsonIoResult<Vec<String>> {
    let Value::Array(items) = value else {
        return Err(JsonIoError::invalid(location, "expected an array"));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            _ => Err(JsonIoError::invalid(
                format!("{location}/{index}"),
                "expected a string",
            )),
        })
        .collect()
}
