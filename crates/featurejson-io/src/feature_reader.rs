//! Reading a feature document back into the model

use crate::artifact::{ReadArtifact, read_artifact};
use crate::configuration_reader::decode_configurations;
use crate::constants::{
    FEATURE_BUNDLES, FEATURE_CAPABILITIES, FEATURE_COMPLETE, FEATURE_CONFIGURATIONS,
    FEATURE_DESCRIPTION, FEATURE_FINAL, FEATURE_FRAMEWORK_PROPERTIES, FEATURE_ID,
    FEATURE_LICENSE, FEATURE_PROTOTYPE, FEATURE_REQUIREMENTS, FEATURE_TITLE, FEATURE_VARIABLES,
    FEATURE_VENDOR,
};
use crate::error::{JsonIoError, JsonIoResult};
use crate::prototype::read_prototype;
use crate::reqcap::{read_capabilities, read_requirements};
use featurejson_codec::{Decoded, PropertyCodec, Report};
use featurejson_core::{
    Artifact, ArtifactId, Configuration, Extension, ExtensionType, Feature, JsonConfig,
};
use serde_json::{Map, Value};

/// Reads feature documents written by [`FeatureJsonWriter`](crate::FeatureJsonWriter)
///
/// Structural problems (wrong JSON types, malformed ids or extension keys)
/// fail the read. Configuration properties that fail to decode are left out
/// and described in the returned report, as are unknown top-level fields.
#[derive(Debug, Clone, Default)]
pub struct FeatureJsonReader {
    codec: PropertyCodec,
}

/// Mutable state of one read
struct FeatureRead {
    feature: Feature,
    report: Report,
    nested: Vec<Configuration>,
}

impl FeatureJsonReader {
    pub fn new(config: &JsonConfig) -> Self {
        Self {
            codec: PropertyCodec::new(config),
        }
    }

    pub fn read_feature(&self, json: &str) -> JsonIoResult<Decoded<Feature>> {
        let value: Value = serde_json::from_str(json)?;
        self.read_feature_value(&value)
    }

    pub fn read_feature_value(&self, value: &Value) -> JsonIoResult<Decoded<Feature>> {
        let Value::Object(object) = value else {
            return Err(JsonIoError::invalid("", "expected a feature object"));
        };
        let id = match object.get(FEATURE_ID) {
            Some(Value::String(id)) => ArtifactId::parse(id)?,
            _ => return Err(JsonIoError::invalid(FEATURE_ID, "missing or non-string id")),
        };
        let mut read = FeatureRead {
            feature: Feature::new(id),
            report: Report::new(),
            nested: Vec::new(),
        };
        for (key, value) in object {
            self.read_field(&mut read, key, value)?;
        }

        let FeatureRead {
            mut feature,
            report,
            nested,
        } = read;
        feature.configurations.extend(nested);
        tracing::debug!(
            "read feature {}: {} bundle(s), {} configuration(s), {} extension(s), {} error(s)",
            feature.id(),
            feature.bundles.len(),
            feature.configurations.len(),
            feature.extensions.len(),
            report.errors.len()
        );
        Ok(Decoded::new(feature, report))
    }

    fn read_field(&self, read: &mut FeatureRead, key: &str, value: &Value) -> JsonIoResult<()> {
        let feature = &mut read.feature;
        match key {
            FEATURE_ID => {}
            FEATURE_TITLE => feature.title = Some(string(key, value)?),
            FEATURE_DESCRIPTION => feature.description = Some(string(key, value)?),
            FEATURE_VENDOR => feature.vendor = Some(string(key, value)?),
            FEATURE_LICENSE => feature.license = Some(string(key, value)?),
            FEATURE_COMPLETE => feature.complete = boolean(key, value)?,
            FEATURE_FINAL => feature.final_ = boolean(key, value)?,
            FEATURE_PROTOTYPE => feature.prototype = Some(read_prototype(key, value)?),
            FEATURE_BUNDLES => {
                for (index, item) in array(key, value)?.iter().enumerate() {
                    let location = format!("{key}/{index}");
                    let artifact = self.read_artifact_entry(read, &location, item)?;
                    read.feature.bundles.push(artifact);
                }
            }
            FEATURE_FRAMEWORK_PROPERTIES => {
                for (name, item) in object(key, value)? {
                    let property = string(&format!("{key}/{name}"), item)?;
                    feature.framework_properties.insert(name.clone(), property);
                }
            }
            FEATURE_VARIABLES => {
                for (name, item) in object(key, value)? {
                    let variable = match item {
                        Value::Null => None,
                        other => Some(string(&format!("{key}/{name}"), other)?),
                    };
                    feature.variables.insert(name.clone(), variable);
                }
            }
            FEATURE_CONFIGURATIONS => {
                let decoded = decode_configurations(&self.codec, key, value)?;
                read.report.merge(decoded.report);
                read.feature.configurations.extend(decoded.value);
            }
            FEATURE_REQUIREMENTS => feature.requirements = read_requirements(key, value)?,
            FEATURE_CAPABILITIES => feature.capabilities = read_capabilities(key, value)?,
            _ if key.contains(':') => {
                let extension = self.read_extension(read, key, value)?;
                read.feature.extensions.push(extension);
            }
            _ => read.report.warning(key, "unknown field ignored"),
        }
        Ok(())
    }

    fn read_extension(&self, read: &mut FeatureRead, key: &str, value: &Value) -> JsonIoResult<Extension> {
        let (name, extension_type, state) = Extension::parse_key(key)?;
        let extension = match extension_type {
            ExtensionType::Json => Extension::json(name, state, value.clone()),
            ExtensionType::Text => {
                let lines = array(key, value)?
                    .iter()
                    .enumerate()
                    .map(|(index, line)| string(&format!("{key}/{index}"), line))
                    .collect::<JsonIoResult<Vec<_>>>()?;
                Extension::text(name, state, lines.join("\n"))
            }
            ExtensionType::Artifacts => {
                let mut artifacts = Vec::new();
                for (index, item) in array(key, value)?.iter().enumerate() {
                    let location = format!("{key}/{index}");
                    artifacts.push(self.read_artifact_entry(read, &location, item)?);
                }
                Extension::artifacts(name, state, artifacts)
            }
        };
        Ok(extension)
    }

    /// Read an artifact and collect its nested configurations, scoped to it
    fn read_artifact_entry(&self, read: &mut FeatureRead, location: &str, value: &Value) -> JsonIoResult<Artifact> {
        let ReadArtifact {
            artifact,
            configurations,
        } = read_artifact(location, value)?;
        if let Some(configurations) = configurations {
            let here = format!("{location}/{FEATURE_CONFIGURATIONS}");
            let decoded = decode_configurations(&self.codec, &here, configurations)?;
            read.report.merge(decoded.report);
            read.nested.extend(
                decoded
                    .value
                    .into_iter()
                    .map(|configuration| configuration.scoped_to(artifact.id())),
            );
        }
        Ok(artifact)
    }
}

fn string(location: &str, value: &Value) -> JsonIoResult<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| JsonIoError::invalid(location, "expected a string"))
}

fn boolean(location: &str, value: &Value) -> JsonIoResult<bool> {
    value
        .as_bool()
        .ok_or_else(|| JsonIoError::invalid(location, "expected a boolean"))
}

fn array<'v>(location: &str, value: &'v Value) -> JsonIoResult<&'v Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| JsonIoError::invalid(location, "expected an array"))
}

fn object<'v>(location: &str, value: &'v Value) -> JsonIoResult<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| JsonIoError::invalid(location, "expected an object"))
}
