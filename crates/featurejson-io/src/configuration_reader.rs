//! Reading configuration property sets

use crate::error::{JsonIoError, JsonIoResult};
use featurejson_codec::{Decoded, PropertyCodec, Report, child_location};
use featurejson_core::{Configuration, JsonConfig, Properties};
use serde_json::Value;

/// Decode `{ "<name>": { <properties> }, ... }` into configurations
///
/// Names that are not valid configuration names are structural errors;
/// property failures are collected in the report under `location/name/key`.
pub(crate) fn decode_configurations(
    codec: &PropertyCodec,
    location: &str,
    value: &Value,
) -> JsonIoResult<Decoded<Vec<Configuration>>> {
    let Value::Object(object) = value else {
        return Err(JsonIoError::invalid(location, "expected an object"));
    };
    let mut report = Report::new();
    let mut configurations = Vec::with_capacity(object.len());
    for (name, body) in object {
        let here = child_location(location, name);
        let mut configuration = Configuration::parse_name(name)?;
        let Value::Object(fields) = body else {
            return Err(JsonIoError::invalid(here, "expected an object"));
        };
        let decoded = codec.decode_properties(&here, fields);
        report.merge(decoded.report);
        *configuration.properties_mut() = decoded.value;
        configurations.push(configuration);
    }
    Ok(Decoded::new(configurations, report))
}

/// Reads configuration property sets written by
/// [`ConfigurationJsonWriter`](crate::ConfigurationJsonWriter)
#[derive(Debug, Clone, Default)]
pub struct ConfigurationJsonReader {
    codec: PropertyCodec,
}

impl ConfigurationJsonReader {
    pub fn new(config: &JsonConfig) -> Self {
        Self {
            codec: PropertyCodec::new(config),
        }
    }

    /// Read a single properties object
    pub fn read_configuration(&self, json: &str) -> JsonIoResult<Decoded<Properties>> {
        let value: Value = serde_json::from_str(json)?;
        match &value {
            Value::Object(fields) => Ok(self.codec.decode_properties("", fields)),
            _ => Err(JsonIoError::invalid("", "expected an object")),
        }
    }

    /// Read an object mapping configuration names to properties
    pub fn read_configurations(&self, json: &str) -> JsonIoResult<Decoded<Vec<Configuration>>> {
        let value: Value = serde_json::from_str(json)?;
        let decoded = decode_configurations(&self.codec, "", &value)?;
        tracing::debug!(
            "read {} configuration(s) with {} error(s)",
            decoded.value.len(),
            decoded.report.errors.len()
        );
        Ok(decoded)
    }
}
