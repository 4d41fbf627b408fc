//! Writing configuration property sets

use crate::constants::FEATURE_CONFIGURATIONS;
use crate::error::JsonIoResult;
use crate::generator::{JsonDocument, JsonGenerator, generate, generate_string};
use featurejson_codec::PropertyCodec;
use featurejson_core::{Configuration, JsonConfig, Properties, TypedValue};
use serde_json::ser::Formatter;
use std::io::Write;

/// Write the properties of one configuration as the fields of an open object
pub(crate) fn write_properties<'a, W, F, I>(
    generator: &mut JsonGenerator<W, F>,
    codec: &PropertyCodec,
    properties: I,
) -> JsonIoResult<()>
where
    W: Write,
    F: Formatter,
    I: IntoIterator<Item = (&'a String, &'a TypedValue)>,
{
    for (name, value) in properties {
        let (key, json) = codec.encode(name, value);
        generator.value_field(&key, &json)?;
    }
    Ok(())
}

/// Which properties of a configuration end up in its body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Body {
    /// Every property, including the artifact scope
    All,
    /// Without the artifact scope, for configurations nested under their artifact
    Unscoped,
}

/// Write a `configurations` field; nothing when there are none
pub(crate) fn write_configurations_field<W: Write, F: Formatter>(
    generator: &mut JsonGenerator<W, F>,
    codec: &PropertyCodec,
    configurations: &[&Configuration],
    body: Body,
) -> JsonIoResult<()> {
    if configurations.is_empty() {
        return Ok(());
    }
    generator.begin_object_field(FEATURE_CONFIGURATIONS)?;
    write_named_configurations(generator, codec, configurations, body)?;
    generator.end()
}

fn write_named_configurations<W: Write, F: Formatter>(
    generator: &mut JsonGenerator<W, F>,
    codec: &PropertyCodec,
    configurations: &[&Configuration],
    body: Body,
) -> JsonIoResult<()> {
    for configuration in configurations {
        generator.begin_object_field(&configuration.name())?;
        match body {
            Body::All => write_properties(generator, codec, configuration.properties())?,
            Body::Unscoped => {
                write_properties(generator, codec, configuration.configuration_properties())?
            }
        }
        generator.end()?;
    }
    Ok(())
}

struct PropertiesDocument<'a> {
    codec: &'a PropertyCodec,
    properties: &'a Properties,
}

impl JsonDocument for PropertiesDocument<'_> {
    fn emit<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        generator.begin_object()?;
        write_properties(generator, self.codec, self.properties)?;
        generator.end()
    }
}

struct ConfigurationsDocument<'a> {
    codec: &'a PropertyCodec,
    configurations: Vec<&'a Configuration>,
}

impl JsonDocument for ConfigurationsDocument<'_> {
    fn emit<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        generator.begin_object()?;
        write_named_configurations(generator, self.codec, &self.configurations, Body::All)?;
        generator.end()
    }
}

/// Writes configuration property sets on their own, outside a feature
///
/// ```
/// use featurejson_core::{JsonConfig, Properties, TypedValue};
/// use featurejson_io::ConfigurationJsonWriter;
///
/// let mut properties = Properties::new();
/// properties.insert("port".to_string(), TypedValue::from(8080i32));
///
/// let writer = ConfigurationJsonWriter::new(JsonConfig::compact());
/// let json = writer.configuration_to_string(&properties)?;
/// assert_eq!(json, r#"{"port:Integer":8080}"#);
/// # Ok::<(), featurejson_io::JsonIoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationJsonWriter {
    config: JsonConfig,
    codec: PropertyCodec,
}

impl Default for ConfigurationJsonWriter {
    fn default() -> Self {
        Self::new(JsonConfig::default())
    }
}

impl ConfigurationJsonWriter {
    pub fn new(config: JsonConfig) -> Self {
        let codec = PropertyCodec::new(&config);
        Self { config, codec }
    }

    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Write one properties object; the sink stays open
    pub fn write_configuration<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        properties: &Properties,
    ) -> JsonIoResult<()> {
        let document = PropertiesDocument {
            codec: &self.codec,
            properties,
        };
        generate(&self.config, sink, &document)
    }

    /// Write an object mapping configuration names to their properties
    pub fn write_configurations<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        configurations: &[Configuration],
    ) -> JsonIoResult<()> {
        let document = ConfigurationsDocument {
            codec: &self.codec,
            configurations: configurations.iter().collect(),
        };
        generate(&self.config, sink, &document)
    }

    pub fn configuration_to_string(&self, properties: &Properties) -> JsonIoResult<String> {
        let document = PropertiesDocument {
            codec: &self.codec,
            properties,
        };
        generate_string(&self.config, &document)
    }
}
