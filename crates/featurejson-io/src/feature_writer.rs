//! Writing a feature as one JSON document

use crate::artifact::{scoped_configurations, write_artifact};
use crate::configuration_writer::{Body, write_configurations_field};
use crate::constants::{
    FEATURE_BUNDLES, FEATURE_CAPABILITIES, FEATURE_COMPLETE, FEATURE_DESCRIPTION, FEATURE_FINAL,
    FEATURE_FRAMEWORK_PROPERTIES, FEATURE_ID, FEATURE_LICENSE, FEATURE_REQUIREMENTS,
    FEATURE_TITLE, FEATURE_VARIABLES, FEATURE_VENDOR,
};
use crate::error::JsonIoResult;
use crate::generator::{JsonDocument, JsonGenerator, generate, generate_string};
use crate::prototype::write_prototype;
use crate::reqcap::write_clauses;
use featurejson_codec::PropertyCodec;
use featurejson_core::{
    Artifact, Capability, Configuration, Extension, ExtensionContent, Feature, JsonConfig,
    Requirement, resolve_artifact,
};
use serde_json::ser::Formatter;
use std::io::Write;

/// Writes features as JSON documents
///
/// Fields are written in a fixed order: the header (`id`, `title`,
/// `description`, `vendor`, `license`, `complete`, `final`), then
/// `prototype`, `bundles`, `framework-properties`, `variables`,
/// `configurations`, `requirements`, `capabilities` and one field per
/// extension. Empty sections are left out.
///
/// Configurations scoped to an artifact of an artifact-list extension are
/// written inside that artifact; all others go to the top-level
/// `configurations` object.
#[derive(Debug, Clone)]
pub struct FeatureJsonWriter {
    config: JsonConfig,
    codec: PropertyCodec,
}

impl Default for FeatureJsonWriter {
    fn default() -> Self {
        Self::new(JsonConfig::default())
    }
}

impl FeatureJsonWriter {
    pub fn new(config: JsonConfig) -> Self {
        let codec = PropertyCodec::new(&config);
        Self { config, codec }
    }

    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Write a feature with its own configurations; the sink stays open
    pub fn write_feature<W: Write + ?Sized>(&self, sink: &mut W, feature: &Feature) -> JsonIoResult<()> {
        self.write_feature_with(sink, feature, &feature.configurations)
    }

    /// Write a feature against an explicit set of visible configurations
    pub fn write_feature_with<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        feature: &Feature,
        configurations: &[Configuration],
    ) -> JsonIoResult<()> {
        let document = FeatureDocument {
            codec: &self.codec,
            feature,
            configurations,
        };
        generate(&self.config, sink, &document)
    }

    pub fn feature_to_string(&self, feature: &Feature) -> JsonIoResult<String> {
        let document = FeatureDocument {
            codec: &self.codec,
            feature,
            configurations: &feature.configurations,
        };
        generate_string(&self.config, &document)
    }
}

struct FeatureDocument<'a> {
    codec: &'a PropertyCodec,
    feature: &'a Feature,
    configurations: &'a [Configuration],
}

impl JsonDocument for FeatureDocument<'_> {
    fn emit<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        let feature = self.feature;
        tracing::debug!("writing feature {}", feature.id());

        generator.begin_object()?;
        self.write_header(generator)?;
        if let Some(prototype) = &feature.prototype {
            write_prototype(generator, prototype)?;
        }
        self.write_bundles(generator)?;
        self.write_framework_properties(generator)?;
        self.write_variables(generator)?;
        self.write_top_level_configurations(generator)?;
        write_clauses(
            generator,
            FEATURE_REQUIREMENTS,
            feature.requirements.iter().map(Requirement::clause),
        )?;
        write_clauses(
            generator,
            FEATURE_CAPABILITIES,
            feature.capabilities.iter().map(Capability::clause),
        )?;
        for extension in &feature.extensions {
            self.write_extension(generator, extension)?;
        }
        generator.end()
    }
}

impl FeatureDocument<'_> {
    fn write_header<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        let feature = self.feature;
        generator.string_field(FEATURE_ID, &feature.id().to_mvn_id())?;
        let optional = [
            (FEATURE_TITLE, &feature.title),
            (FEATURE_DESCRIPTION, &feature.description),
            (FEATURE_VENDOR, &feature.vendor),
            (FEATURE_LICENSE, &feature.license),
        ];
        for (field, value) in optional {
            if let Some(value) = value {
                generator.string_field(field, value)?;
            }
        }
        if feature.complete {
            generator.bool_field(FEATURE_COMPLETE, true)?;
        }
        if feature.final_ {
            generator.bool_field(FEATURE_FINAL, true)?;
        }
        Ok(())
    }

    fn write_bundles<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        if self.feature.bundles.is_empty() {
            return Ok(());
        }
        tracing::trace!("writing {} bundle(s)", self.feature.bundles.len());
        generator.begin_array_field(FEATURE_BUNDLES)?;
        for bundle in &self.feature.bundles {
            let scoped = scoped_configurations(bundle, self.configurations);
            write_artifact(generator, bundle, &scoped, None)?;
        }
        generator.end()
    }

    fn write_framework_properties<W: Write, F: Formatter>(
        &self,
        generator: &mut JsonGenerator<W, F>,
    ) -> JsonIoResult<()> {
        let properties = &self.feature.framework_properties;
        if properties.is_empty() {
            return Ok(());
        }
        generator.begin_object_field(FEATURE_FRAMEWORK_PROPERTIES)?;
        for (key, value) in properties {
            generator.string_field(key, value)?;
        }
        generator.end()
    }

    fn write_variables<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        let variables = &self.feature.variables;
        if variables.is_empty() {
            return Ok(());
        }
        generator.begin_object_field(FEATURE_VARIABLES)?;
        for (key, value) in variables {
            match value {
                Some(value) => generator.string_field(key, value)?,
                None => generator.null_field(key)?,
            }
        }
        generator.end()
    }

    /// Artifacts that nest their scoped configurations
    fn nesting_artifacts(&self) -> impl Iterator<Item = &[Artifact]> + '_ {
        self.feature
            .extensions
            .iter()
            .map(Extension::artifact_list)
            .filter(|artifacts| !artifacts.is_empty())
    }

    fn write_top_level_configurations<W: Write, F: Formatter>(
        &self,
        generator: &mut JsonGenerator<W, F>,
    ) -> JsonIoResult<()> {
        let top_level: Vec<&Configuration> = self
            .configurations
            .iter()
            .filter(|configuration| {
                !self
                    .nesting_artifacts()
                    .any(|artifacts| resolve_artifact(configuration, artifacts).is_some())
            })
            .inspect(|configuration| {
                if let Some(reference) = configuration.artifact_ref()
                    && resolve_artifact(configuration, &self.feature.bundles).is_none()
                {
                    tracing::debug!(
                        "configuration {} names unknown artifact {}, writing it as feature-scoped",
                        configuration.name(),
                        reference
                    );
                }
            })
            .collect();
        write_configurations_field(generator, self.codec, &top_level, Body::All)
    }

    fn write_extension<W: Write, F: Formatter>(
        &self,
        generator: &mut JsonGenerator<W, F>,
        extension: &Extension,
    ) -> JsonIoResult<()> {
        let key = extension.key();
        tracing::trace!("writing extension {}", key);
        match extension.content() {
            ExtensionContent::Json(value) => generator.value_field(&key, value),
            ExtensionContent::Text(text) => {
                generator.begin_array_field(&key)?;
                for line in text.split('\n') {
                    generator.string(line)?;
                }
                generator.end()
            }
            ExtensionContent::Artifacts(artifacts) => {
                generator.begin_array_field(&key)?;
                for artifact in artifacts {
                    let scoped = scoped_configurations(artifact, self.configurations);
                    write_artifact(generator, artifact, &scoped, Some(self.codec))?;
                }
                generator.end()
            }
        }
    }
}
