//! Prototype diff: base feature id plus removals

use crate::artifact::{read_id_list, read_string_list};
use crate::constants::{
    ARTIFACT_ID, FEATURE_BUNDLES, FEATURE_CAPABILITIES, FEATURE_CONFIGURATIONS,
    FEATURE_FRAMEWORK_PROPERTIES, FEATURE_PROTOTYPE, FEATURE_REQUIREMENTS,
    PROTOTYPE_EXTENSION_REMOVALS, PROTOTYPE_REMOVALS,
};
use crate::error::{JsonIoError, JsonIoResult};
use crate::generator::JsonGenerator;
use crate::reqcap::{read_capabilities, read_requirements, write_clauses};
use featurejson_core::{ArtifactId, Capability, Prototype, Requirement};
use serde_json::Value;
use serde_json::ser::Formatter;
use std::fmt::Display;
use std::io::Write;

/// Write a `field` array of the string forms of `values`; nothing when empty
pub fn write_list<W, F, T>(
    generator: &mut JsonGenerator<W, F>,
    field: &str,
    values: &[T],
) -> JsonIoResult<()>
where
    W: Write,
    F: Formatter,
    T: Display,
{
    if values.is_empty() {
        return Ok(());
    }
    generator.begin_array_field(field)?;
    for value in values {
        generator.string(&value.to_string())?;
    }
    generator.end()
}

/// Write the `prototype` field
///
/// A prototype that removes nothing is written as its bare id.
pub fn write_prototype<W: Write, F: Formatter>(
    generator: &mut JsonGenerator<W, F>,
    prototype: &Prototype,
) -> JsonIoResult<()> {
    let id = prototype.id().to_mvn_id();
    if prototype.has_no_removals() {
        return generator.string_field(FEATURE_PROTOTYPE, &id);
    }
    generator.begin_object_field(FEATURE_PROTOTYPE)?;
    generator.string_field(ARTIFACT_ID, &id)?;
    generator.begin_object_field(PROTOTYPE_REMOVALS)?;

    if prototype.has_extension_removals() {
        generator.begin_array_field(PROTOTYPE_EXTENSION_REMOVALS)?;
        for name in &prototype.extension_removals {
            generator.string(name)?;
        }
        for (name, ids) in &prototype.artifact_extension_removals {
            generator.begin_object()?;
            generator.begin_array_field(name)?;
            for id in ids {
                generator.string(&id.to_mvn_id())?;
            }
            generator.end()?;
            generator.end()?;
        }
        generator.end()?;
    }
    write_list(generator, FEATURE_CONFIGURATIONS, &prototype.configuration_removals)?;
    write_list(generator, FEATURE_BUNDLES, &prototype.bundle_removals)?;
    write_list(
        generator,
        FEATURE_FRAMEWORK_PROPERTIES,
        &prototype.framework_properties_removals,
    )?;
    write_clauses(
        generator,
        FEATURE_REQUIREMENTS,
        prototype.requirement_removals.iter().map(Requirement::clause),
    )?;
    write_clauses(
        generator,
        FEATURE_CAPABILITIES,
        prototype.capability_removals.iter().map(Capability::clause),
    )?;

    generator.end()?;
    generator.end()
}

/// Read the `prototype` field in string or object form
pub fn read_prototype(location: &str, value: &Value) -> JsonIoResult<Prototype> {
    let object = match value {
        Value::String(id) => return Ok(Prototype::new(ArtifactId::parse(id)?)),
        Value::Object(object) => object,
        _ => return Err(JsonIoError::invalid(location, "expected an id or object")),
    };
    let id = match object.get(ARTIFACT_ID) {
        Some(Value::String(id)) => ArtifactId::parse(id)?,
        _ => return Err(JsonIoError::invalid(location, "missing or non-string id")),
    };
    let mut prototype = Prototype::new(id);
    let Some(removals) = object.get(PROTOTYPE_REMOVALS) else {
        return Ok(prototype);
    };
    let base = format!("{location}/{PROTOTYPE_REMOVALS}");
    let Value::Object(removals) = removals else {
        return Err(JsonIoError::invalid(base, "expected an object"));
    };
    for (key, value) in removals {
        let here = format!("{base}/{key}");
        match key.as_str() {
            PROTOTYPE_EXTENSION_REMOVALS => read_extension_removals(&here, value, &mut prototype)?,
            FEATURE_CONFIGURATIONS => prototype.configuration_removals = read_string_list(&here, value)?,
            FEATURE_BUNDLES => prototype.bundle_removals = read_id_list(&here, value)?,
            FEATURE_FRAMEWORK_PROPERTIES => {
                prototype.framework_properties_removals = read_string_list(&here, value)?
            }
            FEATURE_REQUIREMENTS => prototype.requirement_removals = read_requirements(&here, value)?,
            FEATURE_CAPABILITIES => prototype.capability_removals = read_capabilities(&here, value)?,
            other => {
                return Err(JsonIoError::invalid(
                    here,
                    format!("unknown removal category '{other}'"),
                ));
            }
        }
    }
    Ok(prototype)
}

fn read_extension_removals(location: &str, value: &Value, prototype: &mut Prototype) -> JsonIoResult<()> {
    let Value::Array(items) = value else {
        return Err(JsonIoError::invalid(location, "expected an array"));
    };
    for (index, item) in items.iter().enumerate() {
        let here = format!("{location}/{index}");
        match item {
            Value::String(name) => prototype.extension_removals.push(name.clone()),
            Value::Object(entries) => {
                for (name, ids) in entries {
                    let ids = read_id_list(&format!("{here}/{name}"), ids)?;
                    prototype
                        .artifact_extension_removals
                        .entry(name.clone())
                        .or_default()
                        .extend(ids);
                }
            }
            _ => {
                return Err(JsonIoError::invalid(
                    here,
                    "expected an extension name or object",
                ));
            }
        }
    }
    Ok(())
}
