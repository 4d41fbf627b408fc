//! Marshaling of requirement and capability clauses
//!
//! ```text
//! { "namespace": "osgi.wiring.package",
//!   "attributes": { "name": "a.b", "size:Long": 3, "version:Version": "1.2.0",
//!                   "alts:List<String>": ["x", "y"] },
//!   "directives": { "filter": "(x=y)" } }
//! ```
//!
//! String attributes are untagged; all other types carry their type name
//! after the last `:` of the key. Directives are always plain strings.

use crate::constants::{REQCAP_ATTRIBUTES, REQCAP_DIRECTIVES, REQCAP_NAMESPACE};
use crate::error::{JsonIoError, JsonIoResult};
use crate::generator::JsonGenerator;
use featurejson_core::{AttributeValue, Capability, Clause, Requirement, Version};
use serde_json::ser::Formatter;
use serde_json::{Map, Number, Value};
use std::io::Write;

/// Wire key and JSON value of one attribute
pub fn encode_attribute(key: &str, value: &AttributeValue) -> (String, Value) {
    // keys containing ':' need a tag to survive the split on the last ':'
    let type_name = value
        .type_name()
        .or_else(|| key.contains(':').then_some("String"));
    let wire_key = match type_name {
        Some(type_name) => format!("{key}:{type_name}"),
        None => key.to_string(),
    };
    let json = match value {
        AttributeValue::String(s) => Value::String(s.clone()),
        AttributeValue::Long(v) => Value::from(*v),
        AttributeValue::Double(v) => double(*v),
        AttributeValue::Version(v) => Value::String(v.to_string()),
        AttributeValue::StringList(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::LongList(values) => Value::Array(values.iter().copied().map(Value::from).collect()),
        AttributeValue::DoubleList(values) => Value::Array(values.iter().copied().map(double).collect()),
        AttributeValue::VersionList(values) => {
            Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect())
        }
    };
    (wire_key, json)
}

fn double(v: f64) -> Value {
    Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(v.to_string()))
}

/// Parse one attribute from its wire key and JSON value
pub fn decode_attribute(location: &str, wire_key: &str, value: &Value) -> JsonIoResult<(String, AttributeValue)> {
    let (key, type_name) = match wire_key.rsplit_once(':') {
        Some((key, type_name)) => (key, Some(type_name)),
        None => (wire_key, None),
    };
    let here = format!("{location}/{wire_key}");
    let attribute = match type_name {
        None | Some("String") => AttributeValue::String(string(&here, value)?),
        Some("Long") => AttributeValue::Long(long(&here, value)?),
        Some("Double") => AttributeValue::Double(float(&here, value)?),
        Some("Version") => AttributeValue::Version(Version::parse(&string(&here, value)?)?),
        Some("List<String>") => {
            AttributeValue::StringList(list(&here, value, |item| string(&here, item))?)
        }
        Some("List<Long>") => AttributeValue::LongList(list(&here, value, |item| long(&here, item))?),
        Some("List<Double>") => {
            AttributeValue::DoubleList(list(&here, value, |item| float(&here, item))?)
        }
        Some("List<Version>") => AttributeValue::VersionList(list(&here, value, |item| {
            Ok(Version::parse(&string(&here, item)?)?)
        })?),
        Some(other) => {
            return Err(JsonIoError::invalid(
                here,
                format!("unknown attribute type '{other}'"),
            ));
        }
    };
    Ok((key.to_string(), attribute))
}

fn string(location: &str, value: &Value) -> JsonIoResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(JsonIoError::invalid(location, "expected a string")),
    }
}

fn long(location: &str, value: &Value) -> JsonIoResult<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| JsonIoError::invalid(location, "expected a 64-bit integer")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| JsonIoError::invalid(location, "expected a 64-bit integer")),
        _ => Err(JsonIoError::invalid(location, "expected a 64-bit integer")),
    }
}

fn float(location: &str, value: &Value) -> JsonIoResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| JsonIoError::invalid(location, "expected a number")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| JsonIoError::invalid(location, "expected a number")),
        _ => Err(JsonIoError::invalid(location, "expected a number")),
    }
}

fn list<T>(
    location: &str,
    value: &Value,
    element: impl Fn(&Value) -> JsonIoResult<T>,
) -> JsonIoResult<Vec<T>> {
    match value {
        Value::Array(items) => items.iter().map(element).collect(),
        _ => Err(JsonIoError::invalid(location, "expected an array")),
    }
}

fn write_clause<W: Write, F: Formatter>(
    generator: &mut JsonGenerator<W, F>,
    clause: &Clause,
) -> JsonIoResult<()> {
    generator.begin_object()?;
    generator.string_field(REQCAP_NAMESPACE, clause.namespace())?;
    if !clause.attributes().is_empty() {
        generator.begin_object_field(REQCAP_ATTRIBUTES)?;
        for (key, value) in clause.attributes() {
            let (wire_key, json) = encode_attribute(key, value);
            generator.value_field(&wire_key, &json)?;
        }
        generator.end()?;
    }
    if !clause.directives().is_empty() {
        generator.begin_object_field(REQCAP_DIRECTIVES)?;
        for (key, value) in clause.directives() {
            generator.string_field(key, value)?;
        }
        generator.end()?;
    }
    generator.end()
}

/// Write a `field` array of clauses; nothing when there are none
pub fn write_clauses<'a, W, F, I>(
    generator: &mut JsonGenerator<W, F>,
    field: &str,
    clauses: I,
) -> JsonIoResult<()>
where
    W: Write,
    F: Formatter,
    I: IntoIterator<Item = &'a Clause>,
{
    let mut clauses = clauses.into_iter().peekable();
    if clauses.peek().is_none() {
        return Ok(());
    }
    generator.begin_array_field(field)?;
    for clause in clauses {
        write_clause(generator, clause)?;
    }
    generator.end()
}

/// Namespace, attributes and directives read from one clause object
struct ClauseParts {
    namespace: String,
    attributes: Vec<(String, AttributeValue)>,
    directives: Vec<(String, String)>,
}

fn read_clause(location: &str, value: &Value) -> JsonIoResult<ClauseParts> {
    let Value::Object(object) = value else {
        return Err(JsonIoError::invalid(location, "expected an object"));
    };
    let namespace = match object.get(REQCAP_NAMESPACE) {
        Some(Value::String(ns)) => ns.clone(),
        _ => {
            return Err(JsonIoError::invalid(
                location,
                "missing or non-string namespace",
            ));
        }
    };
    let attributes = match object.get(REQCAP_ATTRIBUTES) {
        Some(attributes) => {
            let here = format!("{location}/{REQCAP_ATTRIBUTES}");
            as_object(&here, attributes)?
                .iter()
                .map(|(key, value)| decode_attribute(&here, key, value))
                .collect::<JsonIoResult<Vec<_>>>()?
        }
        None => Vec::new(),
    };
    let directives = match object.get(REQCAP_DIRECTIVES) {
        Some(directives) => {
            let here = format!("{location}/{REQCAP_DIRECTIVES}");
            as_object(&here, directives)?
                .iter()
                .map(|(key, value)| Ok((key.clone(), string(&format!("{here}/{key}"), value)?)))
                .collect::<JsonIoResult<Vec<_>>>()?
        }
        None => Vec::new(),
    };
    Ok(ClauseParts {
        namespace,
        attributes,
        directives,
    })
}

fn as_object<'v>(location: &str, value: &'v Value) -> JsonIoResult<&'v Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| JsonIoError::invalid(location, "expected an object"))
}

fn read_array<T>(
    location: &str,
    value: &Value,
    build: impl Fn(ClauseParts) -> T,
) -> JsonIoResult<Vec<T>> {
    let Value::Array(items) = value else {
        return Err(JsonIoError::invalid(location, "expected an array"));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| read_clause(&format!("{location}/{index}"), item).map(&build))
        .collect()
}

/// Parse a JSON array of requirement objects
pub fn read_requirements(location: &str, value: &Value) -> JsonIoResult<Vec<Requirement>> {
    read_array(location, value, |parts| {
        let requirement = parts
            .attributes
            .into_iter()
            .fold(Requirement::new(parts.namespace), |r, (k, v)| r.with_attribute(k, v));
        parts
            .directives
            .into_iter()
            .fold(requirement, |r, (k, v)| r.with_directive(k, v))
    })
}

/// Parse a JSON array of capability objects
pub fn read_capabilities(location: &str, value: &Value) -> JsonIoResult<Vec<Capability>> {
    read_array(location, value, |parts| {
        let capability = parts
            .attributes
            .into_iter()
            .fold(Capability::new(parts.namespace), |c, (k, v)| c.with_attribute(k, v));
        parts
            .directives
            .into_iter()
            .fold(capability, |c, (k, v)| c.with_directive(k, v))
    })
}

#[cfg(test)]
#[path = "reqcap/reqcap_tests.rs"]
mod reqcap_tests;
