//! Property codec: typed values to tagged JSON and back

use crate::report::{Decoded, Report, child_location};
use crate::tag::{TypeTag, join_key, split_key};
use featurejson_core::{JsonConfig, Kind, Properties, Scalar, Shape, TypedValue, Values};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Errors that can occur while decoding one property
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("unknown type tag: {0}")]
    UnknownTypeTag(String),

    #[error("expected {expected}, found {found}")]
    ValueMismatch { expected: String, found: String },

    #[error("value {value} out of range for {kind}")]
    OutOfRange { kind: Kind, value: String },

    #[error("character value must be exactly one character, got {0:?}")]
    InvalidCharacter(String),

    #[error("null is not a valid property value")]
    NullValue,

    #[error("untyped array mixes element types")]
    MixedArray,

    #[error("nested arrays and objects are not valid property values")]
    Unsupported,

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        source: Box<CodecError>,
    },
}

impl CodecError {
    fn mismatch(expected: impl Into<String>, found: &Value) -> Self {
        CodecError::ValueMismatch {
            expected: expected.into(),
            found: json_type_name(found).to_string(),
        }
    }

    fn out_of_range(kind: Kind, value: impl ToString) -> Self {
        CodecError::OutOfRange {
            kind,
            value: value.to_string(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "fraction",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Encodes and decodes configuration properties
///
/// A property is written under `name` when the decoder would infer its kind
/// and shape from the bare JSON value, and under `name:TAG` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyCodec {
    integral_kind: Kind,
    fractional_kind: Kind,
}

impl Default for PropertyCodec {
    fn default() -> Self {
        Self {
            integral_kind: Kind::Long,
            fractional_kind: Kind::Double,
        }
    }
}

impl PropertyCodec {
    /// Create a codec using the default kinds of a configuration
    ///
    /// Kinds that are not integral / fractional fall back to Long / Double;
    /// use [`JsonConfig::validate`] to reject them up front.
    pub fn new(config: &JsonConfig) -> Self {
        let defaults = Self::default();
        Self {
            integral_kind: if config.default_integral_kind.is_integral() {
                config.default_integral_kind
            } else {
                defaults.integral_kind
            },
            fractional_kind: if config.default_fractional_kind.is_fractional() {
                config.default_fractional_kind
            } else {
                defaults.fractional_kind
            },
        }
    }

    pub fn integral_kind(&self) -> Kind {
        self.integral_kind
    }

    pub fn fractional_kind(&self) -> Kind {
        self.fractional_kind
    }

    /// Encode one property into its wire key and JSON value
    pub fn encode(&self, name: &str, value: &TypedValue) -> (String, Value) {
        let tag = self.needs_tag(name, value).then(|| TypeTag::of(value));
        (join_key(name, tag), encode_payload(value))
    }

    /// Encode a set of properties into a JSON object
    pub fn encode_properties<'a, I>(&self, properties: I) -> Map<String, Value>
    where
        I: IntoIterator<Item = (&'a String, &'a TypedValue)>,
    {
        properties
            .into_iter()
            .map(|(name, value)| self.encode(name, value))
            .collect()
    }

    fn needs_tag(&self, name: &str, value: &TypedValue) -> bool {
        if name.contains(':') {
            return true;
        }
        match value {
            TypedValue::Scalar(Scalar::String(_) | Scalar::Boolean(_)) => false,
            TypedValue::Scalar(Scalar::Float(f)) => {
                !(self.fractional_kind == Kind::Float && f.is_finite())
            }
            TypedValue::Scalar(Scalar::Double(d)) => {
                !(self.fractional_kind == Kind::Double && d.is_finite())
            }
            TypedValue::Scalar(scalar) => scalar.kind() != self.integral_kind,
            TypedValue::Array(Values::String(values)) => values.is_empty(),
            _ => true,
        }
    }

    /// Decode one property from its wire key and JSON value
    pub fn decode(&self, wire_key: &str, value: &Value) -> Result<(String, TypedValue), CodecError> {
        let (name, tag_text) = split_key(wire_key);
        let typed = match tag_text {
            Some(text) => {
                let tag = TypeTag::parse(text)
                    .ok_or_else(|| CodecError::UnknownTypeTag(text.to_string()))?;
                self.decode_tagged(tag, value)?
            }
            None => self.decode_untagged(value)?,
        };
        Ok((name.to_string(), typed))
    }

    /// Decode every property of a JSON object, collecting diagnostics
    ///
    /// Properties that fail to decode are left out of the result and reported
    /// as errors under `location/key`.
    pub fn decode_properties(&self, location: &str, object: &Map<String, Value>) -> Decoded<Properties> {
        let mut report = Report::new();
        let mut properties = Properties::new();
        for (wire_key, value) in object {
            let here = child_location(location, wire_key);
            match self.decode(wire_key, value) {
                Ok((name, typed)) => {
                    if properties.insert(name.clone(), typed).is_some() {
                        report.warning(
                            here,
                            format!("duplicate property '{name}', keeping the last value"),
                        );
                    }
                }
                Err(err) => report.error(here, err),
            }
        }
        tracing::debug!(
            "decoded {} properties at {} ({} errors)",
            properties.len(),
            location,
            report.errors.len()
        );
        Decoded::new(properties, report)
    }

    /// Like [`PropertyCodec::decode_properties`] for any JSON value
    ///
    /// A value that is not an object is reported and yields no properties.
    pub fn decode_properties_value(&self, location: &str, value: &Value) -> Decoded<Properties> {
        match value {
            Value::Object(object) => self.decode_properties(location, object),
            other => {
                let mut report = Report::new();
                report.error(location, CodecError::mismatch("object", other));
                Decoded::new(Properties::new(), report)
            }
        }
    }

    fn decode_tagged(&self, tag: TypeTag, value: &Value) -> Result<TypedValue, CodecError> {
        match tag.shape {
            Shape::Scalar => {
                let kind = tag
                    .kind
                    .ok_or_else(|| CodecError::UnknownTypeTag(tag.to_string()))?;
                Ok(TypedValue::Scalar(decode_scalar(kind, value)?))
            }
            shape => {
                let Value::Array(items) = value else {
                    return Err(CodecError::mismatch(format!("array for {tag}"), value));
                };
                let kind = match tag.kind {
                    Some(kind) => kind,
                    None => self.infer_element_kind(items)?,
                };
                let values = decode_values(kind, items)?;
                Ok(match shape {
                    Shape::Array => TypedValue::Array(values),
                    _ => TypedValue::List(values),
                })
            }
        }
    }

    fn decode_untagged(&self, value: &Value) -> Result<TypedValue, CodecError> {
        match value {
            Value::String(s) => Ok(TypedValue::Scalar(Scalar::String(s.clone()))),
            Value::Bool(b) => Ok(TypedValue::Scalar(Scalar::Boolean(*b))),
            Value::Number(n) => Ok(TypedValue::Scalar(decode_scalar(
                self.number_kind(n),
                value,
            )?)),
            Value::Array(items) => {
                let kind = self.infer_element_kind(items)?;
                Ok(TypedValue::Array(decode_values(kind, items)?))
            }
            Value::Null => Err(CodecError::NullValue),
            Value::Object(_) => Err(CodecError::Unsupported),
        }
    }

    fn number_kind(&self, number: &Number) -> Kind {
        if number.is_f64() {
            self.fractional_kind
        } else {
            self.integral_kind
        }
    }

    /// Element kind of an untyped array; empty arrays are String arrays
    fn infer_element_kind(&self, items: &[Value]) -> Result<Kind, CodecError> {
        let mut kind: Option<Kind> = None;
        for item in items {
            let item_kind = match item {
                Value::String(_) => Kind::String,
                Value::Bool(_) => Kind::Boolean,
                Value::Number(n) => self.number_kind(n),
                Value::Null => return Err(CodecError::NullValue),
                Value::Array(_) | Value::Object(_) => return Err(CodecError::Unsupported),
            };
            kind = match kind {
                None => Some(item_kind),
                Some(current) if current == item_kind => Some(current),
                // integers mixed with fractions widen to the fractional kind
                Some(current)
                    if (current.is_integral() && item_kind.is_fractional())
                        || (current.is_fractional() && item_kind.is_integral()) =>
                {
                    Some(self.fractional_kind)
                }
                Some(_) => return Err(CodecError::MixedArray),
            };
        }
        Ok(kind.unwrap_or(Kind::String))
    }
}

fn encode_payload(value: &TypedValue) -> Value {
    match value {
        TypedValue::Scalar(scalar) => encode_scalar(scalar),
        TypedValue::Array(values) | TypedValue::List(values) => {
            Value::Array(values.iter().map(|s| encode_scalar(&s)).collect())
        }
    }
}

/// JSON payload of a single value, without any tag
pub fn encode_scalar(scalar: &Scalar) -> Value {
    match scalar {
        Scalar::Integer(v) => Value::from(*v),
        Scalar::Long(v) => Value::from(*v),
        Scalar::Byte(v) => Value::from(*v),
        Scalar::Short(v) => Value::from(*v),
        Scalar::Boolean(v) => Value::Bool(*v),
        Scalar::Float(v) => encode_fraction(widen_f32(*v)),
        Scalar::Double(v) => encode_fraction(*v),
        Scalar::Character(c) => Value::String(c.to_string()),
        Scalar::String(s) => Value::String(s.clone()),
    }
}

/// Shortest decimal of an f32, as the f64 with that decimal
///
/// Writing `f64::from(v)` would print digits that only exist in the widened
/// value; the shortest f32 decimal parses back to the same f32.
fn widen_f32(v: f32) -> f64 {
    v.to_string().parse::<f64>().unwrap_or(f64::from(v))
}

fn encode_fraction(v: f64) -> Value {
    match Number::from_f64(v) {
        Some(number) => Value::Number(number),
        None => Value::String(non_finite_name(v).to_string()),
    }
}

fn non_finite_name(v: f64) -> &'static str {
    if v.is_nan() {
        "NaN"
    } else if v > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}

/// Decode a single JSON value as the given kind
pub fn decode_scalar(kind: Kind, value: &Value) -> Result<Scalar, CodecError> {
    match kind {
        Kind::Integer => {
            let v = integral(kind, value)?;
            i32::try_from(v)
                .map(Scalar::Integer)
                .map_err(|_| CodecError::out_of_range(kind, v))
        }
        Kind::Long => integral(kind, value).map(Scalar::Long),
        Kind::Byte => {
            let v = integral(kind, value)?;
            i8::try_from(v)
                .map(Scalar::Byte)
                .map_err(|_| CodecError::out_of_range(kind, v))
        }
        Kind::Short => {
            let v = integral(kind, value)?;
            i16::try_from(v)
                .map(Scalar::Short)
                .map_err(|_| CodecError::out_of_range(kind, v))
        }
        Kind::Float => {
            let v = fractional(kind, value)?;
            let narrowed = v as f32;
            if v.is_finite() && narrowed.is_infinite() {
                return Err(CodecError::out_of_range(kind, v));
            }
            Ok(Scalar::Float(narrowed))
        }
        Kind::Double => fractional(kind, value).map(Scalar::Double),
        Kind::Boolean => match value {
            Value::Bool(b) => Ok(Scalar::Boolean(*b)),
            Value::String(s) if s == "true" => Ok(Scalar::Boolean(true)),
            Value::String(s) if s == "false" => Ok(Scalar::Boolean(false)),
            other => Err(CodecError::mismatch("boolean", other)),
        },
        Kind::Character => match value {
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Scalar::Character(c)),
                    _ => Err(CodecError::InvalidCharacter(s.clone())),
                }
            }
            other => Err(CodecError::mismatch("one-character string", other)),
        },
        Kind::String => match value {
            Value::String(s) => Ok(Scalar::String(s.clone())),
            other => Err(CodecError::mismatch("string", other)),
        },
    }
}

fn integral(kind: Kind, value: &Value) -> Result<i64, CodecError> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(v),
            None if n.is_u64() => Err(CodecError::out_of_range(kind, n)),
            None => Err(CodecError::mismatch("integer", value)),
        },
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| CodecError::mismatch("integer", value)),
        other => Err(CodecError::mismatch("integer", other)),
    }
}

fn fractional(kind: Kind, value: &Value) -> Result<f64, CodecError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| CodecError::out_of_range(kind, n)),
        Value::String(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CodecError::mismatch("number", value)),
        },
        other => Err(CodecError::mismatch("number", other)),
    }
}

fn decode_values(kind: Kind, items: &[Value]) -> Result<Values, CodecError> {
    let mut values = Values::empty(kind);
    for (index, item) in items.iter().enumerate() {
        let element = |source: CodecError| CodecError::Element {
            index,
            source: Box::new(source),
        };
        let scalar = decode_scalar(kind, item).map_err(element)?;
        values
            .push(scalar)
            .map_err(|_| element(CodecError::mismatch(kind.as_str(), item)))?;
    }
    Ok(values)
}


#[cfg(test)]
#[path = "codec/codec_parameterized_tests.rs"]
mod codec_parameterized_tests;
