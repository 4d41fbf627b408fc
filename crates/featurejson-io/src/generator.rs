//! Streaming JSON generator with nested object and array scopes

use crate::error::{JsonIoError, JsonIoResult};
use crate::shield::CloseShield;
use featurejson_core::{JsonConfig, MAX_INDENT};
use serde_json::Value;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use std::io::Write;

const SPACES: [u8; MAX_INDENT] = [b' '; MAX_INDENT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
    Object,
    Array,
}

#[derive(Debug)]
struct Scope {
    kind: ScopeKind,
    first: bool,
}

/// Writes one JSON document scope by scope
///
/// Values inside an object are written with a key (`*_field` methods),
/// values inside an array and the root value without one. Every `begin_*`
/// must be matched by [`JsonGenerator::end`] before [`JsonGenerator::finish`].
pub struct JsonGenerator<W: Write, F: Formatter> {
    writer: W,
    formatter: F,
    scopes: Vec<Scope>,
    root_written: bool,
}

impl<W: Write> JsonGenerator<W, PrettyFormatter<'static>> {
    /// Pretty-printing generator; `indent` is capped at [`MAX_INDENT`]
    pub fn pretty(writer: W, indent: usize) -> Self {
        let indent = &SPACES[..indent.min(MAX_INDENT)];
        Self::with_formatter(writer, PrettyFormatter::with_indent(indent))
    }
}

impl<W: Write> JsonGenerator<W, CompactFormatter> {
    pub fn compact(writer: W) -> Self {
        Self::with_formatter(writer, CompactFormatter)
    }
}

impl<W: Write, F: Formatter> JsonGenerator<W, F> {
    pub fn with_formatter(writer: W, formatter: F) -> Self {
        Self {
            writer,
            formatter,
            scopes: Vec::new(),
            root_written: false,
        }
    }

    /// Nesting depth of open scopes
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn begin_object(&mut self) -> JsonIoResult<()> {
        self.open(None, ScopeKind::Object)
    }

    pub fn begin_object_field(&mut self, key: &str) -> JsonIoResult<()> {
        self.open(Some(key), ScopeKind::Object)
    }

    pub fn begin_array(&mut self) -> JsonIoResult<()> {
        self.open(None, ScopeKind::Array)
    }

    pub fn begin_array_field(&mut self, key: &str) -> JsonIoResult<()> {
        self.open(Some(key), ScopeKind::Array)
    }

    /// Close the innermost scope
    pub fn end(&mut self) -> JsonIoResult<()> {
        let scope = self
            .scopes
            .pop()
            .ok_or_else(|| JsonIoError::Generator("end without an open scope".to_string()))?;
        match scope.kind {
            ScopeKind::Object => self.formatter.end_object(&mut self.writer)?,
            ScopeKind::Array => self.formatter.end_array(&mut self.writer)?,
        }
        self.end_value()
    }

    pub fn string(&mut self, value: &str) -> JsonIoResult<()> {
        self.leaf(None, &Leaf::Str(value))
    }

    pub fn string_field(&mut self, key: &str, value: &str) -> JsonIoResult<()> {
        self.leaf(Some(key), &Leaf::Str(value))
    }

    pub fn bool_field(&mut self, key: &str, value: bool) -> JsonIoResult<()> {
        self.leaf(Some(key), &Leaf::Bool(value))
    }

    pub fn null_field(&mut self, key: &str) -> JsonIoResult<()> {
        self.leaf(Some(key), &Leaf::Null)
    }

    /// Embed a JSON value as an array element or the root
    pub fn value(&mut self, value: &Value) -> JsonIoResult<()> {
        self.embed(None, value)
    }

    /// Embed a JSON value under a key
    pub fn value_field(&mut self, key: &str, value: &Value) -> JsonIoResult<()> {
        self.embed(Some(key), value)
    }

    /// Check that the document is complete, flush, and hand back the writer
    pub fn finish(mut self) -> JsonIoResult<W> {
        if !self.scopes.is_empty() {
            return Err(JsonIoError::Generator(format!(
                "{} scope(s) left open",
                self.scopes.len()
            )));
        }
        if !self.root_written {
            return Err(JsonIoError::Generator("no value written".to_string()));
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn embed(&mut self, key: Option<&str>, value: &Value) -> JsonIoResult<()> {
        match value {
            Value::Array(items) => {
                self.open(key, ScopeKind::Array)?;
                for item in items {
                    self.embed(None, item)?;
                }
                self.end()
            }
            Value::Object(fields) => {
                self.open(key, ScopeKind::Object)?;
                for (field, item) in fields {
                    self.embed(Some(field), item)?;
                }
                self.end()
            }
            Value::Null => self.leaf(key, &Leaf::Null),
            Value::Bool(b) => self.leaf(key, &Leaf::Bool(*b)),
            Value::Number(n) => {
                let leaf = if let Some(i) = n.as_i64() {
                    Leaf::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Leaf::U64(u)
                } else {
                    // numbers from serde_json are always finite
                    Leaf::F64(n.as_f64().unwrap_or_default())
                };
                self.leaf(key, &leaf)
            }
            Value::String(s) => self.leaf(key, &Leaf::Str(s)),
        }
    }

    fn open(&mut self, key: Option<&str>, kind: ScopeKind) -> JsonIoResult<()> {
        self.begin_value(key)?;
        match kind {
            ScopeKind::Object => self.formatter.begin_object(&mut self.writer)?,
            ScopeKind::Array => self.formatter.begin_array(&mut self.writer)?,
        }
        self.scopes.push(Scope { kind, first: true });
        Ok(())
    }

    fn leaf(&mut self, key: Option<&str>, leaf: &Leaf<'_>) -> JsonIoResult<()> {
        self.begin_value(key)?;
        match leaf {
            Leaf::Null => self.formatter.write_null(&mut self.writer)?,
            Leaf::Bool(b) => self.formatter.write_bool(&mut self.writer, *b)?,
            Leaf::I64(i) => self.formatter.write_i64(&mut self.writer, *i)?,
            Leaf::U64(u) => self.formatter.write_u64(&mut self.writer, *u)?,
            Leaf::F64(f) => self.formatter.write_f64(&mut self.writer, *f)?,
            Leaf::Str(s) => self.write_escaped(s)?,
        }
        self.end_value()
    }

    fn write_escaped(&mut self, s: &str) -> JsonIoResult<()> {
        serde_json::to_writer(&mut self.writer, s).map_err(JsonIoError::from_serde)
    }

    /// Emit the separator and key that precede a value in the current scope
    fn begin_value(&mut self, key: Option<&str>) -> JsonIoResult<()> {
        let Some(scope) = self.scopes.last_mut() else {
            if let Some(key) = key {
                return Err(JsonIoError::Generator(format!(
                    "field '{key}' outside an object"
                )));
            }
            if self.root_written {
                return Err(JsonIoError::Generator(
                    "document already has a root value".to_string(),
                ));
            }
            self.root_written = true;
            return Ok(());
        };
        let first = scope.first;
        match (scope.kind, key) {
            (ScopeKind::Object, Some(key)) => {
                scope.first = false;
                self.formatter.begin_object_key(&mut self.writer, first)?;
                serde_json::to_writer(&mut self.writer, key).map_err(JsonIoError::from_serde)?;
                self.formatter.end_object_key(&mut self.writer)?;
                self.formatter.begin_object_value(&mut self.writer)?;
            }
            (ScopeKind::Array, None) => {
                scope.first = false;
                self.formatter.begin_array_value(&mut self.writer, first)?;
            }
            (ScopeKind::Object, None) => {
                return Err(JsonIoError::Generator(
                    "value without a key inside an object".to_string(),
                ));
            }
            (ScopeKind::Array, Some(key)) => {
                return Err(JsonIoError::Generator(format!(
                    "field '{key}' inside an array"
                )));
            }
        }
        Ok(())
    }

    fn end_value(&mut self) -> JsonIoResult<()> {
        match self.scopes.last().map(|scope| scope.kind) {
            Some(ScopeKind::Object) => self.formatter.end_object_value(&mut self.writer)?,
            Some(ScopeKind::Array) => self.formatter.end_array_value(&mut self.writer)?,
            None => {}
        }
        Ok(())
    }
}

enum Leaf<'a> {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(&'a str),
}

/// A document that can be written to any generator
pub trait JsonDocument {
    fn emit<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()>;
}

/// Write a document to a borrowed sink, formatted as the configuration says
///
/// The sink is wrapped in a [`CloseShield`] and stays usable afterwards.
pub fn generate<W, D>(config: &JsonConfig, sink: &mut W, document: &D) -> JsonIoResult<()>
where
    W: Write + ?Sized,
    D: JsonDocument,
{
    let shield = CloseShield::new(sink);
    if config.pretty {
        let mut generator = JsonGenerator::pretty(shield, config.indent);
        document.emit(&mut generator)?;
        generator.finish()?;
    } else {
        let mut generator = JsonGenerator::compact(shield);
        document.emit(&mut generator)?;
        generator.finish()?;
    }
    Ok(())
}

/// Write a document to a new string
pub fn generate_string<D>(config: &JsonConfig, document: &D) -> JsonIoResult<String>
where
    D: JsonDocument,
{
    let mut buffer = Vec::new();
    generate(config, &mut buffer, document)?;
    String::from_utf8(buffer).map_err(|err| JsonIoError::Generator(err.to_string()))
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
