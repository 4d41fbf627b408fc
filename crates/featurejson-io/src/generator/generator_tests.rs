#![allow(non_snake_case)]

use super::*;
use serde_json::json;

fn compact() -> JsonGenerator<Vec<u8>, CompactFormatter> {
    JsonGenerator::compact(Vec::new())
}

fn text(generator: JsonGenerator<Vec<u8>, impl Formatter>) -> String {
    String::from_utf8(generator.finish().unwrap()).unwrap()
}

#[test]
fn JsonGenerator___nested_scopes___writes_valid_json() {
    let mut generator = compact();

    generator.begin_object().unwrap();
    generator.string_field("id", "g:a:1").unwrap();
    generator.begin_array_field("bundles").unwrap();
    generator.string("g:b:1").unwrap();
    generator.begin_object().unwrap();
    generator.null_field("x").unwrap();
    generator.end().unwrap();
    generator.end().unwrap();
    generator.bool_field("final", true).unwrap();
    generator.end().unwrap();

    assert_eq!(
        text(generator),
        r#"{"id":"g:a:1","bundles":["g:b:1",{"x":null}],"final":true}"#
    );
}

#[test]
fn JsonGenerator___pretty___indents_by_configured_width() {
    let mut generator = JsonGenerator::pretty(Vec::new(), 2);

    generator.begin_object().unwrap();
    generator.begin_array_field("a").unwrap();
    generator.string("x").unwrap();
    generator.end().unwrap();
    generator.end().unwrap();

    assert_eq!(text(generator), "{\n  \"a\": [\n    \"x\"\n  ]\n}");
}

#[test]
fn JsonGenerator___pretty___empty_scopes_stay_on_one_line() {
    let mut generator = JsonGenerator::pretty(Vec::new(), 4);

    generator.begin_object().unwrap();
    generator.begin_array_field("a").unwrap();
    generator.end().unwrap();
    generator.end().unwrap();

    assert_eq!(text(generator), "{\n    \"a\": []\n}");
}

#[test]
fn JsonGenerator___strings___are_escaped() {
    let mut generator = compact();

    generator.begin_object().unwrap();
    generator.string_field("k\"ey", "line\nbreak\\").unwrap();
    generator.end().unwrap();

    assert_eq!(text(generator), r#"{"k\"ey":"line\nbreak\\"}"#);
}

#[test]
fn JsonGenerator___value_field___embeds_structure() {
    let mut generator = compact();
    let embedded = json!({"b": [1, 2.5, -3], "a": {"n": null}});

    generator.begin_object().unwrap();
    generator.value_field("ext", &embedded).unwrap();
    generator.end().unwrap();

    let written: Value = serde_json::from_str(&text(generator)).unwrap();
    assert_eq!(written, json!({"ext": embedded}));
}

#[test]
fn JsonGenerator___value_field___keeps_field_order() {
    let mut generator = compact();
    let embedded: Value = serde_json::from_str(r#"{"z":1,"a":2}"#).unwrap();

    generator.value(&embedded).unwrap();

    assert_eq!(text(generator), r#"{"z":1,"a":2}"#);
}

#[test]
fn JsonGenerator___field_in_array___is_rejected() {
    let mut generator = compact();
    generator.begin_array().unwrap();

    let result = generator.string_field("k", "v");

    assert!(matches!(result, Err(JsonIoError::Generator(_))));
}

#[test]
fn JsonGenerator___value_without_key_in_object___is_rejected() {
    let mut generator = compact();
    generator.begin_object().unwrap();

    let result = generator.string("v");

    assert!(matches!(result, Err(JsonIoError::Generator(_))));
}

#[test]
fn JsonGenerator___end_without_scope___is_rejected() {
    let mut generator = compact();

    assert!(matches!(generator.end(), Err(JsonIoError::Generator(_))));
}

#[test]
fn JsonGenerator___second_root___is_rejected() {
    let mut generator = compact();
    generator.string("a").unwrap();

    assert!(matches!(generator.string("b"), Err(JsonIoError::Generator(_))));
}

#[test]
fn JsonGenerator___finish_with_open_scope___fails() {
    let mut generator = compact();
    generator.begin_object().unwrap();

    let result = generator.finish();

    assert!(matches!(result, Err(JsonIoError::Generator(msg)) if msg.contains("1 scope")));
}

#[test]
fn JsonGenerator___finish_without_value___fails() {
    assert!(compact().finish().is_err());
}

#[test]
fn JsonGenerator___depth___tracks_open_scopes() {
    let mut generator = compact();
    generator.begin_object().unwrap();
    generator.begin_array_field("a").unwrap();

    assert_eq!(generator.depth(), 2);
}

struct Greeting;

impl JsonDocument for Greeting {
    fn emit<W: Write, F: Formatter>(&self, generator: &mut JsonGenerator<W, F>) -> JsonIoResult<()> {
        generator.begin_object()?;
        generator.string_field("hello", "world")?;
        generator.end()
    }
}

#[test]
fn generate___compact_config___writes_single_line() {
    let output = generate_string(&JsonConfig::compact(), &Greeting).unwrap();

    assert_eq!(output, r#"{"hello":"world"}"#);
}

#[test]
fn generate___leaves_sink_open_for_more_output() {
    let mut sink = Vec::new();

    generate(&JsonConfig::compact(), &mut sink, &Greeting).unwrap();
    sink.extend_from_slice(b"\n");
    generate(&JsonConfig::compact(), &mut sink, &Greeting).unwrap();

    assert_eq!(
        String::from_utf8(sink).unwrap(),
        "{\"hello\":\"world\"}\n{\"hello\":\"world\"}"
    );
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn generate___sink_failure___is_io_error() {
    let result = generate(&JsonConfig::compact(), &mut FailingSink, &Greeting);

    assert!(matches!(result, Err(JsonIoError::Io(_))));
}
