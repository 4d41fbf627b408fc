#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;

fn write(requirements: &[Requirement]) -> Value {
    let mut generator = JsonGenerator::compact(Vec::new());
    generator.begin_object().unwrap();
    write_clauses(
        &mut generator,
        "requirements",
        requirements.iter().map(Requirement::clause),
    )
    .unwrap();
    generator.end().unwrap();
    serde_json::from_slice(&generator.finish().unwrap()).unwrap()
}

#[test_case(AttributeValue::from("a.b"), "k", json!("a.b") ; "string")]
#[test_case(AttributeValue::from(3i64), "k:Long", json!(3) ; "long")]
#[test_case(AttributeValue::from(0.5f64), "k:Double", json!(0.5) ; "double")]
#[test_case(AttributeValue::from(Version::new(1, 2, 0)), "k:Version", json!("1.2.0") ; "version")]
#[test_case(AttributeValue::StringList(vec!["x".into()]), "k:List<String>", json!(["x"]) ; "string list")]
#[test_case(AttributeValue::LongList(vec![1, 2]), "k:List<Long>", json!([1, 2]) ; "long list")]
#[test_case(AttributeValue::VersionList(vec![Version::new(1, 0, 0).with_qualifier("q")]), "k:List<Version>", json!(["1.0.0.q"]) ; "version list")]
fn encode_attribute___wire_form(value: AttributeValue, key: &str, json: Value) {
    assert_eq!(encode_attribute("k", &value), (key.to_string(), json.clone()));
    assert_eq!(decode_attribute("a", key, &json).unwrap(), ("k".to_string(), value));
}

#[test]
fn encode_attribute___key_with_colon___string_is_tagged() {
    let (wire_key, json) = encode_attribute("a:b", &AttributeValue::from("v"));

    assert_eq!(wire_key, "a:b:String");
    assert_eq!(
        decode_attribute("", &wire_key, &json).unwrap(),
        ("a:b".to_string(), AttributeValue::from("v"))
    );
}

#[test]
fn decode_attribute___unknown_type___is_invalid_document() {
    let result = decode_attribute("requirements/0/attributes", "k:Map", &json!({}));

    assert!(matches!(
        result,
        Err(JsonIoError::InvalidDocument { location, .. }) if location == "requirements/0/attributes/k:Map"
    ));
}

#[test]
fn decode_attribute___bad_version___is_model_error() {
    let result = decode_attribute("", "v:Version", &json!("x.y"));

    assert!(matches!(result, Err(JsonIoError::Model(_))));
}

#[test]
fn write_clauses___empty_list___writes_nothing() {
    assert_eq!(write(&[]), json!({}));
}

#[test]
fn write_clauses___omits_empty_attributes_and_directives() {
    let written = write(&[Requirement::new("osgi.ee")]);

    assert_eq!(written, json!({"requirements": [{"namespace": "osgi.ee"}]}));
}

#[test]
fn write_clauses___writes_attributes_and_directives() {
    let requirement = Requirement::new("osgi.wiring.package")
        .with_attribute("size", 3i64)
        .with_directive("filter", "(osgi.wiring.package=a)");

    let written = write(&[requirement]);

    assert_eq!(
        written,
        json!({"requirements": [{
            "namespace": "osgi.wiring.package",
            "attributes": {"size:Long": 3},
            "directives": {"filter": "(osgi.wiring.package=a)"}
        }]})
    );
}

#[test]
fn read_requirements___restores_written_clauses() {
    let requirement = Requirement::new("ns")
        .with_attribute("version", Version::new(2, 0, 0))
        .with_attribute("name", "x")
        .with_directive("resolution", "optional");
    let written = write(std::slice::from_ref(&requirement));

    let read = read_requirements("requirements", &written["requirements"]).unwrap();

    assert_eq!(read, vec![requirement]);
}

#[test]
fn read_capabilities___missing_namespace___is_invalid_document() {
    let result = read_capabilities("capabilities", &json!([{"attributes": {}}]));

    assert!(matches!(
        result,
        Err(JsonIoError::InvalidDocument { location, .. }) if location == "capabilities/0"
    ));
}

#[test]
fn read_capabilities___not_an_array___is_invalid_document() {
    assert!(read_capabilities("capabilities", &json!({})).is_err());
}
