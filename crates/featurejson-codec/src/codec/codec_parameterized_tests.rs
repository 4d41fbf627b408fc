#![allow(non_snake_case)]

use super::*;
use serde_json::json;
use test_case::test_case;

fn sample(kind: Kind) -> Values {
    match kind {
        Kind::Integer => Values::Integer(vec![i32::MIN, 0, i32::MAX]),
        Kind::Long => Values::Long(vec![i64::MIN, -1, i64::MAX]),
        Kind::Boolean => Values::Boolean(vec![true, false]),
        Kind::Float => Values::Float(vec![0.1, -3.5e-7, f32::MAX, f32::INFINITY]),
        Kind::Double => Values::Double(vec![0.1, 1e300, f64::NEG_INFINITY]),
        Kind::Byte => Values::Byte(vec![i8::MIN, i8::MAX]),
        Kind::Short => Values::Short(vec![i16::MIN, 12, i16::MAX]),
        Kind::Character => Values::Character(vec!['a', '"', '\u{e9}']),
        Kind::String => Values::String(vec!["".to_string(), "a:b".to_string()]),
    }
}

fn assert_roundtrip(value: TypedValue) {
    let codec = PropertyCodec::default();

    let (key, json) = codec.encode("p", &value);
    let (name, decoded) = codec.decode(&key, &json).unwrap();

    assert_eq!(name, "p");
    assert_eq!(decoded.kind(), value.kind());
    assert_eq!(decoded.shape(), value.shape());
    assert_eq!(decoded, value);
}

// ============================================================================
// Every kind in every shape survives encode then decode
// ============================================================================

#[test_case(Kind::Integer)]
#[test_case(Kind::Long)]
#[test_case(Kind::Boolean)]
#[test_case(Kind::Float)]
#[test_case(Kind::Double)]
#[test_case(Kind::Byte)]
#[test_case(Kind::Short)]
#[test_case(Kind::Character)]
#[test_case(Kind::String)]
fn PropertyCodec___roundtrip___scalar(kind: Kind) {
    let first = sample(kind).get(0).unwrap();

    assert_roundtrip(TypedValue::Scalar(first));
}

#[test_case(Kind::Integer)]
#[test_case(Kind::Long)]
#[test_case(Kind::Boolean)]
#[test_case(Kind::Float)]
#[test_case(Kind::Double)]
#[test_case(Kind::Byte)]
#[test_case(Kind::Short)]
#[test_case(Kind::Character)]
#[test_case(Kind::String)]
fn PropertyCodec___roundtrip___array(kind: Kind) {
    assert_roundtrip(TypedValue::Array(sample(kind)));
}

#[test_case(Kind::Integer)]
#[test_case(Kind::Long)]
#[test_case(Kind::Boolean)]
#[test_case(Kind::Float)]
#[test_case(Kind::Double)]
#[test_case(Kind::Byte)]
#[test_case(Kind::Short)]
#[test_case(Kind::Character)]
#[test_case(Kind::String)]
fn PropertyCodec___roundtrip___list(kind: Kind) {
    assert_roundtrip(TypedValue::List(sample(kind)));
}

#[test_case(Kind::Integer)]
#[test_case(Kind::Long)]
#[test_case(Kind::Boolean)]
#[test_case(Kind::Float)]
#[test_case(Kind::Double)]
#[test_case(Kind::Byte)]
#[test_case(Kind::Short)]
#[test_case(Kind::Character)]
#[test_case(Kind::String)]
fn PropertyCodec___roundtrip___empty_array_keeps_kind(kind: Kind) {
    assert_roundtrip(TypedValue::Array(Values::empty(kind)));
}

// ============================================================================
// Wire keys
// ============================================================================

#[test_case(TypedValue::from(1i32), "p:Integer" ; "integer scalar")]
#[test_case(TypedValue::from(1i64), "p" ; "long scalar")]
#[test_case(TypedValue::from(1.5f32), "p:Float" ; "float scalar")]
#[test_case(TypedValue::from(1.5f64), "p" ; "double scalar")]
#[test_case(TypedValue::array(vec![1i64]), "p:Long[]" ; "long array")]
#[test_case(TypedValue::array(vec!['x']), "p:Character[]" ; "character array")]
#[test_case(TypedValue::list(vec![1i16]), "p:Collection<Short>" ; "short list")]
#[test_case(TypedValue::list(vec![true]), "p:Collection<Boolean>" ; "boolean list")]
fn PropertyCodec___encode___wire_key(value: TypedValue, expected: &str) {
    let codec = PropertyCodec::default();

    let (key, _) = codec.encode("p", &value);

    assert_eq!(key, expected);
}

// ============================================================================
// Tagged decode of string payloads
// ============================================================================

#[test_case("p:Long", json!("-9"), TypedValue::from(-9i64) ; "long")]
#[test_case("p:short", json!(" 12 "), TypedValue::from(12i16) ; "short trimmed")]
#[test_case("p:Double", json!("2.5"), TypedValue::from(2.5f64) ; "double")]
#[test_case("p:Boolean", json!("false"), TypedValue::from(false) ; "boolean")]
#[test_case("p:Double", json!(3), TypedValue::from(3.0f64) ; "integer payload for double")]
fn PropertyCodec___decode___tagged_payload(key: &str, payload: Value, expected: TypedValue) {
    let codec = PropertyCodec::default();

    let (_, value) = codec.decode(key, &payload).unwrap();

    assert_eq!(value, expected);
}

#[test_case("p:Integer", json!(2147483648i64) ; "integer overflow")]
#[test_case("p:Short", json!(-32769) ; "short underflow")]
#[test_case("p:Long", json!(18446744073709551615u64) ; "long overflow")]
#[test_case("p:Float", json!(1e39) ; "float overflow")]
fn PropertyCodec___decode___out_of_range(key: &str, payload: Value) {
    let codec = PropertyCodec::default();

    let result = codec.decode(key, &payload);

    assert!(matches!(result, Err(CodecError::OutOfRange { .. })));
}

#[test_case("p:Integer", json!(1.5) ; "fraction for integer")]
#[test_case("p:Boolean", json!(1) ; "number for boolean")]
#[test_case("p:String", json!(1) ; "number for string")]
#[test_case("p:Long", json!("ten") ; "word for long")]
#[test_case("p:Boolean", json!("yes") ; "word for boolean")]
fn PropertyCodec___decode___mismatch(key: &str, payload: Value) {
    let codec = PropertyCodec::default();

    let result = codec.decode(key, &payload);

    assert!(matches!(result, Err(CodecError::ValueMismatch { .. })));
}

#[test_case("d:Double", "inf" ; "double lowercase inf")]
#[test_case("d:Double", "-INF" ; "double uppercase negative inf")]
#[test_case("d:Double", "infinity" ; "double lowercase infinity")]
#[test_case("f:Float", "nan" ; "float lowercase nan")]
#[test_case("f:Float[]", "NAN" ; "float array element uppercase nan")]
fn PropertyCodec___decode___non_finite_spelling_outside_wire_names_is_error(key: &str, text: &str) {
    let codec = PropertyCodec::default();
    let payload = if key.ends_with("[]") { json!([text]) } else { json!(text) };

    assert!(codec.decode(key, &payload).is_err());
}

#[test_case("d:Double", "1.5", 1.5 ; "double")]
#[test_case("d:Double", " -2e3 ", -2000.0 ; "double with exponent and spaces")]
#[test_case("f:Float", "0.25", 0.25 ; "float")]
fn PropertyCodec___decode___finite_string_payload_accepted(key: &str, text: &str, expected: f64) {
    let codec = PropertyCodec::default();

    let (_, value) = codec.decode(key, &json!(text)).unwrap();

    match value {
        TypedValue::Scalar(Scalar::Double(d)) => assert_eq!(d, expected),
        TypedValue::Scalar(Scalar::Float(f)) => assert_eq!(f64::from(f), expected),
        other => panic!("unexpected {other:?}"),
    }
}
