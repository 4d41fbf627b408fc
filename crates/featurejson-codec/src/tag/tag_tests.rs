#![allow(non_snake_case)]

use super::*;
use featurejson_core::{Scalar, Values};

#[test]
fn TypeTag___parse___boxed_scalar() {
    let tag = TypeTag::parse("Integer").unwrap();

    assert_eq!(tag, TypeTag::new(Kind::Integer, Shape::Scalar));
}

#[test]
fn TypeTag___parse___primitive_alias_scalar() {
    let tag = TypeTag::parse("char").unwrap();

    assert_eq!(tag, TypeTag::new(Kind::Character, Shape::Scalar));
}

#[test]
fn TypeTag___parse___array_of_primitive_alias() {
    let tag = TypeTag::parse("long[]").unwrap();

    assert_eq!(tag, TypeTag::new(Kind::Long, Shape::Array));
}

#[test]
fn TypeTag___parse___typed_collection() {
    let tag = TypeTag::parse("Collection<Short>").unwrap();

    assert_eq!(tag, TypeTag::new(Kind::Short, Shape::List));
}

#[test]
fn TypeTag___parse___untyped_collection_has_no_kind() {
    let tag = TypeTag::parse("Collection").unwrap();

    assert_eq!(tag.kind, None);
    assert_eq!(tag.shape, Shape::List);
}

#[test]
fn TypeTag___parse___collection_of_primitive_alias_is_rejected() {
    assert_eq!(TypeTag::parse("Collection<int>"), None);
}

#[test]
fn TypeTag___parse___unknown_names_are_rejected() {
    assert_eq!(TypeTag::parse("Decimal"), None);
    assert_eq!(TypeTag::parse("Decimal[]"), None);
    assert_eq!(TypeTag::parse("Collection<"), None);
    assert_eq!(TypeTag::parse(""), None);
}

#[test]
fn TypeTag___display___uses_boxed_names() {
    assert_eq!(TypeTag::new(Kind::Integer, Shape::Scalar).to_string(), "Integer");
    assert_eq!(TypeTag::new(Kind::Float, Shape::Array).to_string(), "Float[]");
    assert_eq!(
        TypeTag::new(Kind::Character, Shape::List).to_string(),
        "Collection<Character>"
    );
}

#[test]
fn TypeTag___of___describes_value_kind_and_shape() {
    let value = TypedValue::List(Values::Byte(vec![1, 2]));

    assert_eq!(TypeTag::of(&value), TypeTag::new(Kind::Byte, Shape::List));
    assert_eq!(
        TypeTag::of(&TypedValue::Scalar(Scalar::Double(1.5))),
        TypeTag::new(Kind::Double, Shape::Scalar)
    );
}

#[test]
fn split_key___no_colon___has_no_tag() {
    assert_eq!(split_key("port"), ("port", None));
}

#[test]
fn split_key___splits_at_last_colon() {
    assert_eq!(split_key("a:b:Long"), ("a:b", Some("Long")));
}

#[test]
fn split_key___trailing_colon___empty_tag() {
    assert_eq!(split_key("name:"), ("name", Some("")));
}

#[test]
fn join_key___with_and_without_tag() {
    assert_eq!(join_key("port", None), "port");
    assert_eq!(
        join_key("port", Some(TypeTag::new(Kind::Integer, Shape::Array))),
        "port:Integer[]"
    );
}
