#![allow(non_snake_case)]

use super::*;

// Version tests

#[test]
fn Version___parse___full_version_with_qualifier() {
    let v = Version::parse("1.2.3.SNAPSHOT").unwrap();

    assert_eq!(v, Version::new(1, 2, 3).with_qualifier("SNAPSHOT"));
}

#[test]
fn Version___parse___missing_parts_default_to_zero() {
    assert_eq!(Version::parse("2").unwrap(), Version::new(2, 0, 0));
    assert_eq!(Version::parse("2.5").unwrap(), Version::new(2, 5, 0));
}

#[test]
fn Version___parse___rejects_non_numeric_major() {
    assert!(matches!(
        Version::parse("x.1"),
        Err(FeatureError::InvalidVersion(_))
    ));
}

#[test]
fn Version___parse___rejects_bad_qualifier() {
    assert!(Version::parse("1.0.0.a b").is_err());
}

#[test]
fn Version___display___normalizes_to_three_parts() {
    assert_eq!(Version::parse("1.2").unwrap().to_string(), "1.2.0");
    assert_eq!(
        Version::new(1, 0, 0).with_qualifier("rc1").to_string(),
        "1.0.0.rc1"
    );
}

// AttributeValue tests

#[test]
fn AttributeValue___type_name___none_for_strings() {
    assert_eq!(AttributeValue::from("x").type_name(), None);
    assert_eq!(AttributeValue::from(1i64).type_name(), Some("Long"));
    assert_eq!(
        AttributeValue::VersionList(Vec::new()).type_name(),
        Some("List<Version>")
    );
}

// Requirement / Capability tests

#[test]
fn Requirement___builder___collects_attributes_and_directives() {
    let req = Requirement::new("osgi.ee")
        .with_attribute("version", Version::new(1, 8, 0))
        .with_directive("filter", "(osgi.ee=JavaSE)");

    assert_eq!(req.namespace(), "osgi.ee");
    assert_eq!(req.attributes().len(), 1);
    assert_eq!(req.directives()["filter"], "(osgi.ee=JavaSE)");
}

#[test]
fn Capability___new___has_no_attributes() {
    let cap = Capability::new("osgi.service");

    assert!(cap.attributes().is_empty());
    assert!(cap.directives().is_empty());
}
