#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized state suffix parsing
// ============================================================================

#[test_case("true", ExtensionState::Required)]
#[test_case("false", ExtensionState::Optional)]
#[test_case("TRANSIENT", ExtensionState::Transient)]
#[test_case("REQUIRED", ExtensionState::Required)]
#[test_case("optional", ExtensionState::Optional)]
#[test_case("TRUE", ExtensionState::Required)]
fn ExtensionState___parse___accepts_known_suffixes(suffix: &str, expected: ExtensionState) {
    assert_eq!(ExtensionState::parse(suffix).unwrap(), expected);
}

#[test_case("yes")]
#[test_case("")]
#[test_case("1")]
fn ExtensionState___parse___rejects_unknown(suffix: &str) {
    assert!(ExtensionState::parse(suffix).is_err());
}

#[test_case(ExtensionState::Required, "true")]
#[test_case(ExtensionState::Optional, "false")]
#[test_case(ExtensionState::Transient, "TRANSIENT")]
fn ExtensionState___wire_name___matches_key_suffix(state: ExtensionState, expected: &str) {
    assert_eq!(state.wire_name(), expected);
    assert_eq!(ExtensionState::parse(expected).unwrap(), state);
}

#[test_case("JSON", ExtensionType::Json)]
#[test_case("TEXT", ExtensionType::Text)]
#[test_case("ARTIFACTS", ExtensionType::Artifacts)]
#[test_case("json", ExtensionType::Json)]
fn ExtensionType___parse___accepts_type_names(name: &str, expected: ExtensionType) {
    assert_eq!(ExtensionType::parse(name).unwrap(), expected);
}
