//! Field names of the feature document.

pub const FEATURE_ID: &str = "id";
pub const FEATURE_TITLE: &str = "title";
pub const FEATURE_DESCRIPTION: &str = "description";
pub const FEATURE_VENDOR: &str = "vendor";
pub const FEATURE_LICENSE: &str = "license";
pub const FEATURE_COMPLETE: &str = "complete";
pub const FEATURE_FINAL: &str = "final";

pub const FEATURE_PROTOTYPE: &str = "prototype";
pub const FEATURE_BUNDLES: &str = "bundles";
pub const FEATURE_FRAMEWORK_PROPERTIES: &str = "framework-properties";
pub const FEATURE_VARIABLES: &str = "variables";
pub const FEATURE_CONFIGURATIONS: &str = "configurations";
pub const FEATURE_REQUIREMENTS: &str = "requirements";
pub const FEATURE_CAPABILITIES: &str = "capabilities";

pub const ARTIFACT_ID: &str = "id";

/// Metadata key written in place of [`ARTIFACT_RUNMODES_LEGACY`]
pub const ARTIFACT_RUN_MODES: &str = "run-modes";
pub const ARTIFACT_RUNMODES_LEGACY: &str = "runmodes";

pub const PROTOTYPE_REMOVALS: &str = "removals";
pub const PROTOTYPE_EXTENSION_REMOVALS: &str = "extension-removals";

pub const REQCAP_NAMESPACE: &str = "namespace";
pub const REQCAP_ATTRIBUTES: &str = "attributes";
pub const REQCAP_DIRECTIVES: &str = "directives";

/// Top-level fields that are not extensions
pub const FEATURE_FIELDS: [&str; 14] = [
    FEATURE_ID,
    FEATURE_TITLE,
    FEATURE_DESCRIPTION,
    FEATURE_VENDOR,
    FEATURE_LICENSE,
    FEATURE_COMPLETE,
    FEATURE_FINAL,
    FEATURE_PROTOTYPE,
    FEATURE_BUNDLES,
    FEATURE_FRAMEWORK_PROPERTIES,
    FEATURE_VARIABLES,
    FEATURE_CONFIGURATIONS,
    FEATURE_REQUIREMENTS,
    FEATURE_CAPABILITIES,
];
