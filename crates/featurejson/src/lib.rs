//! # featurejson
//!
//! Writes feature models as JSON documents and reads them back.
//!
//! A feature describes a deployable unit: bundles, typed configurations,
//! framework properties, variables, requirements, capabilities, extensions
//! and an optional prototype it derives from. Configuration properties carry
//! their type in the JSON key (`port:Integer`) unless the bare JSON value
//! already decodes to the same type.
//!
//! ## Quick Start
//!
//! ```
//! use featurejson::prelude::*;
//!
//! let mut feature = Feature::new(ArtifactId::parse("org.example:web:1.0.0")?);
//! feature.bundles.push(
//!     Artifact::new(ArtifactId::parse("org.example:http:2.1.0")?).with_metadata("start-order", "5"),
//! );
//! feature.configurations.push(
//!     Configuration::new("org.example.http")
//!         .with_property("port", 8080i32)
//!         .with_property("hosts", TypedValue::array(vec!["a", "b"])),
//! );
//!
//! let writer = FeatureJsonWriter::new(JsonConfig::compact());
//! let json = writer.feature_to_string(&feature)?;
//! assert!(json.contains(r#""port:Integer":8080"#));
//!
//! let read = FeatureJsonReader::default().read_feature(&json)?;
//! assert!(read.report.is_clean());
//! assert_eq!(read.value, feature);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`featurejson_core`] - Feature model and configuration
//! - [`featurejson_codec`] - Typed property codec and decode reports
//! - [`featurejson_io`] - JSON generator, writers and readers
//! - [`featurejson_logging`] - Subscriber setup and log capture

pub use featurejson_core::{
    Artifact, ArtifactId, AttributeValue, Capability, Clause, Configuration, Extension,
    ExtensionContent, ExtensionState, ExtensionType, Feature, FeatureError, FeatureResult,
    JsonConfig, Kind, LogLevel, Properties, Prototype, Requirement, Scalar, Shape, TypedValue,
    Values, Version,
};

pub use featurejson_codec::{CodecError, Decoded, Diagnostic, PropertyCodec, Report};

pub use featurejson_io::{
    CloseShield, ConfigurationJsonReader, ConfigurationJsonWriter, FeatureJsonReader,
    FeatureJsonWriter, JsonDocument, JsonGenerator, JsonIoError, JsonIoResult,
};

pub use featurejson_logging::{LogCapture, ReloadHandle, init_logging};

// Re-export common dependencies
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use featurejson::prelude::*;` to import the model, the writers and
/// readers, and their error types.
pub mod prelude {
    pub use featurejson_core::prelude::*;

    pub use featurejson_codec::{Decoded, Report};

    pub use featurejson_io::prelude::*;
}
