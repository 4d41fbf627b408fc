//! Feature model JSON writers and readers
//!
//! This crate writes [`Feature`](featurejson_core::Feature)s and configuration
//! property sets as JSON, and reads them back.
//!
//! # Document Structure
//!
//! ```text
//! {
//!   "id": "org.example:my-feature:1.0.0",
//!   "prototype": "org.example:base:1.0.0" | { "id": ..., "removals": { ... } },
//!   "bundles": [ "g:a:1.0.0", { "id": "g:b:1.0.0", "start-order": "5" } ],
//!   "framework-properties": { "key": "value" },
//!   "variables": { "set": "value", "unset": null },
//!   "configurations": { "my.pid": { "port:Integer": 8080 } },
//!   "requirements": [ { "namespace": ..., "attributes": {...}, "directives": {...} } ],
//!   "capabilities": [ ... ],
//!   "content-packages:ARTIFACTS|true": [ ... ]
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use featurejson_core::{Artifact, ArtifactId, Feature, JsonConfig};
//! use featurejson_io::{FeatureJsonReader, FeatureJsonWriter};
//!
//! let mut feature = Feature::new(ArtifactId::parse("org.example:app:1.0.0")?);
//! feature.bundles.push(Artifact::new(ArtifactId::parse("org.example:core:1.2.0")?));
//!
//! let json = FeatureJsonWriter::new(JsonConfig::compact()).feature_to_string(&feature)?;
//! assert_eq!(json, r#"{"id":"org.example:app:1.0.0","bundles":["org.example:core:1.2.0"]}"#);
//!
//! let read = FeatureJsonReader::default().read_feature(&json)?.into_result()?;
//! assert_eq!(read, feature);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod artifact;
mod configuration_reader;
mod configuration_writer;
mod error;
mod feature_reader;
mod feature_writer;
mod shield;

pub mod constants;
pub mod generator;
pub mod prototype;
pub mod reqcap;

pub use configuration_reader::ConfigurationJsonReader;
pub use configuration_writer::ConfigurationJsonWriter;
pub use error::{JsonIoError, JsonIoResult};
pub use feature_reader::FeatureJsonReader;
pub use feature_writer::FeatureJsonWriter;
pub use generator::{JsonDocument, JsonGenerator, generate, generate_string};
pub use shield::CloseShield;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConfigurationJsonReader, ConfigurationJsonWriter, FeatureJsonReader, FeatureJsonWriter,
        JsonIoError, JsonIoResult,
    };
}
