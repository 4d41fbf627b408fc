//! featurejson-core - Feature model types and configuration
//!
//! This crate provides the model that the featurejson writers and readers
//! operate on:
//! - [`Feature`] with its [`Artifact`]s, [`Configuration`]s, [`Extension`]s
//!   and optional [`Prototype`]
//! - [`TypedValue`] for configuration properties with an explicit [`Kind`]
//!   and [`Shape`]
//! - [`Requirement`] and [`Capability`] with typed [`AttributeValue`]s
//! - [`FeatureError`] for error handling
//! - [`JsonConfig`] for reader/writer configuration

mod artifact;
mod config;
mod configuration;
mod error;
mod extension;
mod feature;
mod prototype;
mod reqcap;
mod value;

pub use artifact::{Artifact, ArtifactId, DEFAULT_TYPE};
pub use config::{JsonConfig, MAX_INDENT};
pub use configuration::{Configuration, FACTORY_SEPARATOR, Properties, resolve_artifact};
pub use error::{FeatureError, FeatureResult};
pub use extension::{Extension, ExtensionContent, ExtensionState, ExtensionType};
pub use feature::Feature;
pub use prototype::Prototype;
pub use reqcap::{AttributeValue, Capability, Clause, Requirement, Version};
pub use value::{Kind, Scalar, Shape, TypedValue, Values};

/// Log levels understood by `featurejson-logging`
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            _ => Err(FeatureError::ConfigError(format!("unknown log level: {s}"))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Artifact, ArtifactId, AttributeValue, Capability, Configuration, Extension,
        ExtensionContent, ExtensionState, ExtensionType, Feature, FeatureError, FeatureResult,
        JsonConfig, Kind, LogLevel, Properties, Prototype, Requirement, Scalar, Shape,
        TypedValue, Values, Version,
    };
}
