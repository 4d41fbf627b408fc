//! Reader and writer configuration

use crate::LogLevel;
use crate::error::{FeatureError, FeatureResult};
use crate::value::Kind;
use serde::{Deserialize, Serialize};

/// Largest accepted indentation width
pub const MAX_INDENT: usize = 16;

/// Configuration shared by the JSON writers and readers
///
/// The same configuration must be used on both sides: the encoder only omits
/// a type tag when the decoder would infer the same kind from the bare JSON
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonConfig {
    /// Pretty-print output (default: true)
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Spaces per nesting level when pretty-printing
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Kind of an untagged JSON integer
    ///
    /// Must be one of Byte, Short, Integer or Long.
    #[serde(default = "default_integral_kind")]
    pub default_integral_kind: Kind,

    /// Kind of an untagged JSON number with a fraction
    ///
    /// Must be Float or Double.
    #[serde(default = "default_fractional_kind")]
    pub default_fractional_kind: Kind,

    /// Log level used by `featurejson-logging`
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_pretty() -> bool {
    true
}

fn default_indent() -> usize {
    4
}

fn default_integral_kind() -> Kind {
    Kind::Long
}

fn default_fractional_kind() -> Kind {
    Kind::Double
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            indent: default_indent(),
            default_integral_kind: default_integral_kind(),
            default_fractional_kind: default_fractional_kind(),
            log_level: default_log_level(),
        }
    }
}

impl JsonConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with compact output
    pub fn compact() -> Self {
        Self {
            pretty: false,
            ..Self::default()
        }
    }

    /// Create configuration from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> FeatureResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: JsonConfig = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the default kinds and indentation
    pub fn validate(&self) -> FeatureResult<()> {
        if !self.default_integral_kind.is_integral() {
            return Err(FeatureError::ConfigError(format!(
                "default_integral_kind must be Byte, Short, Integer or Long, got {}",
                self.default_integral_kind
            )));
        }
        if !self.default_fractional_kind.is_fractional() {
            return Err(FeatureError::ConfigError(format!(
                "default_fractional_kind must be Float or Double, got {}",
                self.default_fractional_kind
            )));
        }
        if self.indent > MAX_INDENT {
            return Err(FeatureError::ConfigError(format!(
                "indent must be at most {MAX_INDENT}, got {}",
                self.indent
            )));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn log_level(&self) -> FeatureResult<LogLevel> {
        self.log_level.parse()
    }

    /// Indentation as the byte string handed to the pretty printer
    pub fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent]
    }
}
