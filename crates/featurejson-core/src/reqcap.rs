//! Requirements and capabilities

use crate::error::{FeatureError, FeatureResult};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// An OSGi version: `major[.minor[.micro[.qualifier]]]`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub qualifier: String,
}

impl Version {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = qualifier.into();
        self
    }

    pub fn parse(s: &str) -> FeatureResult<Self> {
        let trimmed = s.trim();
        let mut parts = trimmed.splitn(4, '.');
        let number = |part: Option<&str>, required: bool| -> FeatureResult<u32> {
            match part {
                Some(p) => p
                    .parse::<u32>()
                    .map_err(|_| FeatureError::InvalidVersion(s.to_string())),
                None if required => Err(FeatureError::InvalidVersion(s.to_string())),
                None => Ok(0),
            }
        };
        let major = number(parts.next(), true)?;
        let minor = number(parts.next(), false)?;
        let micro = number(parts.next(), false)?;
        let qualifier = parts.next().unwrap_or_default().to_string();
        if !qualifier
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(FeatureError::InvalidVersion(s.to_string()));
        }
        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

/// A typed requirement or capability attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    String(String),
    Long(i64),
    Double(f64),
    Version(Version),
    StringList(Vec<String>),
    LongList(Vec<i64>),
    DoubleList(Vec<f64>),
    VersionList(Vec<Version>),
}

impl AttributeValue {
    /// OSGi attribute type name, `None` for plain strings
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            AttributeValue::String(_) => None,
            AttributeValue::Long(_) => Some("Long"),
            AttributeValue::Double(_) => Some("Double"),
            AttributeValue::Version(_) => Some("Version"),
            AttributeValue::StringList(_) => Some("List<String>"),
            AttributeValue::LongList(_) => Some("List<Long>"),
            AttributeValue::DoubleList(_) => Some("List<Double>"),
            AttributeValue::VersionList(_) => Some("List<Version>"),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Long(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Double(value)
    }
}

impl From<Version> for AttributeValue {
    fn from(value: Version) -> Self {
        AttributeValue::Version(value)
    }
}

/// Namespace plus attributes and directives, shared by requirements and capabilities
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Clause {
    namespace: String,
    attributes: BTreeMap<String, AttributeValue>,
    directives: BTreeMap<String, String>,
}

impl Clause {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            attributes: BTreeMap::new(),
            directives: BTreeMap::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    pub fn directives(&self) -> &BTreeMap<String, String> {
        &self.directives
    }
}

macro_rules! clause_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name(Clause);

        impl $name {
            pub fn new(namespace: impl Into<String>) -> Self {
                Self(Clause::new(namespace))
            }

            /// Add an attribute
            pub fn with_attribute(
                mut self,
                key: impl Into<String>,
                value: impl Into<AttributeValue>,
            ) -> Self {
                self.0.attributes.insert(key.into(), value.into());
                self
            }

            /// Add a directive
            pub fn with_directive(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
                self.0.directives.insert(key.into(), value.into());
                self
            }

            pub fn clause(&self) -> &Clause {
                &self.0
            }

            pub fn namespace(&self) -> &str {
                self.0.namespace()
            }

            pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
                self.0.attributes()
            }

            pub fn directives(&self) -> &BTreeMap<String, String> {
                self.0.directives()
            }
        }
    };
}

clause_type!(
    /// A declarative predicate a feature needs satisfied
    Requirement
);

clause_type!(
    /// A declarative offer a feature provides
    Capability
);

#[cfg(test)]
#[path = "reqcap/reqcap_tests.rs"]
mod reqcap_tests;
