//! Configurations: named, typed property sets

use crate::artifact::{Artifact, ArtifactId};
use crate::error::{FeatureError, FeatureResult};
use crate::value::TypedValue;
use std::collections::BTreeMap;

/// Typed property dictionary of a configuration
pub type Properties = BTreeMap<String, TypedValue>;

/// Separator between factory PID and alias in a configuration name
pub const FACTORY_SEPARATOR: char = '~';

/// A configuration identified by a PID or a factory PID plus alias
///
/// A configuration may be scoped to an artifact through the
/// [`Configuration::PROP_ARTIFACT_ID`] property. The scope is a plain string
/// property and is only resolved against artifacts when a feature is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pid: String,
    factory_alias: Option<String>,
    properties: Properties,
}

impl Configuration {
    /// Property naming the canonical id of the artifact this configuration belongs to
    pub const PROP_ARTIFACT_ID: &'static str = "__feature.artifact__";

    /// A singleton configuration
    pub fn new(pid: impl Into<String>) -> Self {
        Self {
            pid: pid.into(),
            factory_alias: None,
            properties: Properties::new(),
        }
    }

    /// A factory configuration instance
    pub fn factory(factory_pid: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            pid: factory_pid.into(),
            factory_alias: Some(alias.into()),
            properties: Properties::new(),
        }
    }

    /// Parse a wire name (`pid` or `factoryPid~alias`)
    pub fn parse_name(name: &str) -> FeatureResult<Self> {
        match name.split_once(FACTORY_SEPARATOR) {
            Some((pid, alias)) if !pid.is_empty() && !alias.is_empty() => {
                Ok(Self::factory(pid, alias))
            }
            Some(_) => Err(FeatureError::InvalidConfigurationName(name.to_string())),
            None if name.is_empty() => {
                Err(FeatureError::InvalidConfigurationName(name.to_string()))
            }
            None => Ok(Self::new(name)),
        }
    }

    /// Add a property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<TypedValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Scope this configuration to an artifact
    pub fn scoped_to(self, artifact: &ArtifactId) -> Self {
        self.with_property(Self::PROP_ARTIFACT_ID, artifact.to_mvn_id())
    }

    /// The PID, or the factory PID for factory configurations
    pub fn pid(&self) -> &str {
        &self.pid
    }

    pub fn factory_alias(&self) -> Option<&str> {
        self.factory_alias.as_deref()
    }

    pub fn is_factory(&self) -> bool {
        self.factory_alias.is_some()
    }

    /// Wire name: the PID, or `factoryPid~alias`
    pub fn name(&self) -> String {
        match &self.factory_alias {
            Some(alias) => format!("{}{FACTORY_SEPARATOR}{alias}", self.pid),
            None => self.pid.clone(),
        }
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    /// Properties without the artifact scoping property
    pub fn configuration_properties(&self) -> impl Iterator<Item = (&String, &TypedValue)> {
        self.properties
            .iter()
            .filter(|(key, _)| key.as_str() != Self::PROP_ARTIFACT_ID)
    }

    /// Canonical id of the artifact this configuration is scoped to, if any
    pub fn artifact_ref(&self) -> Option<&str> {
        self.properties
            .get(Self::PROP_ARTIFACT_ID)
            .and_then(TypedValue::as_str)
    }
}

/// Resolve the artifact a configuration is scoped to
///
/// Matching is by canonical id string. A configuration without a scope, or
/// whose scope names none of `artifacts`, resolves to `None`.
pub fn resolve_artifact<'a>(
    configuration: &Configuration,
    artifacts: &'a [Artifact],
) -> Option<&'a Artifact> {
    let reference = configuration.artifact_ref()?;
    artifacts
        .iter()
        .find(|artifact| artifact.id().to_mvn_id() == reference)
}

#[cfg(test)]
#[path = "configuration/configuration_tests.rs"]
mod configuration_tests;
