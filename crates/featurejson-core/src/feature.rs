//! The feature: root of the model

use crate::artifact::{Artifact, ArtifactId};
use crate::configuration::Configuration;
use crate::extension::Extension;
use crate::prototype::Prototype;
use crate::reqcap::{Capability, Requirement};
use std::collections::BTreeMap;

/// A declarative description of a deployable unit
///
/// The model is plain data; serialization never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: ArtifactId,

    pub title: Option<String>,
    pub description: Option<String>,
    pub vendor: Option<String>,
    pub license: Option<String>,

    /// The feature lists everything it needs
    pub complete: bool,

    /// The feature must not be used as a prototype
    pub final_: bool,

    pub prototype: Option<Prototype>,

    /// Bundles in start order
    pub bundles: Vec<Artifact>,

    /// All configurations of the feature, scoped or not
    pub configurations: Vec<Configuration>,

    pub framework_properties: BTreeMap<String, String>,

    /// Variables; `None` is declared but unset
    pub variables: BTreeMap<String, Option<String>>,

    pub requirements: Vec<Requirement>,
    pub capabilities: Vec<Capability>,
    pub extensions: Vec<Extension>,
}

impl Feature {
    pub fn new(id: ArtifactId) -> Self {
        Self {
            id,
            title: None,
            description: None,
            vendor: None,
            license: None,
            complete: false,
            final_: false,
            prototype: None,
            bundles: Vec::new(),
            configurations: Vec::new(),
            framework_properties: BTreeMap::new(),
            variables: BTreeMap::new(),
            requirements: Vec::new(),
            capabilities: Vec::new(),
            extensions: Vec::new(),
        }
    }

    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// Find an extension by name
    pub fn extension(&self, name: &str) -> Option<&Extension> {
        self.extensions.iter().find(|ext| ext.name() == name)
    }

    /// Find a bundle by coordinate
    pub fn bundle(&self, id: &ArtifactId) -> Option<&Artifact> {
        self.bundles.iter().find(|bundle| bundle.id() == id)
    }

    /// Find a configuration by wire name
    pub fn configuration(&self, name: &str) -> Option<&Configuration> {
        self.configurations.iter().find(|cfg| cfg.name() == name)
    }
}
