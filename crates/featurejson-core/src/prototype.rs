//! Prototypes: a base feature plus removal instructions

use crate::artifact::ArtifactId;
use crate::reqcap::{Capability, Requirement};
use std::collections::BTreeMap;

/// A reference to a base feature plus the parts to remove from it
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    id: ArtifactId,
    /// Whole extensions removed by name
    pub extension_removals: Vec<String>,
    /// Artifacts removed from artifact-list extensions, keyed by extension name
    pub artifact_extension_removals: BTreeMap<String, Vec<ArtifactId>>,
    /// Configuration names (PID or `factoryPid~alias`)
    pub configuration_removals: Vec<String>,
    pub bundle_removals: Vec<ArtifactId>,
    pub framework_properties_removals: Vec<String>,
    pub requirement_removals: Vec<Requirement>,
    pub capability_removals: Vec<Capability>,
}

impl Prototype {
    pub fn new(id: ArtifactId) -> Self {
        Self {
            id,
            extension_removals: Vec::new(),
            artifact_extension_removals: BTreeMap::new(),
            configuration_removals: Vec::new(),
            bundle_removals: Vec::new(),
            framework_properties_removals: Vec::new(),
            requirement_removals: Vec::new(),
            capability_removals: Vec::new(),
        }
    }

    pub fn id(&self) -> &ArtifactId {
        &self.id
    }

    /// Whether any extension removal, by name or per artifact, is present
    pub fn has_extension_removals(&self) -> bool {
        !self.extension_removals.is_empty() || !self.artifact_extension_removals.is_empty()
    }

    /// Whether the prototype removes nothing from its base
    pub fn has_no_removals(&self) -> bool {
        !self.has_extension_removals()
            && self.configuration_removals.is_empty()
            && self.bundle_removals.is_empty()
            && self.framework_properties_removals.is_empty()
            && self.requirement_removals.is_empty()
            && self.capability_removals.is_empty()
    }
}
