//! Capabilities provided by a module's wiring.
//!
//! Capability identity is the [`CapabilityId`] handle handed out by the host,
//! never the `(name, version)` pair: two modules exporting the same package at
//! the same version are two distinct capabilities.

use std::collections::BTreeMap;
use std::fmt;

use super::{ModuleId, Version};

/// Attribute keys used by package capabilities.
pub mod attr {
    pub const PACKAGE: &str = "osgi.wiring.package";
    pub const VERSION: &str = "version";
    pub const MANDATORY: &str = "mandatory";
    pub const EFFECTIVE: &str = "effective";
    pub const EXCLUDE: &str = "exclude";
    pub const INCLUDE: &str = "include";
    pub const USES: &str = "uses";
}

/// Opaque handle identifying one capability instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CapabilityId(pub u64);

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Capability namespace. Only [`Namespace::Package`] is analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Namespace {
    Package,
    Bundle,
    Host,
    Other(String),
}

impl Namespace {
    pub fn as_str(&self) -> &str {
        match self {
            Namespace::Package => attr::PACKAGE,
            Namespace::Bundle => "osgi.wiring.bundle",
            Namespace::Host => "osgi.wiring.host",
            Namespace::Other(name) => name.as_str(),
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Attributes = BTreeMap<String, String>;

/// One raw capability as exposed by a wiring.
#[derive(Debug, Clone)]
pub struct Capability {
    pub id: CapabilityId,
    pub namespace: Namespace,
    pub owner: ModuleId,
    pub attributes: Attributes,
}

impl Capability {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl PartialEq for Capability {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Capability {}

/// Optional export directives of a package capability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    pub mandatory: Option<String>,
    pub effective: Option<String>,
    pub exclude: Option<String>,
    pub include: Option<String>,
    pub uses: Option<String>,
}

impl Directives {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let get = |key: &str| attributes.get(key).cloned();
        Self {
            mandatory: get(attr::MANDATORY),
            effective: get(attr::EFFECTIVE),
            exclude: get(attr::EXCLUDE),
            include: get(attr::INCLUDE),
            uses: get(attr::USES),
        }
    }

    /// Present directives as `(key, value)` pairs, always in the order
    /// mandatory, effective, exclude, include, uses.
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            (attr::MANDATORY, &self.mandatory),
            (attr::EFFECTIVE, &self.effective),
            (attr::EXCLUDE, &self.exclude),
            (attr::INCLUDE, &self.include),
            (attr::USES, &self.uses),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present().is_empty()
    }
}

/// One exported package instance.
#[derive(Debug, Clone)]
pub struct PackageCapability {
    pub id: CapabilityId,
    pub name: String,
    /// `None` when the exporter declared no (or an unreadable) version.
    pub version: Option<Version>,
    pub owner: ModuleId,
    pub directives: Directives,
}

impl PartialEq for PackageCapability {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PackageCapability {}
