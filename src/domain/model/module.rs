use serde::Deserialize;
use std::fmt;

use super::Version;

/// Stable unique identity the host assigns to a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub u64);

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a module as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleState {
    Installed,
    Resolved,
    Starting,
    Active,
    Stopping,
    Uninstalled,
}

impl ModuleState {
    /// Only resolved or active modules take part in analysis.
    pub fn is_countable(self) -> bool {
        matches!(self, ModuleState::Resolved | ModuleState::Active)
    }
}

impl fmt::Display for ModuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ModuleState::Installed => "installed",
            ModuleState::Resolved => "resolved",
            ModuleState::Starting => "starting",
            ModuleState::Active => "active",
            ModuleState::Stopping => "stopping",
            ModuleState::Uninstalled => "uninstalled",
        };
        write!(f, "{}", s)
    }
}

/// A loaded unit of code, as seen through the host registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    /// Not unique: several versions of one module may be installed.
    pub symbolic_name: String,
    pub version: Version,
    pub state: ModuleState,
}

impl Module {
    pub fn new(
        id: ModuleId,
        symbolic_name: impl Into<String>,
        version: Version,
        state: ModuleState,
    ) -> Self {
        Self {
            id,
            symbolic_name: symbolic_name.into(),
            version,
            state,
        }
    }
}

/// Renders as `symbolic-name/version [id]`.
impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} [{}]", self.symbolic_name, self.version, self.id)
    }
}
