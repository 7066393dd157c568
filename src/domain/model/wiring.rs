use super::{Capability, CapabilityId, ModuleId, Namespace};

/// One fulfilled connection from a requirer to exactly one capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
    pub namespace: Namespace,
    pub capability: CapabilityId,
    pub requirer: ModuleId,
}

/// The realized linkage of one module at a point in time.
#[derive(Debug, Clone, Default)]
pub struct Wiring {
    pub module: ModuleId,
    /// `false` for stale wirings superseded by a refresh.
    pub in_use: bool,
    pub capabilities: Vec<Capability>,
    /// Wires other modules hold to this module's capabilities.
    pub provided_wires: Vec<Wire>,
    /// Wires this module holds to other modules' capabilities.
    pub required_wires: Vec<Wire>,
}

impl Wiring {
    pub fn new(module: ModuleId) -> Self {
        Self {
            module,
            in_use: true,
            ..Default::default()
        }
    }

    pub fn capabilities<'a>(
        &'a self,
        namespace: &'a Namespace,
    ) -> impl Iterator<Item = &'a Capability> + 'a {
        self.capabilities
            .iter()
            .filter(move |c| &c.namespace == namespace)
    }

    pub fn provided_wires<'a>(
        &'a self,
        namespace: &'a Namespace,
    ) -> impl Iterator<Item = &'a Wire> + 'a {
        self.provided_wires
            .iter()
            .filter(move |w| &w.namespace == namespace)
    }

    pub fn required_wires<'a>(
        &'a self,
        namespace: &'a Namespace,
    ) -> impl Iterator<Item = &'a Wire> + 'a {
        self.required_wires
            .iter()
            .filter(move |w| &w.namespace == namespace)
    }
}
