//! In-memory registry and the builder that wires it up.
//!
//! The builder takes declarative module specs (the same shape as a registry
//! snapshot file), hands out capability ids, and resolves each import into a
//! wire recorded on both the provider's and the requirer's wiring.

use std::collections::{BTreeMap, HashMap, HashSet};

use anyhow::{Context, Result, bail};
use log::debug;
use serde::Deserialize;

use super::Registry;
use crate::domain::model::{
    Capability, CapabilityId, Module, ModuleId, ModuleState, Namespace, Version, Wire, Wiring,
    attr,
};

fn default_true() -> bool {
    true
}

/// Declaration of one module and its linkage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModuleSpec {
    pub id: ModuleId,
    pub symbolic_name: String,
    pub version: Version,
    pub state: ModuleState,
    /// `false` marks a stale wiring superseded by a refresh.
    #[serde(default = "default_true")]
    pub in_use: bool,
    /// `false` when the module has not been linked at all.
    #[serde(default = "default_true")]
    pub wiring: bool,
    #[serde(default)]
    pub exports: Vec<ExportSpec>,
    #[serde(default)]
    pub imports: Vec<ImportSpec>,
}

impl ModuleSpec {
    /// An active, linked module with no exports or imports.
    pub fn new(id: u64, symbolic_name: impl Into<String>, version: Version) -> Self {
        Self {
            id: ModuleId(id),
            symbolic_name: symbolic_name.into(),
            version,
            state: ModuleState::Active,
            in_use: true,
            wiring: true,
            exports: Vec::new(),
            imports: Vec::new(),
        }
    }

    pub fn state(mut self, state: ModuleState) -> Self {
        self.state = state;
        self
    }

    pub fn in_use(mut self, in_use: bool) -> Self {
        self.in_use = in_use;
        self
    }

    pub fn unwired(mut self) -> Self {
        self.wiring = false;
        self
    }

    pub fn export(mut self, export: ExportSpec) -> Self {
        self.exports.push(export);
        self
    }

    pub fn import(mut self, import: ImportSpec) -> Self {
        self.imports.push(import);
        self
    }
}

/// Declaration of one exported package.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportSpec {
    pub name: String,
    /// Kept as written; an unreadable version shows up as "no version".
    #[serde(default)]
    pub version: Option<String>,
    /// Directives (`uses`, `mandatory`, ...) and any other attributes.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl ExportSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    fn to_capability(&self, id: CapabilityId, owner: ModuleId) -> Capability {
        let mut attributes = self.attributes.clone();
        attributes.insert(attr::PACKAGE.to_string(), self.name.clone());
        if let Some(ref version) = self.version {
            attributes.insert(attr::VERSION.to_string(), version.clone());
        }
        Capability {
            id,
            namespace: Namespace::Package,
            owner,
            attributes,
        }
    }
}

/// Declaration of one fulfilled package import.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportSpec {
    pub package: String,
    /// Module whose export satisfies the import.
    pub provider: ModuleId,
    /// Picks among several exports of the same package by the provider.
    #[serde(default)]
    pub version: Option<String>,
}

impl ImportSpec {
    pub fn new(package: impl Into<String>, provider: u64) -> Self {
        Self {
            package: package.into(),
            provider: ModuleId(provider),
            version: None,
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Registry whose state is fixed at build time.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    modules: Vec<Module>,
    wirings: HashMap<ModuleId, Wiring>,
}

impl Registry for InMemoryRegistry {
    fn modules(&self) -> Result<Vec<Module>> {
        Ok(self.modules.clone())
    }

    fn wiring(&self, module: ModuleId) -> Result<Option<Wiring>> {
        Ok(self.wirings.get(&module).cloned())
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modules: Vec<ModuleSpec>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs(modules: Vec<ModuleSpec>) -> Self {
        Self { modules }
    }

    pub fn module(mut self, module: ModuleSpec) -> Self {
        self.modules.push(module);
        self
    }

    #[tracing::instrument(skip(self))]
    pub fn build(self) -> Result<InMemoryRegistry> {
        let mut ids = HashSet::new();
        for spec in &self.modules {
            if !ids.insert(spec.id) {
                bail!("Duplicate module id {}", spec.id);
            }
        }

        // Capability ids are handed out in declaration order, starting at 1
        let mut next_capability = 1u64;
        let mut wirings: HashMap<ModuleId, Wiring> = HashMap::new();
        for spec in &self.modules {
            if !spec.wiring {
                if !spec.exports.is_empty() || !spec.imports.is_empty() {
                    bail!(
                        "Module {} has no wiring but declares exports or imports",
                        spec.id
                    );
                }
                continue;
            }

            let mut wiring = Wiring::new(spec.id);
            wiring.in_use = spec.in_use;
            for export in &spec.exports {
                wiring
                    .capabilities
                    .push(export.to_capability(CapabilityId(next_capability), spec.id));
                next_capability += 1;
            }
            wirings.insert(spec.id, wiring);
        }

        for spec in &self.modules {
            for import in &spec.imports {
                let capability = resolve_import(&wirings, spec.id, import)?;
                let wire = Wire {
                    namespace: Namespace::Package,
                    capability,
                    requirer: spec.id,
                };
                debug!(
                    "Wired {} from module {} to module {}",
                    import.package, import.provider, spec.id
                );
                if let Some(provider) = wirings.get_mut(&import.provider) {
                    provider.provided_wires.push(wire.clone());
                }
                if let Some(requirer) = wirings.get_mut(&spec.id) {
                    requirer.required_wires.push(wire);
                }
            }
        }

        let modules = self
            .modules
            .into_iter()
            .map(|spec| Module::new(spec.id, spec.symbolic_name, spec.version, spec.state))
            .collect();

        Ok(InMemoryRegistry { modules, wirings })
    }
}

fn resolve_import(
    wirings: &HashMap<ModuleId, Wiring>,
    requirer: ModuleId,
    import: &ImportSpec,
) -> Result<CapabilityId> {
    let wanted = import
        .version
        .as_deref()
        .map(str::parse::<Version>)
        .transpose()
        .with_context(|| {
            format!(
                "Invalid version in import of {} by module {}",
                import.package, requirer
            )
        })?;

    let provider = wirings.get(&import.provider).with_context(|| {
        format!(
            "Module {} imports {} from module {} which is unknown or has no wiring",
            requirer, import.package, import.provider
        )
    })?;

    provider
        .capabilities(&Namespace::Package)
        .find(|c| {
            c.attribute(attr::PACKAGE) == Some(import.package.as_str())
                && wanted.as_ref().is_none_or(|w| {
                    c.attribute(attr::VERSION)
                        .and_then(|v| v.parse::<Version>().ok())
                        .as_ref()
                        == Some(w)
                })
        })
        .map(|c| c.id)
        .with_context(|| {
            format!(
                "Module {} does not export {} as imported by module {}",
                import.provider, import.package, requirer
            )
        })
}
