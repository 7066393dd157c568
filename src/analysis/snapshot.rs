use anyhow::{Context, Result};
use log::debug;

use crate::domain::model::{Module, ModuleId, Wiring};
use crate::registry::Registry;

/// A resolved or active module together with its in-use wiring.
#[derive(Debug, Clone)]
pub struct EligibleModule {
    pub module: Module,
    pub wiring: Wiring,
}

/// Eligible modules, in registry enumeration order.
///
/// Captured with one pass over the registry at the start of a query. The
/// host may change underneath; the snapshot makes no attempt to notice.
#[derive(Debug, Clone, Default)]
pub struct WiringSnapshot {
    modules: Vec<EligibleModule>,
}

impl WiringSnapshot {
    #[tracing::instrument(skip(registry))]
    pub fn capture<G: Registry + ?Sized>(registry: &G) -> Result<Self> {
        Ok(Self {
            modules: eligible_modules(registry)?,
        })
    }

    pub fn modules(&self) -> &[EligibleModule] {
        &self.modules
    }

    pub fn get(&self, id: ModuleId) -> Option<&EligibleModule> {
        self.modules.iter().find(|m| m.module.id == id)
    }
}

/// Modules that are resolved or active and whose wiring is in use.
///
/// Only the enumeration itself can fail. A module whose wiring cannot be
/// obtained is left out.
pub fn eligible_modules<G: Registry + ?Sized>(registry: &G) -> Result<Vec<EligibleModule>> {
    let modules = registry
        .modules()
        .context("Failed to enumerate modules from the registry")?;
    debug!("Registry lists {} module(s)", modules.len());

    let mut eligible = Vec::new();
    for module in modules {
        if !module.state.is_countable() {
            debug!("Skipping {}: state is {}", module, module.state);
            continue;
        }

        let wiring = match registry.wiring(module.id) {
            Ok(Some(wiring)) => wiring,
            Ok(None) => {
                debug!("Skipping {}: no wiring", module);
                continue;
            }
            Err(e) => {
                debug!("Skipping {}: failed to get wiring: {}", module, e);
                continue;
            }
        };

        // Stale wirings are dead linkage
        if !wiring.in_use {
            debug!("Skipping {}: wiring not in use", module);
            continue;
        }

        eligible.push(EligibleModule { module, wiring });
    }

    Ok(eligible)
}
