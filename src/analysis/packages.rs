use log::debug;

use super::{EligibleModule, WiringSnapshot, exported_packages, importers};
use crate::domain::model::{Module, PackageCapability, Version};

/// One exporter of a package and the modules wired to that export.
#[derive(Debug, Clone)]
pub struct PackageExport {
    pub exporter: Module,
    pub capability: PackageCapability,
    pub importers: Vec<Module>,
}

impl PackageExport {
    pub(crate) fn resolve(
        snapshot: &WiringSnapshot,
        exporter: &EligibleModule,
        capability: PackageCapability,
    ) -> Self {
        let importers = importers(snapshot, &capability);
        Self {
            exporter: exporter.module.clone(),
            capability,
            importers,
        }
    }

    /// `None` when the exporter declared no readable version.
    pub fn version(&self) -> Option<&Version> {
        self.capability.version.as_ref()
    }
}

/// Every export of the package called exactly `name`.
///
/// An unknown package yields an empty report.
pub fn package_report(snapshot: &WiringSnapshot, name: &str) -> Vec<PackageExport> {
    let mut report = Vec::new();
    for entry in snapshot.modules() {
        for capability in exported_packages(&entry.wiring) {
            if capability.name == name {
                report.push(PackageExport::resolve(snapshot, entry, capability));
            }
        }
    }
    debug!("Found {} exporter(s) of {}", report.len(), name);
    report
}
