use std::collections::BTreeSet;

use log::debug;

use super::{EligibleModule, PackageExport, WiringSnapshot, exported_packages};
use crate::domain::model::PackageCapability;

/// A package name exported by more than one eligible module.
#[derive(Debug, Clone)]
pub struct ConflictGroup {
    pub name: String,
    /// First exporter met in registry order.
    pub origin: PackageExport,
    /// Every other exporter, in registry order then wiring order.
    pub others: Vec<PackageExport>,
}

impl ConflictGroup {
    /// Origin first, then the other exporters.
    pub fn exporters(&self) -> impl Iterator<Item = &PackageExport> {
        std::iter::once(&self.origin).chain(self.others.iter())
    }
}

/// Exported packages of each eligible module, computed once per scan.
type ExportIndex<'a> = Vec<(&'a EligibleModule, Vec<PackageCapability>)>;

/// Find every package name exported by at least two distinct eligible
/// modules. Each name is reported once, grouped under the first module that
/// exports it.
pub fn find_conflicts(snapshot: &WiringSnapshot) -> Vec<ConflictGroup> {
    let index: ExportIndex<'_> = snapshot
        .modules()
        .iter()
        .map(|entry| (entry, exported_packages(&entry.wiring)))
        .collect();

    let mut reported: BTreeSet<String> = BTreeSet::new();
    let mut groups = Vec::new();
    for (origin, capabilities) in &index {
        for capability in capabilities {
            if reported.contains(&capability.name) {
                continue;
            }

            let duplicates = find_duplicates(&index, origin, &capability.name);
            if duplicates.is_empty() {
                continue;
            }

            debug!(
                "Package {} exported by {} and {} other module export(s)",
                capability.name,
                origin.module,
                duplicates.len()
            );
            reported.insert(capability.name.clone());

            groups.push(ConflictGroup {
                name: capability.name.clone(),
                origin: PackageExport::resolve(snapshot, origin, capability.clone()),
                others: duplicates
                    .into_iter()
                    .map(|(entry, duplicate)| {
                        PackageExport::resolve(snapshot, entry, duplicate.clone())
                    })
                    .collect(),
            });
        }
    }

    groups
}

/// Exports of `name` by any eligible module other than `origin`.
fn find_duplicates<'a>(
    index: &'a ExportIndex<'a>,
    origin: &EligibleModule,
    name: &str,
) -> Vec<(&'a EligibleModule, &'a PackageCapability)> {
    index
        .iter()
        .filter(|(entry, _)| entry.wiring.module != origin.wiring.module)
        .flat_map(|(entry, capabilities)| {
            capabilities
                .iter()
                .filter(move |c| c.name == name)
                .map(move |c| (*entry, c))
        })
        .collect()
}
