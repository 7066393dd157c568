use log::debug;

use super::WiringSnapshot;
use crate::domain::model::{Module, Namespace, PackageCapability};

/// Modules holding a package wire to exactly `capability`.
///
/// Walks the provided wires of the exporting module's wiring, in wiring
/// order. Requirers that are not themselves eligible are left out.
pub fn importers(snapshot: &WiringSnapshot, capability: &PackageCapability) -> Vec<Module> {
    let Some(exporter) = snapshot.get(capability.owner) else {
        debug!(
            "Exporter {} of {} is not in the snapshot",
            capability.owner, capability.name
        );
        return Vec::new();
    };

    exporter
        .wiring
        .provided_wires(&Namespace::Package)
        .filter(|wire| wire.capability == capability.id)
        .filter_map(|wire| match snapshot.get(wire.requirer) {
            Some(requirer) => Some(requirer.module.clone()),
            None => {
                debug!(
                    "Ignoring importer {} of {}: not resolved or not in use",
                    wire.requirer, capability.name
                );
                None
            }
        })
        .collect()
}
