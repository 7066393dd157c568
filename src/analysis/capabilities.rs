use log::debug;

use crate::domain::model::{
    Capability, Directives, Namespace, PackageCapability, Version, Wiring, attr,
};

/// Exported package capabilities of a wiring, in wiring order.
pub fn exported_packages(wiring: &Wiring) -> Vec<PackageCapability> {
    wiring
        .capabilities(&Namespace::Package)
        .filter_map(to_package)
        .collect()
}

fn to_package(capability: &Capability) -> Option<PackageCapability> {
    let Some(name) = capability.attribute(attr::PACKAGE) else {
        debug!(
            "Capability {} of module {} has no package name",
            capability.id, capability.owner
        );
        return None;
    };

    // A version that cannot be read is treated like a missing one
    let version = capability
        .attribute(attr::VERSION)
        .and_then(|raw| match raw.parse::<Version>() {
            Ok(version) => Some(version),
            Err(e) => {
                debug!("Ignoring version '{}' of package {}: {}", raw, name, e);
                None
            }
        });

    Some(PackageCapability {
        id: capability.id,
        name: name.to_string(),
        version,
        owner: capability.owner,
        directives: Directives::from_attributes(&capability.attributes),
    })
}
