//! Package wiring analysis.
//!
//! Every query starts from a fresh [`WiringSnapshot`] of the registry and
//! never mutates anything.
//!
//! # Structure
//!
//! - `snapshot` - Eligible (resolved/active, in-use) modules and their wirings
//! - `capabilities` - Exported package capabilities of a wiring
//! - `importers` - Modules wired to a given capability
//! - `packages` - Exporters and importers of one package name
//! - `conflicts` - Package names exported by more than one module

mod capabilities;
mod conflicts;
mod importers;
mod packages;
mod snapshot;

use anyhow::Result;

use crate::registry::Registry;

pub use capabilities::exported_packages;
pub use conflicts::{ConflictGroup, find_conflicts};
pub use importers::importers;
pub use packages::{PackageExport, package_report};
pub use snapshot::{EligibleModule, WiringSnapshot, eligible_modules};

/// Every exporter of `name` with its importers.
#[tracing::instrument(skip(registry))]
pub fn packages<G: Registry + ?Sized>(registry: &G, name: &str) -> Result<Vec<PackageExport>> {
    let snapshot = WiringSnapshot::capture(registry)?;
    Ok(package_report(&snapshot, name))
}

/// Every package name exported by more than one eligible module.
#[tracing::instrument(skip(registry))]
pub fn package_conflicts<G: Registry + ?Sized>(registry: &G) -> Result<Vec<ConflictGroup>> {
    let snapshot = WiringSnapshot::capture(registry)?;
    Ok(find_conflicts(&snapshot))
}
