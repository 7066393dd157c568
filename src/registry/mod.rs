//! Module registry abstraction.
//!
//! The host owns the module graph; this crate only reads it through the
//! [`Registry`] trait. Every call is a live read, so two calls may observe
//! different states of the host.
//!
//! # Structure
//!
//! - `memory` - In-memory registry and its builder
//! - `file` - JSON registry snapshot files

mod file;
mod memory;

use anyhow::Result;

use crate::domain::model::{Module, ModuleId, Wiring};

pub use file::{RegistryFile, load_registry};
pub use memory::{ExportSpec, ImportSpec, InMemoryRegistry, ModuleSpec, RegistryBuilder};

#[cfg_attr(test, mockall::automock)]
pub trait Registry {
    /// Enumerate every module known to the host, in host order.
    ///
    /// Failure here means the host is unreachable and is fatal to a query.
    fn modules(&self) -> Result<Vec<Module>>;

    /// Current wiring of a module.
    ///
    /// `Ok(None)` when the module is not linked; `Err` when the host could
    /// not produce a wiring view. Callers treat both as "skip this module".
    fn wiring(&self, module: ModuleId) -> Result<Option<Wiring>>;
}
