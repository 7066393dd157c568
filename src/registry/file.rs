use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

use super::{InMemoryRegistry, ModuleSpec, RegistryBuilder};
use crate::runtime::Runtime;

/// A registry snapshot as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegistryFile {
    #[serde(default)]
    pub modules: Vec<ModuleSpec>,
}

impl RegistryFile {
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse registry snapshot")
    }

    pub fn into_registry(self) -> Result<InMemoryRegistry> {
        RegistryBuilder::from_specs(self.modules).build()
    }
}

/// Load the registry snapshot at `path`.
///
/// Any failure here means there is no registry to analyze at all.
#[tracing::instrument(skip(runtime))]
pub fn load_registry<R: Runtime>(runtime: &R, path: &Path) -> Result<InMemoryRegistry> {
    if !runtime.exists(path) {
        anyhow::bail!("Registry snapshot {} not found", path.display());
    }

    let content = runtime
        .read_to_string(path)
        .with_context(|| format!("Failed to read registry snapshot {}", path.display()))?;
    let file = RegistryFile::parse(&content)
        .with_context(|| format!("Invalid registry snapshot {}", path.display()))?;
    debug!("Loaded {} module(s) from {:?}", file.modules.len(), path);

    file.into_registry()
        .with_context(|| format!("Inconsistent registry snapshot {}", path.display()))
}
