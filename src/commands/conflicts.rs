use anyhow::Result;
use log::info;

use super::{Config, Options};
use crate::{
    analysis,
    registry::{Registry, load_registry},
    report::Reporter,
    runtime::Runtime,
};

/// Show package names exported by more than one module
#[tracing::instrument(skip(runtime, options))]
pub fn package_conflicts<R: Runtime>(runtime: R, options: &Options) -> Result<()> {
    let config = Config::new(&runtime, options)?;
    let registry = load_registry(&runtime, &config.registry_path)?;
    print!("{}", render_conflicts(&registry, &config.reporter())?);
    Ok(())
}

pub fn render_conflicts<G: Registry + ?Sized, P: Reporter>(
    registry: &G,
    reporter: &P,
) -> Result<String> {
    let groups = analysis::package_conflicts(registry)?;
    info!("Found {} conflicting package(s)", groups.len());
    Ok(reporter.conflicts(&groups))
}
