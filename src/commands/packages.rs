use anyhow::Result;
use log::debug;

use super::{Config, Options};
use crate::{
    analysis,
    registry::{Registry, load_registry},
    report::Reporter,
    runtime::Runtime,
};

/// Show every exporter of a package and the modules importing it
#[tracing::instrument(skip(runtime, options))]
pub fn packages<R: Runtime>(runtime: R, name: &str, options: &Options) -> Result<()> {
    let config = Config::new(&runtime, options)?;
    let registry = load_registry(&runtime, &config.registry_path)?;
    print!("{}", render_packages(&registry, &config.reporter(), name)?);
    Ok(())
}

pub fn render_packages<G: Registry + ?Sized, P: Reporter>(
    registry: &G,
    reporter: &P,
    name: &str,
) -> Result<String> {
    let exports = analysis::packages(registry, name)?;
    if exports.is_empty() {
        debug!("No module exports {}", name);
    }
    Ok(reporter.packages(name, &exports))
}
