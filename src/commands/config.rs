use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::report::{TextReporter, Theme};
use crate::runtime::Runtime;

/// When to color the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Options shared by every command, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub registry: Option<PathBuf>,
    pub color: ColorMode,
}

/// Resolved configuration for one command run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub registry_path: PathBuf,
    pub color: bool,
}

impl Config {
    pub fn new<R: Runtime>(runtime: &R, options: &Options) -> Result<Self> {
        let registry_path = match options.registry {
            Some(ref path) => path.clone(),
            None => default_registry_path(runtime)?,
        };
        debug!("Using registry snapshot {:?}", registry_path);

        let color = match options.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                runtime.env_var("NO_COLOR").is_err() && runtime.stdout_is_terminal()
            }
        };

        Ok(Self {
            registry_path,
            color,
        })
    }

    pub fn reporter(&self) -> TextReporter {
        TextReporter::new(Theme::for_color(self.color))
    }
}

/// `<config dir>/wirecheck/registry.json`
pub fn default_registry_path<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let config_dir = runtime
        .config_dir()
        .context("Could not find configuration directory")?;
    Ok(config_dir.join("wirecheck").join("registry.json"))
}
