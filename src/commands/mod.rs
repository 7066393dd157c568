//! Command entry points.
//!
//! Each command resolves its configuration, loads the registry snapshot,
//! runs one analysis and prints the rendered report to stdout.

pub mod config;
mod conflicts;
mod packages;

pub use config::{ColorMode, Config, Options};
pub use conflicts::{package_conflicts, render_conflicts};
pub use packages::{packages, render_packages};
