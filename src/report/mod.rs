//! Rendering of analysis results as text.
//!
//! Reporters only format; they never touch the registry.

mod text;
mod theme;

use crate::analysis::{ConflictGroup, PackageExport};

pub use text::TextReporter;
pub use theme::Theme;

pub trait Reporter {
    /// Exporters of one package, each followed by its importers.
    fn packages(&self, name: &str, exports: &[PackageExport]) -> String;

    /// Conflict groups in discovery order.
    fn conflicts(&self, groups: &[ConflictGroup]) -> String;
}
