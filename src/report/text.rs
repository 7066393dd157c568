use std::fmt::{self, Write};

use super::{Reporter, Theme};
use crate::analysis::{ConflictGroup, PackageExport};
use crate::domain::model::Module;

const IMPORTED_BY: &str = "imported by";

/// Line-oriented text reporter.
#[derive(Debug, Clone, Default)]
pub struct TextReporter {
    theme: Theme,
}

impl TextReporter {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    fn importer_line(
        out: &mut String,
        indent: &str,
        label: impl fmt::Display,
        importer: &Module,
    ) {
        let _ = writeln!(out, "{}{} {}", indent, label, importer);
    }

    fn exporter_line(&self, out: &mut String, export: &PackageExport) {
        let module = &export.exporter;
        out.push_str("  ");
        if let Some(version) = export.version() {
            let _ = write!(out, "version <{}> ", self.theme.version.apply_to(version));
        }
        let _ = write!(
            out,
            "exported by {}/{} [{}]",
            self.theme.name.apply_to(&module.symbolic_name),
            module.version,
            module.id
        );
        for (key, value) in export.capability.directives.present() {
            let _ = write!(out, " {}:={}", key, value);
        }
        out.push('\n');
    }
}

impl Reporter for TextReporter {
    fn packages(&self, name: &str, exports: &[PackageExport]) -> String {
        let mut out = String::new();
        for export in exports {
            let name = self.theme.name.apply_to(name);
            let _ = match export.version() {
                Some(version) => writeln!(out, "{} {} from {}", name, version, export.exporter),
                None => writeln!(out, "{} from {}", name, export.exporter),
            };
            for importer in &export.importers {
                Self::importer_line(
                    &mut out,
                    "  ",
                    self.theme.label.apply_to(IMPORTED_BY),
                    importer,
                );
            }
        }
        out
    }

    fn conflicts(&self, groups: &[ConflictGroup]) -> String {
        let mut out = String::new();
        for group in groups {
            let _ = writeln!(
                out,
                "Package {} has potential conflicts between:",
                self.theme.name.apply_to(&group.name)
            );
            for export in group.exporters() {
                self.exporter_line(&mut out, export);
                for importer in &export.importers {
                    Self::importer_line(&mut out, "    ", IMPORTED_BY, importer);
                }
            }
        }
        out
    }
}
