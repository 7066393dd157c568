//! Visual styling for reports.

use console::Style;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Package names and exporter symbolic names (bold).
    pub name: Style,
    /// Conflicting versions (red).
    pub version: Style,
    /// The "imported by" label of `packages` output (dim).
    pub label: Style,
}

impl Theme {
    pub fn colored() -> Self {
        Self {
            name: Style::new().bold().force_styling(true),
            version: Style::new().red().force_styling(true),
            label: Style::new().dim().force_styling(true),
        }
    }

    /// A theme without colors (for non-TTY or `--color never`).
    pub fn plain() -> Self {
        Self {
            name: Style::new().force_styling(false),
            version: Style::new().force_styling(false),
            label: Style::new().force_styling(false),
        }
    }

    pub fn for_color(color: bool) -> Self {
        if color { Self::colored() } else { Self::plain() }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}
