//! Styling for the box view.

use ratatui::style::{Color, Modifier, Style};

/// Whether colors are enabled, from the `--no-color` flag and `NO_COLOR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// `--no-color` wins; otherwise any `NO_COLOR` value disables colors.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles for each part of the box view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyles {
    /// Readout labels ("Current font size").
    pub label: Style,
    /// Readout values.
    pub value: Style,
    /// Container border.
    pub border: Style,
    /// Row text.
    pub row: Style,
    /// Status bar.
    pub status: Style,
}

impl BoxStyles {
    /// Styles for the given color setting.
    pub fn for_colors(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self::default()
        } else {
            Self::plain()
        }
    }

    /// No colors; only modifiers that survive monochrome terminals.
    pub fn plain() -> Self {
        Self {
            label: Style::default(),
            value: Style::default().add_modifier(Modifier::BOLD),
            border: Style::default(),
            row: Style::default(),
            status: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

impl Default for BoxStyles {
    fn default() -> Self {
        Self {
            label: Style::default(),
            value: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Red),
            row: Style::default(),
            status: Style::default().fg(Color::DarkGray),
        }
    }
}
