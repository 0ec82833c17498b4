//! Page styling.
//!
//! Maps document row roles and navigation states to ratatui styles. With
//! colors disabled every style falls back to modifiers only, so headings
//! stay bold and unrevealed cards stay dim.

use crate::view_state::RowRole;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PageStyles =====

/// Styles for everything drawn on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageStyles {
    colors: bool,
}

/// Background tints of the three orbs, back to front.
const ORB_COLORS: [Color; 3] = [
    Color::Rgb(30, 41, 82),
    Color::Rgb(58, 30, 82),
    Color::Rgb(82, 30, 60),
];

impl PageStyles {
    /// Styles for a color configuration.
    pub fn new(config: ColorConfig) -> Self {
        Self {
            colors: config.colors_enabled(),
        }
    }

    fn fg(&self, color: Color) -> Style {
        if self.colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Style for a document row.
    pub fn row(&self, role: RowRole) -> Style {
        let bold = Modifier::BOLD;
        match role {
            RowRole::Blank | RowRole::Rule => self.fg(Color::DarkGray),
            RowRole::Title => self.fg(Color::LightMagenta).add_modifier(bold),
            RowRole::Typewriter => self.fg(Color::Gray),
            RowRole::Heading => self.fg(Color::White).add_modifier(bold),
            RowRole::Subtitle | RowRole::Muted => self.fg(Color::DarkGray),
            RowRole::CardTitle => self.fg(Color::White).add_modifier(bold),
            RowRole::Accent => self.fg(Color::LightBlue).add_modifier(bold),
            RowRole::Body => self.fg(Color::Gray),
            RowRole::Button => {
                if self.colors {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(bold)
                } else {
                    Style::default().add_modifier(Modifier::REVERSED | bold)
                }
            }
            RowRole::Link => self.fg(Color::LightCyan).add_modifier(Modifier::UNDERLINED),
        }
    }

    /// Extra modifier for a card row not yet scrolled into view.
    pub fn unrevealed(&self) -> Modifier {
        Modifier::DIM
    }

    /// Typewriter cursor.
    pub fn cursor(&self) -> Style {
        self.fg(Color::LightBlue).add_modifier(Modifier::SLOW_BLINK)
    }

    /// Nav bar background.
    pub fn nav_bar(&self) -> Style {
        if self.colors {
            Style::default().bg(Color::Rgb(17, 24, 39)).fg(Color::Gray)
        } else {
            Style::default()
        }
    }

    /// Brand text at the left of the nav bar.
    pub fn nav_brand(&self) -> Style {
        self.fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// Nav bar or indicator entry.
    pub fn nav_item(&self, active: bool) -> Style {
        match (active, self.colors) {
            (true, true) => Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            (false, _) => self.fg(Color::Gray),
        }
    }

    /// Background tint for orb `index`, or `None` without colors.
    pub fn orb(&self, index: usize) -> Option<Color> {
        if self.colors {
            ORB_COLORS.get(index).copied()
        } else {
            None
        }
    }

    /// Help overlay border.
    pub fn help_border(&self) -> Style {
        self.fg(Color::Cyan)
    }

    /// Help overlay category heading.
    pub fn help_category(&self) -> Style {
        self.fg(Color::LightMagenta).add_modifier(Modifier::BOLD)
    }

    /// Help overlay key column.
    pub fn help_key(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Help overlay description column.
    pub fn help_description(&self) -> Style {
        self.fg(Color::White)
    }
}

impl Default for PageStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
