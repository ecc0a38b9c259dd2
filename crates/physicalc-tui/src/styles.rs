//! TUI styles and color themes.

use physicalc_core::FfmiCategory;
use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Border style for the focused control.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

/// Display color for an FFMI category band.
#[must_use]
pub fn category_color(category: FfmiCategory) -> Color {
    match category {
        FfmiCategory::BelowAverage => Color::DarkGray,
        FfmiCategory::Average => Color::White,
        FfmiCategory::AboveAverage => Color::Cyan,
        FfmiCategory::Excellent => Color::Green,
        FfmiCategory::Superior => Color::LightGreen,
        FfmiCategory::NaturalLimit => Color::Yellow,
        FfmiCategory::Elite => Color::Red,
    }
}
