//! Theme configuration for the player and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the slideshow) and ANSI escape codes
//! (for plain CLI output such as `explainer sections`).

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Named themes selectable from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Default,
    Classic,
    Ocean,
}

impl ThemeName {
    /// Build the theme this name refers to.
    pub fn theme(self) -> Theme {
        match self {
            ThemeName::Default => Theme::electric(),
            ThemeName::Classic => Theme::classic(),
            ThemeName::Ocean => Theme::ocean(),
        }
    }
}

/// Theme configuration for the slideshow.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (slide body)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, notes)
    pub text_secondary: Color,
    /// Accent color for titles, the playhead and the active indicator
    pub accent: Color,
    /// Color of subtitles and bullets
    pub highlight: Color,
    /// Elapsed part of the progress bar
    pub bar_filled: Color,
    /// Remaining part of the progress bar and future indicators
    pub bar_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::electric()
    }
}

impl Theme {
    /// Default theme - blue titles with pink highlights.
    pub fn electric() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightBlue,
            highlight: Color::LightMagenta,
            bar_filled: Color::Blue,
            bar_empty: Color::DarkGray,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            highlight: Color::Green,
            bar_filled: Color::Green,
            bar_empty: Color::DarkGray,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            highlight: Color::Blue,
            bar_filled: Color::Cyan,
            bar_empty: Color::DarkGray,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (titles, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_electric() {
        let theme = Theme::default();
        assert_eq!(theme.accent, Color::LightBlue);
        assert_eq!(theme.text_primary, Color::Gray);
    }

    #[test]
    fn theme_names_map_to_themes() {
        assert_eq!(ThemeName::Classic.theme().text_primary, Color::White);
        assert_eq!(ThemeName::Ocean.theme().text_primary, Color::Cyan);
        assert_eq!(ThemeName::default(), ThemeName::Default);
    }

    #[test]
    fn theme_name_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: ThemeName,
        }
        let w: Wrapper = toml::from_str("theme = \"ocean\"").unwrap();
        assert_eq!(w.theme, ThemeName::Ocean);
    }

    #[test]
    fn style_helpers_return_correct_colors() {
        let theme = Theme::classic();
        assert_eq!(theme.text_style().fg, Some(Color::White));
        assert_eq!(theme.text_secondary_style().fg, Some(Color::DarkGray));
        assert_eq!(theme.accent_style().fg, Some(Color::Yellow));
        assert!(theme
            .accent_bold_style()
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::classic();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[33m")); // Yellow
        assert!(accent.ends_with("\x1b[0m"));
        assert!(accent.contains("test"));

        let secondary = theme.secondary_text("hello");
        assert!(secondary.starts_with("\x1b[90m"));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::LightBlue), "\x1b[94m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
