//! Theme palette and the immutable theme snapshot built from it.
//!
//! A palette is the raw TOML form (hex strings). A `Theme` is the parsed,
//! immutable snapshot that history entries keep a copy of.

use serde::Deserialize;

use termfolio_types::color::{Color, parse_hex_color};

/// Color scheme as written in a theme TOML document.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemePalette {
    /// Human-readable name shown by `themes`.
    #[serde(default = "default_label")]
    pub label: String,
    /// Terminal background.
    #[serde(default = "default_bg")]
    pub background: String,
    /// Default output text.
    #[serde(default = "default_text")]
    pub text: String,
    /// Prompt color.
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Primary accent (headings, caret).
    #[serde(default = "default_primary")]
    pub primary: String,
    /// Secondary accent.
    #[serde(default = "default_secondary")]
    pub secondary: String,
    /// Tertiary accent (links, hints).
    #[serde(default = "default_accent")]
    pub accent: String,
    /// Panel borders.
    #[serde(default = "default_border")]
    pub border: String,
    /// Scrollbar thumb.
    #[serde(default = "default_scrollbar")]
    pub scrollbar: String,
    /// Error output.
    #[serde(default = "default_error")]
    pub error: String,
    /// Dimmed text (system messages).
    #[serde(default = "default_dim_text")]
    pub dim_text: String,
    /// Input line background.
    #[serde(default = "default_input_bg")]
    pub input_background: String,
}

fn default_label() -> String {
    "Dracula".to_string()
}
fn default_bg() -> String {
    "#282A36".to_string()
}
fn default_text() -> String {
    "#F8F8F2".to_string()
}
fn default_prompt() -> String {
    "#50FA7B".to_string()
}
fn default_primary() -> String {
    "#BD93F9".to_string()
}
fn default_secondary() -> String {
    "#FF79C6".to_string()
}
fn default_accent() -> String {
    "#8BE9FD".to_string()
}
fn default_border() -> String {
    "#44475A".to_string()
}
fn default_scrollbar() -> String {
    "#6272A4".to_string()
}
fn default_error() -> String {
    "#FF5555".to_string()
}
fn default_dim_text() -> String {
    "#6272A4".to_string()
}
fn default_input_bg() -> String {
    "#21222C".to_string()
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            label: default_label(),
            background: default_bg(),
            text: default_text(),
            prompt: default_prompt(),
            primary: default_primary(),
            secondary: default_secondary(),
            accent: default_accent(),
            border: default_border(),
            scrollbar: default_scrollbar(),
            error: default_error(),
            dim_text: default_dim_text(),
            input_background: default_input_bg(),
        }
    }
}

/// An immutable named palette.
///
/// History entries store their own copy, so switching themes never recolors
/// output that was already produced. `Theme::default()` is an unnamed,
/// all-black placeholder; real themes come from `load_builtin`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    /// Catalogue key (`dracula`, `nord`, ...).
    pub name: String,
    /// Display name.
    pub label: String,
    pub background: Color,
    pub text: Color,
    pub prompt: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub scrollbar: Color,
    pub error: Color,
    pub dim_text: Color,
    pub input_background: Color,
}

impl Theme {
    /// Build a snapshot from a palette. Malformed hex values fall back to the
    /// default palette's color for that slot.
    pub fn from_palette(name: &str, palette: &ThemePalette) -> Self {
        let fallback = ThemePalette::default();
        let pick = |value: &str, default: &str| -> Color {
            parse_hex_color(value).unwrap_or_else(|| {
                log::warn!("Theme '{name}': bad color '{value}', using {default}");
                parse_hex_color(default).unwrap_or(Color::BLACK)
            })
        };
        Self {
            name: name.to_string(),
            label: palette.label.clone(),
            background: pick(&palette.background, &fallback.background),
            text: pick(&palette.text, &fallback.text),
            prompt: pick(&palette.prompt, &fallback.prompt),
            primary: pick(&palette.primary, &fallback.primary),
            secondary: pick(&palette.secondary, &fallback.secondary),
            accent: pick(&palette.accent, &fallback.accent),
            border: pick(&palette.border, &fallback.border),
            scrollbar: pick(&palette.scrollbar, &fallback.scrollbar),
            error: pick(&palette.error, &fallback.error),
            dim_text: pick(&palette.dim_text, &fallback.dim_text),
            input_background: pick(&palette.input_background, &fallback.input_background),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_parses() {
        let theme = Theme::from_palette("dracula", &ThemePalette::default());
        assert_eq!(theme.name, "dracula");
        assert_eq!(theme.background, Color::rgb(0x28, 0x2A, 0x36));
        assert_eq!(theme.prompt, Color::rgb(0x50, 0xFA, 0x7B));
    }

    #[test]
    fn deserialize_from_toml() {
        let toml = r##"
label = "Test"
background = "#000000"
text = "#00FF00"
"##;
        let palette: ThemePalette = toml::from_str(toml).unwrap();
        let theme = Theme::from_palette("test", &palette);
        assert_eq!(theme.label, "Test");
        assert_eq!(theme.background, Color::BLACK);
        assert_eq!(theme.text, Color::rgb(0, 255, 0));
        // Unspecified slots use the default palette.
        assert_eq!(theme.error, Color::rgb(0xFF, 0x55, 0x55));
    }

    #[test]
    fn malformed_color_falls_back() {
        let palette = ThemePalette {
            border: "not-a-color".to_string(),
            ..ThemePalette::default()
        };
        let theme = Theme::from_palette("broken", &palette);
        assert_eq!(theme.border, Color::rgb(0x44, 0x47, 0x5A));
    }

    #[test]
    fn snapshots_compare_by_value() {
        let a = Theme::from_palette("a", &ThemePalette::default());
        let b = Theme::from_palette("b", &ThemePalette::default());
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
