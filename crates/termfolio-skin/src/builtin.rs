//! Built-in theme definitions.
//!
//! Each theme is an embedded TOML document. The catalogue is closed: names
//! outside `builtin_names()` are rejected.

use termfolio_types::error::{Result, TermfolioError};

use crate::theme::{Theme, ThemePalette};

/// Theme used when nothing valid is stored.
pub const DEFAULT_THEME: &str = "dracula";

// ---------------------------------------------------------------------------
// dracula: purple accents on a dark slate background.
// ---------------------------------------------------------------------------

const DRACULA: &str = r##"
label = "Dracula"
background = "#282A36"
text = "#F8F8F2"
prompt = "#50FA7B"
primary = "#BD93F9"
secondary = "#FF79C6"
accent = "#8BE9FD"
border = "#44475A"
scrollbar = "#6272A4"
error = "#FF5555"
dim_text = "#6272A4"
input_background = "#21222C"
"##;

// ---------------------------------------------------------------------------
// github-light: light theme modeled on the GitHub UI.
// ---------------------------------------------------------------------------

const GITHUB_LIGHT: &str = r##"
label = "GitHub Light"
background = "#FFFFFF"
text = "#24292F"
prompt = "#116329"
primary = "#0969DA"
secondary = "#8250DF"
accent = "#1B7C83"
border = "#D0D7DE"
scrollbar = "#AFB8C1"
error = "#CF222E"
dim_text = "#57606A"
input_background = "#F6F8FA"
"##;

// ---------------------------------------------------------------------------
// monokai-pro: warm yellow/pink accents.
// ---------------------------------------------------------------------------

const MONOKAI_PRO: &str = r##"
label = "Monokai Pro"
background = "#2D2A2E"
text = "#FCFCFA"
prompt = "#A9DC76"
primary = "#FFD866"
secondary = "#FF6188"
accent = "#78DCE8"
border = "#403E41"
scrollbar = "#727072"
error = "#FF6188"
dim_text = "#939293"
input_background = "#221F22"
"##;

// ---------------------------------------------------------------------------
// nord: arctic blues.
// ---------------------------------------------------------------------------

const NORD: &str = r##"
label = "Nord"
background = "#2E3440"
text = "#D8DEE9"
prompt = "#A3BE8C"
primary = "#88C0D0"
secondary = "#B48EAD"
accent = "#81A1C1"
border = "#3B4252"
scrollbar = "#4C566A"
error = "#BF616A"
dim_text = "#616E88"
input_background = "#272C36"
"##;

// ---------------------------------------------------------------------------
// tokyo-night: deep night blues.
// ---------------------------------------------------------------------------

const TOKYO_NIGHT: &str = r##"
label = "Tokyo Night"
background = "#1A1B26"
text = "#C0CAF5"
prompt = "#9ECE6A"
primary = "#7AA2F7"
secondary = "#BB9AF7"
accent = "#7DCFFF"
border = "#292E42"
scrollbar = "#414868"
error = "#F7768E"
dim_text = "#565F89"
input_background = "#16161E"
"##;

// ---------------------------------------------------------------------------
// solarized-dark: the classic low-contrast palette.
// ---------------------------------------------------------------------------

const SOLARIZED_DARK: &str = r##"
label = "Solarized Dark"
background = "#002B36"
text = "#839496"
prompt = "#859900"
primary = "#268BD2"
secondary = "#D33682"
accent = "#2AA198"
border = "#073642"
scrollbar = "#586E75"
error = "#DC322F"
dim_text = "#586E75"
input_background = "#00212B"
"##;

// ---------------------------------------------------------------------------
// gruvbox: retro warm browns.
// ---------------------------------------------------------------------------

const GRUVBOX: &str = r##"
label = "Gruvbox"
background = "#282828"
text = "#EBDBB2"
prompt = "#B8BB26"
primary = "#FABD2F"
secondary = "#D3869B"
accent = "#83A598"
border = "#3C3836"
scrollbar = "#665C54"
error = "#FB4934"
dim_text = "#928374"
input_background = "#1D2021"
"##;

// ---------------------------------------------------------------------------
// one-dark: Atom's default dark palette.
// ---------------------------------------------------------------------------

const ONE_DARK: &str = r##"
label = "One Dark"
background = "#282C34"
text = "#ABB2BF"
prompt = "#98C379"
primary = "#61AFEF"
secondary = "#C678DD"
accent = "#56B6C2"
border = "#3E4451"
scrollbar = "#5C6370"
error = "#E06C75"
dim_text = "#5C6370"
input_background = "#21252B"
"##;

/// Catalogue in listing order.
const BUILTINS: [(&str, &str); 8] = [
    ("dracula", DRACULA),
    ("github-light", GITHUB_LIGHT),
    ("monokai-pro", MONOKAI_PRO),
    ("nord", NORD),
    ("tokyo-night", TOKYO_NIGHT),
    ("solarized-dark", SOLARIZED_DARK),
    ("gruvbox", GRUVBOX),
    ("one-dark", ONE_DARK),
];

/// Names of every built-in theme, in listing order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

/// Whether `name` is in the catalogue (case-sensitive).
pub fn is_builtin(name: &str) -> bool {
    BUILTINS.iter().any(|(n, _)| *n == name)
}

/// Load a built-in theme by name.
pub fn load_builtin(name: &str) -> Result<Theme> {
    let (_, source) = BUILTINS
        .iter()
        .find(|(n, _)| *n == name)
        .ok_or_else(|| TermfolioError::Theme(format!("unknown theme: {name}")))?;
    let palette: ThemePalette = toml::from_str(source)?;
    Ok(Theme::from_palette(name, &palette))
}

/// The default theme. Never fails: a broken embedded document degrades to
/// the compiled-in default palette.
pub fn default_theme() -> Theme {
    load_builtin(DEFAULT_THEME).unwrap_or_else(|e| {
        log::warn!("Default theme failed to load: {e}");
        Theme::from_palette(DEFAULT_THEME, &ThemePalette::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use termfolio_types::color::Color;

    #[test]
    fn all_builtins_load() {
        for name in builtin_names() {
            let theme = load_builtin(name).unwrap();
            assert_eq!(theme.name, name);
            assert!(!theme.label.is_empty());
        }
    }

    #[test]
    fn catalogue_order_and_size() {
        let names: Vec<_> = builtin_names().collect();
        assert_eq!(names.len(), 8);
        assert_eq!(names[0], "dracula");
        assert_eq!(names[7], "one-dark");
    }

    #[test]
    fn builtins_are_distinct() {
        let themes: Vec<Theme> = builtin_names().map(|n| load_builtin(n).unwrap()).collect();
        for (i, a) in themes.iter().enumerate() {
            for b in &themes[i + 1..] {
                assert_ne!(a.background, b.background, "{} vs {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn unknown_theme_rejected() {
        assert!(load_builtin("neon").is_err());
        assert!(!is_builtin("neon"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(is_builtin("nord"));
        assert!(!is_builtin("Nord"));
        assert!(load_builtin("NORD").is_err());
    }

    #[test]
    fn default_is_dracula() {
        let theme = default_theme();
        assert_eq!(theme.name, "dracula");
        assert_eq!(theme.background, Color::rgb(0x28, 0x2A, 0x36));
    }

    #[test]
    fn github_light_is_light() {
        let theme = load_builtin("github-light").unwrap();
        assert_eq!(theme.background, Color::WHITE);
    }
}
