//! Theme system: a closed catalogue of named color palettes.
//!
//! Palettes are embedded TOML documents parsed into immutable `Theme`
//! snapshots. A snapshot is copied into every history entry so output keeps
//! the colors it was produced with.

pub mod builtin;
pub mod theme;

pub use builtin::{DEFAULT_THEME, builtin_names, default_theme, is_builtin, load_builtin};
pub use theme::{Theme, ThemePalette};

/// Resolve a theme by name, falling back to the default theme with a warning.
pub fn resolve_theme(name: &str) -> Theme {
    match load_builtin(name) {
        Ok(theme) => theme,
        Err(e) => {
            log::warn!("{e} -- falling back to {DEFAULT_THEME}");
            default_theme()
        },
    }
}
