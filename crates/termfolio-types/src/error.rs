//! Error types for termfolio.

use std::io;

/// Errors produced by the termfolio crates.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    /// A command rejected its arguments. The message is shown to the user as-is.
    #[error("{0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("theme error: {0}")]
    Theme(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_error_display_is_bare_message() {
        let e = TermfolioError::Command("cat: missing file operand".into());
        assert_eq!(format!("{e}"), "cat: missing file operand");
    }

    #[test]
    fn config_error_display() {
        let e = TermfolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn storage_error_display() {
        let e = TermfolioError::Storage("read-only".into());
        assert_eq!(format!("{e}"), "storage error: read-only");
    }

    #[test]
    fn audio_error_display() {
        let e = TermfolioError::Audio("no device".into());
        assert_eq!(format!("{e}"), "audio error: no device");
    }

    #[test]
    fn theme_error_display() {
        let e = TermfolioError::Theme("unknown theme: neon".into());
        assert_eq!(format!("{e}"), "theme error: unknown theme: neon");
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: TermfolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: TermfolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: TermfolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }
}
