//! Runtime configuration.
//!
//! Every field has a default, so an empty (or absent) TOML file yields a
//! working configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// Environment variable naming a config file when no CLI argument is given.
pub const CONFIG_ENV_VAR: &str = "TERMFOLIO_CONFIG";

/// Top-level configuration for a termfolio session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TermfolioConfig {
    /// Prompt rendered before every submitted command.
    pub prompt: String,
    /// Theme used when no valid theme is stored.
    pub default_theme: String,
    /// Delay between boot sequence steps.
    pub boot_delay_ms: u64,
    /// Frame interval of the sleeping cat.
    pub cat_sleep_interval_ms: u64,
    /// Frame interval of the cat while it is being patted.
    pub cat_pat_interval_ms: u64,
    /// Toggle interval of the cat's "z" overlay.
    pub cat_idle_toggle_ms: u64,
    /// Whether the cat panel is shown at all.
    pub show_cat: bool,
    /// Output sample rate for synthesized tones.
    pub sample_rate: u32,
    /// Override for the preference file location.
    pub prefs_path: Option<PathBuf>,
}

impl Default for TermfolioConfig {
    fn default() -> Self {
        Self {
            prompt: "visitor@portfolio:~$".to_string(),
            default_theme: "dracula".to_string(),
            boot_delay_ms: 250,
            cat_sleep_interval_ms: 800,
            cat_pat_interval_ms: 250,
            cat_idle_toggle_ms: 3000,
            show_cat: true,
            sample_rate: 44_100,
            prefs_path: None,
        }
    }
}

impl TermfolioConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the config from an explicit path, then `TERMFOLIO_CONFIG`,
    /// falling back to defaults when neither is set.
    pub fn resolve(cli_path: Option<&str>) -> Result<Self> {
        let env_path = std::env::var(CONFIG_ENV_VAR).ok();
        match cli_path.map(str::to_string).or(env_path) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(TermfolioError::Config(
                "sample_rate must be greater than zero".to_string(),
            ));
        }
        if self.cat_sleep_interval_ms == 0 || self.cat_pat_interval_ms == 0 {
            return Err(TermfolioError::Config(
                "cat frame intervals must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
