//! The two persisted user preferences: theme and sound toggle.
//!
//! Values are read from the backing store once, at construction, and written
//! back on every change. Storage failures are logged and never surfaced.

use termfolio_skin::{Theme, builtin, resolve_theme};

use crate::storage::KeyValueStore;

/// Storage key holding the theme name.
pub const THEME_KEY: &str = "theme";
/// Storage key holding the JSON-encoded sound flag.
pub const SOUND_KEY: &str = "soundEnabled";

/// Process-wide preference state, injected into the terminal session.
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
    default_theme: String,
    theme: Theme,
    sound_enabled: bool,
}

impl PreferenceStore {
    /// Read both preferences from `store`.
    ///
    /// A missing or unknown stored theme resolves to `default_theme` (which
    /// itself falls back to the catalogue default if unknown).
    pub fn load(store: Box<dyn KeyValueStore>, default_theme: &str) -> Self {
        let mut prefs = Self {
            store,
            default_theme: default_theme.to_string(),
            theme: builtin::default_theme(),
            sound_enabled: false,
        };
        prefs.reload();
        prefs
    }

    /// Re-read both values from the backing store.
    pub fn reload(&mut self) {
        self.theme = match self.read(THEME_KEY) {
            Some(name) if builtin::is_builtin(&name) => resolve_theme(&name),
            Some(name) => {
                log::warn!("Stored theme '{name}' is not in the catalogue");
                resolve_theme(&self.default_theme)
            },
            None => resolve_theme(&self.default_theme),
        };
        self.sound_enabled = match self.read(SOUND_KEY) {
            Some(raw) => serde_json::from_str::<bool>(&raw).unwrap_or_else(|e| {
                log::warn!("Stored sound flag '{raw}' is not a JSON boolean: {e}");
                false
            }),
            None => false,
        };
        log::info!(
            "Preferences loaded: theme={} sound={}",
            self.theme.name,
            self.sound_enabled
        );
    }

    /// The active theme snapshot.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the named theme. Returns `false` and keeps the previous
    /// theme when the name is not in the catalogue.
    pub fn set_theme(&mut self, name: &str) -> bool {
        let Ok(theme) = builtin::load_builtin(name) else {
            return false;
        };
        if theme != self.theme {
            self.theme = theme;
            self.write(THEME_KEY, name);
            log::info!("Theme switched to {name}");
        }
        true
    }

    pub fn is_sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn set_sound_enabled(&mut self, enabled: bool) {
        if enabled == self.sound_enabled {
            return;
        }
        self.sound_enabled = enabled;
        // serde_json encodes a bool as the literal `true` / `false`.
        let encoded = serde_json::to_string(&enabled).unwrap_or_else(|_| enabled.to_string());
        self.write(SOUND_KEY, &encoded);
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).unwrap_or_else(|e| {
            log::warn!("Could not read preference '{key}': {e}");
            None
        })
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("Could not persist preference '{key}': {e}");
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("theme", &self.theme.name)
            .field("sound_enabled", &self.sound_enabled)
            .finish()
    }
}
