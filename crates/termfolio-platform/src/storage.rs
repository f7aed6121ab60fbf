//! Durable key/value storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use termfolio_types::error::{Result, TermfolioError};

/// String-keyed, string-valued durable storage.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Memory store
// ---------------------------------------------------------------------------

/// Volatile store for tests and sessions without a writable config dir.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-seeded with entries.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// File store
// ---------------------------------------------------------------------------

/// JSON-object file store. The whole map is rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store; a malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.is_file() {
            let text = std::fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened preference file {}", path.display());
        Ok(Self { path, entries })
    }

    /// Default location: `<config dir>/termfolio/prefs.json`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("termfolio").join("prefs.json"))
            .ok_or_else(|| TermfolioError::Storage("no config directory on this platform".into()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "nord").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("nord"));
        store.set("theme", "gruvbox").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("gruvbox"));
    }

    #[test]
    fn memory_store_seeded() {
        let store = MemoryStore::with_entries([("soundEnabled", "true")]);
        assert_eq!(store.get("soundEnabled").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("theme", "tokyo-night").unwrap();
            store.set("soundEnabled", "false").unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("tokyo-night"));
        assert_eq!(store.get("soundEnabled").unwrap().as_deref(), Some("false"));
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn file_store_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, TermfolioError::Json(_)));
    }

    #[test]
    fn file_store_blank_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "  \n").unwrap();
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }
}
