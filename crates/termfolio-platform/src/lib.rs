//! Platform service abstractions for termfolio.
//!
//! `KeyValueStore` is the durable client-side storage seam (a JSON file on
//! desktop, a map in tests). `PreferenceStore` sits on top of it and owns the
//! two persisted flags: active theme and sound toggle.

pub mod preferences;
pub mod storage;

pub use preferences::{PreferenceStore, SOUND_KEY, THEME_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
