//! Settings persistence
//!
//! The store talks to a key-value collaborator that holds one serialized
//! `Settings` document under `SETTINGS_KEY`. Two backends ship here:
//! - `MemoryStore`: shared in-process map (tests, embedding)
//! - `FileStore`: one `<key>.json` file per key under the config dir
//!
//! Editor and preview each own a `SettingsStore`; they converge only through
//! this shared key (last write wins).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use headline_engine::Settings;

use crate::error::PersistError;

/// Key the serialized settings live under.
pub const SETTINGS_KEY: &str = "headlineSettings";

/// Minimal key-value collaborator.
pub trait KeyValueStore {
    /// Returns `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        (**self).set(key, value)
    }
}

// ============================================================================
// Codec
// ============================================================================

/// Encode settings as the persisted (and exported) document.
pub fn serialize_settings(settings: &Settings) -> Result<String, PersistError> {
    serde_json::to_string_pretty(settings).map_err(|e| PersistError::Encode(e.to_string()))
}

/// Decode a persisted document. Missing fields take their default value;
/// unknown fields are ignored.
pub fn deserialize_settings(text: &str) -> Result<Settings, PersistError> {
    let settings: Settings =
        serde_json::from_str(text).map_err(|e| PersistError::Decode(e.to_string()))?;
    settings.validate()?;
    Ok(settings)
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Cloneable handle to one shared map. Clones see each other's writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// File backend
// ============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Default location: `~/.config/headline/` (or `./headline/` when the
    /// platform has no config dir).
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("headline");
        Self { dir }
    }

    /// Root the store at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Atomic write: temp file then rename, so a crash never leaves a
    /// half-written document behind.
    fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.key_path(key);
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, value)?;
        fs::rename(&temp, &path)?;
        Ok(())
    }
}
