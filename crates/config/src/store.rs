//! Headline settings store
//!
//! Holds the current `Settings` for one view (editor or preview) and writes
//! every applied mutation straight through to the persistence backend.
//! Persistence is best-effort: read and write failures are logged, never
//! returned, and the in-memory value stays the source of truth.

use std::path::Path;

use headline_engine::model::{MAX_GRADIENT_COLORS, MIN_GRADIENT_COLORS};
use headline_engine::{present, Presentation, SettingUpdate, Settings, UpdateError};

use crate::error::PersistError;
use crate::export::export_settings;
use crate::persistence::{deserialize_settings, serialize_settings, KeyValueStore, SETTINGS_KEY};

pub struct SettingsStore<S: KeyValueStore> {
    backend: S,
    settings: Settings,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Load the persisted settings, or the default configuration when the
    /// key is absent, unreadable or malformed.
    pub fn initialize(backend: S) -> Self {
        let settings = load_settings(&backend);
        Self { backend, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Replace one field.
    pub fn update(&mut self, update: SettingUpdate) -> &Settings {
        let next = self.settings.with(update);
        self.commit(next)
    }

    /// Replace one field addressed by its wire key, e.g. `("fontSize", 90)`.
    /// Unknown keys and mistyped values leave the store untouched.
    pub fn update_key(&mut self, key: &str, value: serde_json::Value) -> Result<&Settings, UpdateError> {
        let update = SettingUpdate::from_key(key, value)?;
        Ok(self.update(update))
    }

    /// Append the default gradient color. No-op at the maximum.
    pub fn add_gradient_color(&mut self) -> &Settings {
        if self.settings.gradient_colors.len() >= MAX_GRADIENT_COLORS {
            log::debug!("Gradient already has {} colors", MAX_GRADIENT_COLORS);
            return &self.settings;
        }
        let next = self.settings.with_gradient_color_added();
        self.commit(next)
    }

    /// Remove the gradient color at `index`. No-op at the minimum or for an
    /// out-of-range index.
    pub fn remove_gradient_color(&mut self, index: usize) -> &Settings {
        let len = self.settings.gradient_colors.len();
        if len <= MIN_GRADIENT_COLORS || index >= len {
            log::debug!("Ignoring removal of gradient color {} of {}", index, len);
            return &self.settings;
        }
        let next = self.settings.with_gradient_color_removed(index);
        self.commit(next)
    }

    /// Replace one gradient color. No-op for an out-of-range index.
    pub fn update_gradient_color(&mut self, index: usize, color: impl Into<String>) -> &Settings {
        if index >= self.settings.gradient_colors.len() {
            return &self.settings;
        }
        let next = self.settings.with_gradient_color(index, color);
        self.commit(next)
    }

    /// Replace the whole gradient list. No-op unless the preset has a legal
    /// number of colors.
    pub fn apply_gradient_preset(&mut self, colors: &[&str]) -> &Settings {
        if !(MIN_GRADIENT_COLORS..=MAX_GRADIENT_COLORS).contains(&colors.len()) {
            log::debug!("Ignoring gradient preset with {} colors", colors.len());
            return &self.settings;
        }
        let next = self.settings.with_gradient_preset(colors);
        self.commit(next)
    }

    /// Discard all edits and return to the default configuration.
    pub fn reset(&mut self) -> &Settings {
        self.commit(Settings::default())
    }

    /// Re-read the shared key and adopt whatever another view last wrote.
    /// Returns true when the in-memory value changed.
    ///
    /// Only a successfully decoded value is adopted. An absent key, a read
    /// failure or a malformed blob leaves the current value in place.
    pub fn reload(&mut self) -> bool {
        let loaded = match read_settings(&self.backend) {
            Ok(Some(settings)) => settings,
            Ok(None) => return false,
            Err(e) => {
                log::warn!("Keeping current settings; reload failed: {}", e);
                return false;
            }
        };
        if loaded == self.settings {
            return false;
        }
        log::debug!("Adopted newer settings from backend");
        self.settings = loaded;
        true
    }

    /// Recompute style and animation plan for the current settings.
    pub fn present(&self) -> Presentation {
        present(&self.settings)
    }

    /// Write the current settings to a file, same encoding as persisted.
    pub fn export_to(&self, path: &Path) -> Result<(), PersistError> {
        export_settings(&self.settings, path)
    }

    /// Swap in `next` and write it through. Always writes, even when `next`
    /// equals the current value.
    fn commit(&mut self, next: Settings) -> &Settings {
        self.settings = next;
        if let Err(e) = save_settings(&self.backend, &self.settings) {
            log::warn!("Failed to persist headline settings: {}", e);
        }
        &self.settings
    }
}

/// Read settings from the backend, falling back to defaults.
///
/// This is intentional - a broken blob should never keep a view from
/// rendering.
pub fn load_settings<S: KeyValueStore + ?Sized>(backend: &S) -> Settings {
    match read_settings(backend) {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            log::debug!("No persisted settings; using defaults");
            Settings::default()
        }
        Err(e) => {
            log::warn!("Ignoring persisted settings ({}); using defaults", e);
            Settings::default()
        }
    }
}

/// Read and decode settings under `SETTINGS_KEY`. `Ok(None)` when absent.
pub fn read_settings<S: KeyValueStore + ?Sized>(backend: &S) -> Result<Option<Settings>, PersistError> {
    backend
        .get(SETTINGS_KEY)?
        .map(|raw| deserialize_settings(&raw))
        .transpose()
}

/// Serialize and write settings under `SETTINGS_KEY`.
pub fn save_settings<S: KeyValueStore + ?Sized>(backend: &S, settings: &Settings) -> Result<(), PersistError> {
    let json = serialize_settings(settings)?;
    backend.set(SETTINGS_KEY, &json)
}
