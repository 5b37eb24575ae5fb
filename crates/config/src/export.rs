//! One-way dump of the current settings to a file.
//!
//! The file content is byte-identical to what the store persists, so an
//! exported file can be dropped back into the backend as-is.

use std::fs;
use std::path::Path;

use headline_engine::Settings;

use crate::error::PersistError;
use crate::persistence::serialize_settings;

/// Suggested file name for exports.
pub const EXPORT_FILE_NAME: &str = "headline-settings.json";

/// Write `settings` to `path`, creating parent directories as needed.
pub fn export_settings(settings: &Settings, path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serialize_settings(settings)?;
    fs::write(path, json)?;
    Ok(())
}
