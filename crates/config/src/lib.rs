// Headline settings store and persistence

pub mod error;
pub mod export;
pub mod persistence;
pub mod store;

pub use error::PersistError;
pub use export::{export_settings, EXPORT_FILE_NAME};
pub use persistence::{
    deserialize_settings, serialize_settings, FileStore, KeyValueStore, MemoryStore, SETTINGS_KEY,
};
pub use store::{load_settings, read_settings, save_settings, SettingsStore};
