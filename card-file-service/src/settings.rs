//! Shared application settings (database path, config file location).
//!
//! Frontends use these functions so the settings file is always
//! `~/.config/card-file/settings.toml` and database-path resolution is
//! consistent across them.

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the shared settings file: `~/.config/card-file/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("card-file").join("settings.toml")
}

/// Default location of the database file, under the platform data directory.
pub fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("card-file").join("card-file.db")
}

/// Resolve the database path using a priority chain:
///
/// 1. Frontend override (if `Some`)
/// 2. Saved `storage.database_path` in `settings.toml`
/// 3. Platform default data directory
pub fn resolve_database_path(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(p) = override_path {
        return p;
    }
    if let Some(p) = load_database_path() {
        return p;
    }
    default_database_path()
}

/// Read `storage.database_path` from `settings.toml`, if set.
fn load_database_path() -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("storage")?.get("database_path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) the database path in `settings.toml`.
///
/// Uses `toml::Value` for a surgical update so unrelated frontend fields
/// are preserved.
pub fn save_database_path(path: Option<&Path>) -> io::Result<()> {
    let settings = settings_path();
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(&settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    // Ensure [storage] table exists
    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let storage = table
        .entry("storage")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let storage_table = storage
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[storage] is not a table"))?;

    match path {
        Some(p) => {
            storage_table.insert(
                "database_path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            storage_table.remove("database_path");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, &settings)?;

    Ok(())
}
