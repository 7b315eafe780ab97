//! User settings for catalog snapshot handling.
//!
//! Settings live in `~/.config/tf2-schema/settings.toml`:
//!
//! ```toml
//! [catalog]
//! snapshot_path = "/srv/trading/schema.json"
//! max_age_hours = 24
//! ```

use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::snapshot::default_snapshot_path;

const DEFAULT_MAX_AGE_HOURS: i64 = 24;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Where the persisted snapshot lives; the cache directory when unset.
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
    /// Snapshots older than this are due for a refresh.
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: i64,
}

fn default_max_age_hours() -> i64 {
    DEFAULT_MAX_AGE_HOURS
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            max_age_hours: DEFAULT_MAX_AGE_HOURS,
        }
    }
}

impl CatalogSettings {
    pub fn max_age(&self) -> Duration {
        Duration::hours(self.max_age_hours)
    }
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("tf2-schema").join("settings.toml")
}

/// Load settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SchemaError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Write settings to `path` atomically.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SchemaError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(settings)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, serialized)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Resolve the snapshot path using a priority chain:
///
/// 1. Explicit override (if `Some`)
/// 2. `catalog.snapshot_path` from settings
/// 3. The default cache location
pub fn resolve_snapshot_path(
    explicit: Option<PathBuf>,
    settings: &Settings,
) -> Result<PathBuf, SchemaError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = &settings.catalog.snapshot_path {
        return Ok(path.clone());
    }
    default_snapshot_path()
}
