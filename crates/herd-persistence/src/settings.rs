//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup and saved when changed.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use herd_model::SlaughterAge;

use crate::error::{PersistenceError, Result};
use crate::io::write_atomic;

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Age in months used for projected slaughter dates.
    pub slaughter_age: SlaughterAge,

    /// Folder of the most recently imported dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_dataset_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a specific path.
    ///
    /// Missing or unreadable settings fall back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Self::default(),
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "could not read settings file, using defaults"
                );
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "ignoring invalid settings file"
                );
                Self::default()
            }
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PersistenceError::SettingsSerialization { source: e })?;
        write_atomic(path, content.as_bytes())?;
        tracing::debug!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Remembers the folder of an imported dataset file.
    pub fn remember_dataset(&mut self, dataset: &Path) {
        if let Some(parent) = dataset.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_dataset_dir = Some(parent.to_path_buf());
        }
    }
}
