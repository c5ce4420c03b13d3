//! Per-user locations of the state and settings files.

use std::path::{Path, PathBuf};

/// File name of the persisted stall state.
pub const STATE_FILE_NAME: &str = "state.json";
/// File name of the persisted settings.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Directories holding the application's files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl AppPaths {
    /// Platform locations, e.g. `~/.local/share/bestandsmanager` on Linux.
    ///
    /// Falls back to the working directory when no home directory is known.
    pub fn discover() -> Self {
        directories::ProjectDirs::from("", "RinderApp", "Bestandsmanager")
            .map(|dirs| Self {
                data_dir: dirs.data_dir().to_path_buf(),
                config_dir: dirs.config_dir().to_path_buf(),
            })
            .unwrap_or_else(|| Self::in_dir(Path::new(".")))
    }

    /// Keeps state and settings side by side in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            data_dir: dir.to_path_buf(),
            config_dir: dir.to_path_buf(),
        }
    }

    pub fn state_file(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE_NAME)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }
}
