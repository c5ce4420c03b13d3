//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State could not be encoded as JSON.
    #[error("Failed to serialize stall state")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// State file exists but is not valid state JSON.
    #[error("Failed to parse stall state in {path}")]
    Deserialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Settings could not be encoded as TOML.
    #[error("Failed to serialize settings")]
    SettingsSerialization {
        #[source]
        source: toml::ser::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} {}", operation, path.display())
            }
            Self::Serialization { .. } | Self::SettingsSerialization { .. } => {
                "An error occurred while preparing the data for saving.".to_string()
            }
            Self::Deserialization { path, .. } => {
                format!(
                    "The saved stall state at {} could not be read. Starting with empty stalls.",
                    path.display()
                )
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::Serialization { .. } | Self::SettingsSerialization { .. } => None,
            Self::Deserialization { .. } => Some(
                "Re-enter the ear-tags and run an update to rebuild the stall state.".into(),
            ),
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
