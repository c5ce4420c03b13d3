//! Writing files atomically.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::state::PersistedState;

/// Save the stall state as pretty-printed JSON.
///
/// The whole document is rewritten on every call.
pub fn save_state(state: &PersistedState, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(state)
        .map_err(|e| PersistenceError::Serialization { source: e })?;
    write_atomic(path, &bytes)?;

    tracing::info!(
        path = %path.display(),
        pens = state.individual_pens.results.len(),
        boxes = state.group_boxes.results.len(),
        "saved stall state"
    );
    Ok(())
}

/// Writes `bytes` to `path` through a temp file and rename, so a crash
/// mid-write never leaves a truncated file behind.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PersistenceError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| PersistenceError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    let written = file
        .write_all(bytes)
        .map_err(|e| ("write", e))
        .and_then(|()| file.sync_all().map_err(|e| ("sync", e)));
    drop(file);
    if let Err((operation, source)) = written {
        discard_temp(&temp_path);
        return Err(PersistenceError::Io {
            operation,
            path: temp_path,
            source,
        });
    }

    fs::rename(&temp_path, path).map_err(|e| {
        discard_temp(&temp_path);
        PersistenceError::AtomicWriteFailed {
            temp_path,
            target_path: path.to_path_buf(),
            source: e,
        }
    })
}

fn discard_temp(temp_path: &Path) {
    if let Err(error) = fs::remove_file(temp_path) {
        tracing::debug!(path = %temp_path.display(), error = %error, "temp file not removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        save_state(&PersistedState::default(), &path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_save_into_file_as_directory_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let result = save_state(&PersistedState::default(), &blocker.join("state.json"));

        assert!(matches!(result, Err(PersistenceError::Io { .. })));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), b"keeps the directory non-empty").unwrap();

        let result = save_state(&PersistedState::default(), &path);

        assert!(matches!(
            result,
            Err(PersistenceError::AtomicWriteFailed { .. })
        ));
        assert!(!dir.path().join("state.tmp").exists());
        assert!(path.join("occupied").exists());
    }
}
