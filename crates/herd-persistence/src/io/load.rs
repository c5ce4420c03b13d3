//! Reading the stall state.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::state::PersistedState;

/// Load the stall state.
///
/// A missing file is not an error: it means nothing was saved yet and
/// yields the empty default.
pub fn load_state(path: &Path) -> Result<PersistedState> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved stall state");
            return Ok(PersistedState::default());
        }
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let state: PersistedState =
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::Deserialization {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(path = %path.display(), "loaded stall state");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let state = load_state(&dir.path().join("state.json")).unwrap();
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"{ not json").unwrap();

        let result = load_state(&path);
        assert!(matches!(
            result,
            Err(PersistenceError::Deserialization { .. })
        ));
    }

    #[test]
    fn test_load_partial_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, br#"{"gruppenboxen": {"raw_ids": ["1", "frei", "leer"]}}"#).unwrap();

        let state = load_state(&path).unwrap();
        assert!(state.individual_pens.raw_ids.is_empty());
        assert_eq!(state.group_boxes.raw_ids.len(), 3);
        assert!(state.group_boxes.results.is_empty());
    }
}
