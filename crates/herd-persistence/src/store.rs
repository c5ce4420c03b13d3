//! The state store used by the application controller.

use std::path::{Path, PathBuf};

use herd_transform::DerivationOptions;

use crate::error::{PersistenceError, Result};
use crate::io::{load_state, save_state};
use crate::state::PersistedState;

/// Result of opening the store at startup.
#[derive(Debug)]
pub struct LoadedState {
    pub state: PersistedState,
    /// Set when a saved state existed but could not be read. The state is
    /// then empty and the error should be shown to the operator.
    pub error: Option<PersistenceError>,
}

/// Durable home of the stall state.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, state: &PersistedState) -> Result<()> {
        save_state(state, &self.path)
    }

    pub fn load(&self) -> Result<PersistedState> {
        load_state(&self.path)
    }

    /// Loads the saved state and refreshes its derived fields.
    ///
    /// Never fails: an unreadable file yields the empty state together with
    /// the error that caused it.
    pub fn open(&self, options: &DerivationOptions) -> LoadedState {
        match self.load() {
            Ok(mut state) => {
                let refreshed = state.reprocess(options);
                tracing::debug!(refreshed, "stall state refreshed after load");
                LoadedState { state, error: None }
            }
            Err(error) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %error,
                    "falling back to empty stall state"
                );
                LoadedState {
                    state: PersistedState::default(),
                    error: Some(error),
                }
            }
        }
    }
}
