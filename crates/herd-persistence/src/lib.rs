//! Persistent storage for the herd stall tracker.
//!
//! Two files live in the per-user application directories:
//!
//! - `state.json`: entered ear-tags and reconciled results for the
//!   individual pens (`einzelplaetze`) and group boxes (`gruppenboxen`),
//!   rewritten in full after every change
//! - `settings.toml`: slaughter age and the last dataset folder
//!
//! Loading never blocks startup. A missing state file is an empty state, an
//! unreadable one is reported and replaced by an empty state. Loaded results
//! are refreshed through [`PersistedState::reprocess`] so ages follow the
//! calendar without the original dataset.
//!
//! # Example
//!
//! ```ignore
//! use herd_persistence::{AppPaths, StateStore};
//!
//! let paths = AppPaths::discover();
//! let store = StateStore::new(paths.state_file());
//! let loaded = store.open(&options);
//! ```

mod error;
mod io;
mod paths;
mod settings;
mod state;
mod store;

pub use error::{PersistenceError, Result};
pub use io::{load_state, save_state};
pub use paths::{AppPaths, SETTINGS_FILE_NAME, STATE_FILE_NAME};
pub use settings::Settings;
pub use state::PersistedState;
pub use store::{LoadedState, StateStore};
