//! The stall session: settings, state and the operations the commands run.
//!
//! A [`Stable`] is opened once per invocation. Opening loads settings and
//! state and refreshes every resolved place for the current date, so ages
//! are always current even when no dataset has been imported for a while.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info, info_span, trace, warn};

use herd_ingest::read_dataset;
use herd_model::{SlaughterAge, SlotResult, StallKind, StallState};
use herd_persistence::{AppPaths, PersistedState, PersistenceError, Settings, StateStore};
use herd_transform::{DerivationOptions, RecordIndex, process_slots};

use crate::error::{Result, SessionError};
use crate::logging::redact_value;

/// Outcome of an update run.
#[derive(Debug)]
pub struct UpdateReport {
    pub kind: StallKind,
    pub dataset: PathBuf,
    /// Rows read from the dataset.
    pub rows: usize,
    pub resolved: usize,
    pub not_found: usize,
    /// Set when the new results could not be written; they are still held
    /// by the session.
    pub save_error: Option<PersistenceError>,
}

/// Outcome of a slaughter age change.
#[derive(Debug)]
pub struct AgeChange {
    pub previous: SlaughterAge,
    pub current: SlaughterAge,
    /// Resolved places whose dates were recomputed.
    pub refreshed: usize,
    pub save_errors: Vec<PersistenceError>,
}

/// Open session over the persisted stall state.
#[derive(Debug)]
pub struct Stable {
    paths: AppPaths,
    store: StateStore,
    settings: Settings,
    state: PersistedState,
    today: Option<NaiveDate>,
    load_error: Option<PersistenceError>,
}

impl Stable {
    /// Opens the session for the current local date.
    pub fn open(paths: AppPaths) -> Self {
        Self::open_with(paths, None)
    }

    /// Opens the session with a fixed reference date for ages.
    pub fn open_on(paths: AppPaths, today: NaiveDate) -> Self {
        Self::open_with(paths, Some(today))
    }

    fn open_with(paths: AppPaths, today: Option<NaiveDate>) -> Self {
        let settings = Settings::load_from(&paths.settings_file());
        let store = StateStore::new(paths.state_file());
        let mut stable = Self {
            paths,
            store,
            settings,
            state: PersistedState::default(),
            today,
            load_error: None,
        };
        let loaded = stable.store.open(&stable.derivation_options());
        stable.state = loaded.state;
        stable.load_error = loaded.error;
        debug!(
            state = %stable.store.path().display(),
            slaughter_age = stable.settings.slaughter_age.months(),
            "stall session opened"
        );
        stable
    }

    /// Hands out the error that emptied the state at startup, once.
    pub fn take_load_error(&mut self) -> Option<PersistenceError> {
        self.load_error.take()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn layout(&self, kind: StallKind) -> &StallState {
        self.state.layout(kind)
    }

    pub fn derivation_options(&self) -> DerivationOptions {
        let options = DerivationOptions::new(self.settings.slaughter_age);
        match self.today {
            Some(today) => options.with_today(today),
            None => options,
        }
    }

    /// Replaces the entered ear-tags of a layout.
    ///
    /// Exactly one line per place is required. Results stay as they are
    /// until the next update.
    pub fn enter_ids(&mut self, kind: StallKind, lines: Vec<String>) -> Result<()> {
        let expected = kind.slot_count();
        if lines.len() != expected {
            return Err(SessionError::LineCount {
                kind,
                expected,
                actual: lines.len(),
            });
        }
        for (place, raw) in lines.iter().enumerate() {
            trace!(layout = %kind, place = place + 1, raw = redact_value(raw), "ear-tag entered");
        }
        self.state.layout_mut(kind).raw_ids = lines;
        info!(layout = %kind, places = expected, "ear-tags entered");
        Ok(())
    }

    /// Reads one ear-tag per line, trimmed. Blank lines are skipped, so
    /// empty places have to be written out as "frei", "leer" or "keine Kuh".
    pub fn read_ids<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
        let mut ids = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                ids.push(trimmed.to_string());
            }
        }
        Ok(ids)
    }

    /// Resolves a dataset argument; relative names that do not exist are
    /// also tried in the folder of the last imported dataset.
    pub fn resolve_dataset_path(&self, dataset: &Path) -> PathBuf {
        if dataset.is_relative()
            && !dataset.exists()
            && let Some(dir) = &self.settings.last_dataset_dir
        {
            let candidate = dir.join(dataset);
            if candidate.exists() {
                return candidate;
            }
        }
        dataset.to_path_buf()
    }

    /// Imports `dataset` and reconciles the entered ear-tags of `kind`.
    ///
    /// Import failures leave the state untouched. On success the results of
    /// the layout are replaced and saved.
    pub fn update(&mut self, kind: StallKind, dataset: &Path) -> Result<UpdateReport> {
        let span = info_span!("update", layout = %kind);
        let _guard = span.enter();

        if !self.layout(kind).has_raw_ids() {
            return Err(SessionError::NoRawIds(kind));
        }
        let dataset = self.resolve_dataset_path(dataset);
        let imported = read_dataset(&dataset)?;
        let rows = imported.len();
        let index = RecordIndex::build(imported.records);
        let options = self.derivation_options();

        let layout = self.state.layout_mut(kind);
        layout.results = process_slots(layout.raw_ids.as_slice(), &index, &options);
        for (place, slot) in layout.results.iter().enumerate() {
            if let SlotResult::NotFound { id } = slot {
                debug!(place = place + 1, id = redact_value(id), "ear-tag not in dataset");
            }
        }
        let resolved = layout.resolved_count();
        let not_found = layout.not_found_count();

        self.settings.remember_dataset(&dataset);
        if let Err(error) = self.settings.save_to(&self.paths.settings_file()) {
            warn!(error = %error, "could not remember dataset folder");
        }
        let save_error = self.save().err();

        info!(rows, resolved, not_found, "layout updated");
        Ok(UpdateReport {
            kind,
            dataset,
            rows,
            resolved,
            not_found,
            save_error,
        })
    }

    /// Changes the slaughter age and recomputes every projected date.
    ///
    /// The state file is only rewritten when a layout has results.
    pub fn set_slaughter_age(&mut self, age: SlaughterAge) -> AgeChange {
        let previous = self.settings.slaughter_age;
        self.settings.slaughter_age = age;
        let mut save_errors = Vec::new();
        if let Err(error) = self.settings.save_to(&self.paths.settings_file()) {
            save_errors.push(error);
        }

        let mut refreshed = 0;
        if self.state.has_results() {
            let options = self.derivation_options();
            refreshed = self.state.reprocess(&options);
            if let Err(error) = self.save() {
                save_errors.push(error);
            }
        }
        info!(
            previous = previous.months(),
            current = age.months(),
            refreshed,
            "slaughter age changed"
        );
        AgeChange {
            previous,
            current: age,
            refreshed,
            save_errors,
        }
    }

    /// Writes the state file.
    pub fn save(&self) -> herd_persistence::Result<()> {
        self.store.save(&self.state).inspect_err(|error| {
            warn!(error = %error, "stall state not saved");
        })
    }
}
