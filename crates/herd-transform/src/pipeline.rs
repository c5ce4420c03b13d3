//! Reconciliation of entered ear-tags against the record index.
//!
//! Matching and derivation are separate steps. [`process_slots`] matches
//! every place once per import; [`reprocess_results`] replays only the
//! birthdate-derived fields and can run any number of times without the
//! dataset, e.g. after a restart or a slaughter age change.

use chrono::{Local, NaiveDate};

use herd_model::{NOT_AVAILABLE, ResolvedAnimal, SlaughterAge, SlotResult, SourceRecord};

use crate::index::RecordIndex;
use crate::normalization::{age_display_at, is_empty_marker, slaughter_date_display};

/// Inputs of the birthdate-derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivationOptions {
    /// Months added to the birthdate for the projected slaughter date.
    pub slaughter_age: SlaughterAge,
    /// Date ages are computed against.
    pub today: NaiveDate,
}

impl DerivationOptions {
    /// Options for the current local date.
    pub fn new(slaughter_age: SlaughterAge) -> Self {
        Self {
            slaughter_age,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_slaughter_age(mut self, slaughter_age: SlaughterAge) -> Self {
        self.slaughter_age = slaughter_age;
        self
    }
}

/// Reconciles raw slot input, one result per entry in the same order.
pub fn process_slots<S>(
    raw_ids: &[S],
    index: &RecordIndex,
    options: &DerivationOptions,
) -> Vec<SlotResult>
where
    S: AsRef<str>,
{
    let results: Vec<SlotResult> = raw_ids
        .iter()
        .map(|raw| resolve_slot(raw.as_ref(), index, options))
        .collect();

    tracing::info!(
        slots = results.len(),
        resolved = results.iter().filter(|r| r.resolved().is_some()).count(),
        not_found = results
            .iter()
            .filter(|r| matches!(r, SlotResult::NotFound { .. }))
            .count(),
        "slots reconciled"
    );
    results
}

/// Reconciles a single place.
pub fn resolve_slot(raw: &str, index: &RecordIndex, options: &DerivationOptions) -> SlotResult {
    if is_empty_marker(raw) {
        return SlotResult::Empty;
    }
    match index.lookup(raw) {
        Some(record) => SlotResult::Resolved(resolve_animal(record, options)),
        None => SlotResult::not_found(raw),
    }
}

fn resolve_animal(record: &SourceRecord, options: &DerivationOptions) -> ResolvedAnimal {
    let mut animal = ResolvedAnimal {
        id: record.identifier.clone(),
        birthdate: record.birthdate.trim().to_string(),
        age: String::new(),
        slaughter_date: String::new(),
        breed: or_not_available(&record.breed),
        sex: or_not_available(&record.sex),
    };
    derive_fields(&mut animal, options);
    animal
}

fn or_not_available(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Recomputes age and slaughter date from the stored birthdate.
pub fn derive_fields(animal: &mut ResolvedAnimal, options: &DerivationOptions) {
    animal.age = age_display_at(&animal.birthdate, options.today);
    animal.slaughter_date =
        slaughter_date_display(&animal.birthdate, options.slaughter_age.months());
}

/// Refreshes the derived fields of every resolved place in place.
///
/// Empty and unmatched places are left alone, and identifiers are neither
/// re-normalized nor looked up again. Returns the number of refreshed places.
pub fn reprocess_results(results: &mut [SlotResult], options: &DerivationOptions) -> usize {
    let mut refreshed = 0;
    for animal in results.iter_mut().filter_map(SlotResult::resolved_mut) {
        derive_fields(animal, options);
        refreshed += 1;
    }
    tracing::debug!(refreshed, "derived fields refreshed");
    refreshed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(months: u32) -> DerivationOptions {
        DerivationOptions::new(SlaughterAge::new(months).unwrap())
            .with_today(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn index() -> RecordIndex {
        RecordIndex::build([
            SourceRecord::new("AT000123456789", "15.03.2020", "Fleckvieh", "weiblich"),
            SourceRecord::new("AT0777", "kaputt", " ", ""),
        ])
    }

    #[test]
    fn resolves_with_source_identifier() {
        let slot = resolve_slot("123456789", &index(), &options(18));
        let animal = slot.resolved().expect("resolved");
        assert_eq!(animal.id, "AT000123456789");
        assert_eq!(animal.birthdate, "15.03.2020");
        assert_eq!(animal.age, "4 Jahre");
        assert_eq!(animal.slaughter_date, "15.09.2021");
        assert_eq!(animal.breed, "Fleckvieh");
        assert_eq!(animal.sex, "weiblich");
    }

    #[test]
    fn malformed_row_degrades_to_not_available() {
        let slot = resolve_slot("777", &index(), &options(18));
        let animal = slot.resolved().expect("resolved");
        assert_eq!(animal.age, NOT_AVAILABLE);
        assert_eq!(animal.slaughter_date, NOT_AVAILABLE);
        assert_eq!(animal.breed, NOT_AVAILABLE);
        assert_eq!(animal.sex, NOT_AVAILABLE);
    }

    #[test]
    fn empty_marker_wins_over_index() {
        let index = RecordIndex::build([SourceRecord::new("ATFREI", "", "", "")]);
        assert_eq!(resolve_slot("frei", &index, &options(1)), SlotResult::Empty);
        assert_eq!(resolve_slot("keine Kuh", &index, &options(1)), SlotResult::Empty);
    }

    #[test]
    fn miss_keeps_original_text() {
        assert_eq!(
            resolve_slot(" 999999", &index(), &options(1)),
            SlotResult::not_found(" 999999")
        );
    }

    #[test]
    fn reprocess_touches_resolved_only() {
        let mut results = process_slots(&["123456789", "999999", "leer"], &index(), &options(18));
        let before = results.clone();

        let refreshed = reprocess_results(&mut results, &options(6));

        assert_eq!(refreshed, 1);
        assert_eq!(results[1], before[1]);
        assert_eq!(results[2], before[2]);
        let animal = results[0].resolved().unwrap();
        assert_eq!(animal.age, "4 Jahre");
        assert_eq!(animal.slaughter_date, "15.09.2020");
    }
}
