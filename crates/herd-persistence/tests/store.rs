//! Integration tests for the state store.

use std::fs;

use chrono::NaiveDate;
use tempfile::tempdir;

use herd_model::{ResolvedAnimal, SlaughterAge, SlotResult, SourceRecord, StallKind};
use herd_persistence::{PersistedState, PersistenceError, StateStore};
use herd_transform::{DerivationOptions, RecordIndex, process_slots};

fn options(months: u32) -> DerivationOptions {
    DerivationOptions::new(SlaughterAge::new(months).unwrap())
        .with_today(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
}

fn reconciled_state(months: u32) -> PersistedState {
    let index = RecordIndex::build([
        SourceRecord::new("AT000123456789", "15.03.2020", "Fleckvieh", "weiblich"),
        SourceRecord::new("AT000987654321", "01.10.23", "Holstein", "männlich"),
    ]);
    let pens = ["123456789", "frei", "999999"];
    let boxes = ["987654321", "leer", ""];

    let mut state = PersistedState::default();
    state.individual_pens.raw_ids = pens.iter().map(ToString::to_string).collect();
    state.individual_pens.results = process_slots(&pens, &index, &options(months));
    state.group_boxes.raw_ids = boxes.iter().map(ToString::to_string).collect();
    state.group_boxes.results = process_slots(&boxes, &index, &options(months));
    state
}

#[test]
fn test_round_trip_reproduces_derived_fields() {
    let dir = tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    let state = reconciled_state(18);

    store.save(&state).unwrap();
    let loaded = store.open(&options(18));

    assert!(loaded.error.is_none());
    assert_eq!(loaded.state, state);
}

#[test]
fn test_reprocess_after_load_needs_no_dataset() {
    let dir = tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    store.save(&reconciled_state(18)).unwrap();

    let loaded = store.open(&options(6));

    assert_eq!(loaded.state, reconciled_state(6));
    let pen = loaded.state.individual_pens.results[0].resolved().unwrap();
    assert_eq!(pen.slaughter_date, "15.09.2020");
    assert_eq!(loaded.state.individual_pens.results[2], SlotResult::not_found("999999"));
}

#[test]
fn test_stale_ages_are_refreshed_on_open() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(
        &path,
        r#"{
            "einzelplaetze": {
                "raw_ids": ["123456789"],
                "processed": [{"status": "ok", "id": "AT000123456789", "geburtsdatum": "15.03.2020", "alter": "1 Monat"}]
            }
        }"#,
    )
    .unwrap();

    let loaded = StateStore::new(&path).open(&options(18));

    let animal = loaded.state.layout(StallKind::IndividualPens).results[0]
        .resolved()
        .unwrap();
    assert_eq!(animal.age, "4 Jahre");
    assert_eq!(animal.slaughter_date, "15.09.2021");
    assert_eq!(animal.breed, "N/A");
}

#[test]
fn test_resolved_entry_without_id_keeps_both_layouts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(
        &path,
        r#"{
            "einzelplaetze": {
                "raw_ids": ["123456789"],
                "processed": [{"status": "ok", "geburtsdatum": "15.03.2020"}]
            },
            "gruppenboxen": {"raw_ids": ["987654321", "leer", "frei"], "processed": []}
        }"#,
    )
    .unwrap();

    let loaded = StateStore::new(&path).open(&options(18));

    assert!(loaded.error.is_none());
    assert_eq!(loaded.state.group_boxes.raw_ids.len(), 3);
    let animal = loaded.state.individual_pens.results[0].resolved().unwrap();
    assert_eq!(animal.age, "4 Jahre");
    assert_eq!(animal.slaughter_date, "15.09.2021");
}

#[test]
fn test_corrupt_state_falls_back_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("state.json");
    fs::write(&path, "[1, 2, 3").unwrap();

    let loaded = StateStore::new(&path).open(&options(1));

    assert_eq!(loaded.state, PersistedState::default());
    assert!(matches!(
        loaded.error,
        Some(PersistenceError::Deserialization { .. })
    ));
}

#[test]
fn test_failed_save_keeps_state_in_memory() {
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "file, not directory").unwrap();
    let store = StateStore::new(blocker.join("state.json"));
    let state = reconciled_state(18);

    let error = store.save(&state).unwrap_err();

    assert!(error.user_message().contains("blocker"));
    assert!(error.suggestion().is_some());
    assert_eq!(state, reconciled_state(18));
}

#[test]
fn test_state_file_format() {
    let mut state = PersistedState::default();
    state.individual_pens.raw_ids = vec!["123456789".into(), "frei".into(), "999999".into()];
    state.individual_pens.results = vec![
        SlotResult::Resolved(ResolvedAnimal {
            id: "AT000123456789".into(),
            birthdate: "15.03.2020".into(),
            age: "4 Jahre".into(),
            slaughter_date: "15.09.2021".into(),
            breed: "Fleckvieh".into(),
            sex: "weiblich".into(),
        }),
        SlotResult::Empty,
        SlotResult::not_found("999999"),
    ];

    insta::assert_json_snapshot!(state, @r#"
    {
      "einzelplaetze": {
        "raw_ids": [
          "123456789",
          "frei",
          "999999"
        ],
        "processed": [
          {
            "status": "ok",
            "id": "AT000123456789",
            "geburtsdatum": "15.03.2020",
            "alter": "4 Jahre",
            "schlachtdatum": "15.09.2021",
            "rasse": "Fleckvieh",
            "geschlecht": "weiblich"
          },
          null,
          {
            "status": "not_found",
            "id": "999999"
          }
        ]
      },
      "gruppenboxen": {
        "raw_ids": [],
        "processed": []
      }
    }
    "#);
}
