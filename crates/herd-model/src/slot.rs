//! Per-slot reconciliation outcomes.
//!
//! A stall layout is stored as one [`SlotResult`] per physical place. On disk
//! an empty place is `null`, and every other place is an object carrying a
//! `status` discriminator:
//!
//! ```text
//! null
//! { "status": "not_found", "id": "999999" }
//! { "status": "ok", "id": "AT000123456789", "geburtsdatum": "15.03.2020",
//!   "alter": "4 Jahre", "schlachtdatum": "15.09.2021",
//!   "rasse": "Fleckvieh", "geschlecht": "weiblich" }
//! ```

use serde::{Deserialize, Serialize};

/// Placeholder for values that are missing or cannot be derived.
pub const NOT_AVAILABLE: &str = "N/A";

/// Outcome of reconciling one slot's raw input against the record index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<StoredSlot>", into = "Option<StoredSlot>")]
pub enum SlotResult {
    /// The place intentionally holds no animal.
    #[default]
    Empty,
    /// An ear-tag was entered but the dataset has no matching animal.
    NotFound {
        /// The text exactly as the operator entered it.
        id: String,
    },
    /// The ear-tag matched a dataset row.
    Resolved(ResolvedAnimal),
}

impl SlotResult {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether the place counts as taken. Unmatched tags still occupy a place.
    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    pub fn resolved(&self) -> Option<&ResolvedAnimal> {
        match self {
            Self::Resolved(animal) => Some(animal),
            _ => None,
        }
    }

    pub fn resolved_mut(&mut self) -> Option<&mut ResolvedAnimal> {
        match self {
            Self::Resolved(animal) => Some(animal),
            _ => None,
        }
    }
}

/// An animal matched against the dataset, with its derived display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAnimal {
    /// Identifier as written in the dataset, not the normalized key.
    #[serde(default)]
    pub id: String,
    /// Birthdate as written in the dataset; the source for every re-derivation.
    #[serde(rename = "geburtsdatum", default)]
    pub birthdate: String,
    /// Current age, e.g. `"2 Jahre, 3 Monate"`.
    #[serde(rename = "alter", default = "not_available")]
    pub age: String,
    /// Projected slaughter date as `dd.mm.yyyy`.
    #[serde(rename = "schlachtdatum", default = "not_available")]
    pub slaughter_date: String,
    #[serde(rename = "rasse", default = "not_available")]
    pub breed: String,
    #[serde(rename = "geschlecht", default = "not_available")]
    pub sex: String,
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Wire form of an occupied slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status")]
enum StoredSlot {
    #[serde(rename = "ok")]
    Ok(ResolvedAnimal),
    #[serde(rename = "not_found")]
    NotFound {
        #[serde(default)]
        id: String,
    },
}

impl From<Option<StoredSlot>> for SlotResult {
    fn from(value: Option<StoredSlot>) -> Self {
        match value {
            None => Self::Empty,
            Some(StoredSlot::NotFound { id }) => Self::NotFound { id },
            Some(StoredSlot::Ok(animal)) => Self::Resolved(animal),
        }
    }
}

impl From<SlotResult> for Option<StoredSlot> {
    fn from(value: SlotResult) -> Self {
        match value {
            SlotResult::Empty => None,
            SlotResult::NotFound { id } => Some(StoredSlot::NotFound { id }),
            SlotResult::Resolved(animal) => Some(StoredSlot::Ok(animal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animal() -> ResolvedAnimal {
        ResolvedAnimal {
            id: "AT000123456789".to_string(),
            birthdate: "15.03.2020".to_string(),
            age: "4 Jahre".to_string(),
            slaughter_date: "15.09.2021".to_string(),
            breed: "Fleckvieh".to_string(),
            sex: "weiblich".to_string(),
        }
    }

    #[test]
    fn empty_slot_is_null() {
        let json = serde_json::to_string(&SlotResult::Empty).unwrap();
        assert_eq!(json, "null");
        let back: SlotResult = serde_json::from_str("null").unwrap();
        assert_eq!(back, SlotResult::Empty);
    }

    #[test]
    fn not_found_carries_status() {
        let json = serde_json::to_value(SlotResult::not_found("999999")).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["id"], "999999");
    }

    #[test]
    fn resolved_uses_stored_keys() {
        let json = serde_json::to_value(SlotResult::Resolved(animal())).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["id"], "AT000123456789");
        assert_eq!(json["geburtsdatum"], "15.03.2020");
        assert_eq!(json["alter"], "4 Jahre");
        assert_eq!(json["schlachtdatum"], "15.09.2021");
        assert_eq!(json["rasse"], "Fleckvieh");
        assert_eq!(json["geschlecht"], "weiblich");
    }

    #[test]
    fn resolved_missing_fields_default() {
        let slot: SlotResult =
            serde_json::from_str(r#"{"status": "ok", "id": "AT1", "geburtsdatum": "01.01.2020"}"#)
                .unwrap();
        let animal = slot.resolved().expect("resolved");
        assert_eq!(animal.id, "AT1");
        assert_eq!(animal.age, NOT_AVAILABLE);
        assert_eq!(animal.breed, NOT_AVAILABLE);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result: Result<SlotResult, _> = serde_json::from_str(r#"{"status": "weird"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn occupancy() {
        assert!(!SlotResult::Empty.is_occupied());
        assert!(SlotResult::not_found("1").is_occupied());
        assert!(SlotResult::Resolved(animal()).is_occupied());
    }
}
