use serde::{Deserialize, Deserializer, Serialize};

use crate::slot::SlotResult;

/// Entered ear-tags and their reconciled results for one layout.
///
/// `raw_ids` is replaced wholesale whenever the operator re-enters the
/// layout. `results` is only ever replaced by a new reconciliation run or
/// refreshed in place by re-derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StallState {
    #[serde(deserialize_with = "null_as_default")]
    pub raw_ids: Vec<String>,
    #[serde(rename = "processed", deserialize_with = "null_as_default")]
    pub results: Vec<SlotResult>,
}

/// Treats an explicit `null` like a missing value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StallState {
    pub fn has_raw_ids(&self) -> bool {
        !self.raw_ids.is_empty()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn resolved_count(&self) -> usize {
        self.results
            .iter()
            .filter(|slot| slot.resolved().is_some())
            .count()
    }

    pub fn not_found_count(&self) -> usize {
        self.results
            .iter()
            .filter(|slot| matches!(slot, SlotResult::NotFound { .. }))
            .count()
    }
}
