//! Shape of the persisted stall state.

use serde::{Deserialize, Serialize};

use herd_model::{StallKind, StallState, null_as_default};
use herd_transform::{DerivationOptions, reprocess_results};

/// Everything written to the state file: one section per layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    #[serde(rename = "einzelplaetze", deserialize_with = "null_as_default")]
    pub individual_pens: StallState,
    #[serde(rename = "gruppenboxen", deserialize_with = "null_as_default")]
    pub group_boxes: StallState,
}

impl PersistedState {
    pub fn layout(&self, kind: StallKind) -> &StallState {
        match kind {
            StallKind::IndividualPens => &self.individual_pens,
            StallKind::GroupBoxes => &self.group_boxes,
        }
    }

    pub fn layout_mut(&mut self, kind: StallKind) -> &mut StallState {
        match kind {
            StallKind::IndividualPens => &mut self.individual_pens,
            StallKind::GroupBoxes => &mut self.group_boxes,
        }
    }

    pub fn has_results(&self) -> bool {
        StallKind::ALL
            .iter()
            .any(|kind| self.layout(*kind).has_results())
    }

    /// Re-derives age and slaughter date of every resolved place in both
    /// layouts. Returns the number of refreshed places.
    pub fn reprocess(&mut self, options: &DerivationOptions) -> usize {
        StallKind::ALL
            .iter()
            .map(|kind| reprocess_results(&mut self.layout_mut(*kind).results, options))
            .sum()
    }
}
