//! Physical stall layouts of the barn.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::slot::SlotResult;

/// Number of individual pens.
pub const INDIVIDUAL_PEN_COUNT: usize = 14;
/// Number of group boxes.
pub const GROUP_BOX_COUNT: usize = 6;
/// Places within one group box.
pub const GROUP_BOX_PLACES: usize = 3;

static EMPTY_SLOT: SlotResult = SlotResult::Empty;

/// The two stall layouts tracked by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StallKind {
    IndividualPens,
    GroupBoxes,
}

impl StallKind {
    pub const ALL: [StallKind; 2] = [StallKind::IndividualPens, StallKind::GroupBoxes];

    pub fn label(self) -> &'static str {
        match self {
            Self::IndividualPens => "Einzelplätze",
            Self::GroupBoxes => "Gruppenboxen",
        }
    }

    pub fn layout(self) -> StallLayout {
        match self {
            Self::IndividualPens => StallLayout {
                kind: self,
                boxes: INDIVIDUAL_PEN_COUNT,
                places_per_box: 1,
            },
            Self::GroupBoxes => StallLayout {
                kind: self,
                boxes: GROUP_BOX_COUNT,
                places_per_box: GROUP_BOX_PLACES,
            },
        }
    }

    pub fn slot_count(self) -> usize {
        self.layout().slot_count()
    }
}

impl fmt::Display for StallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StallKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual-pens" | "pens" | "einzelplaetze" | "einzelplätze" => {
                Ok(Self::IndividualPens)
            }
            "group-boxes" | "boxes" | "gruppenboxen" => Ok(Self::GroupBoxes),
            _ => Err(ModelError::UnknownStallKind(s.to_string())),
        }
    }
}

/// Geometry of a layout: a number of boxes with a fixed number of places each.
///
/// Individual pens are modelled as boxes with a single place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StallLayout {
    pub kind: StallKind,
    pub boxes: usize,
    pub places_per_box: usize,
}

impl StallLayout {
    pub fn slot_count(&self) -> usize {
        self.boxes * self.places_per_box
    }

    /// Splits a result list into boxes.
    ///
    /// Lists shorter than the layout are padded with empty places, and
    /// surplus entries are ignored.
    pub fn group<'a>(&self, results: &'a [SlotResult]) -> Vec<StallBox<'a>> {
        (0..self.boxes)
            .map(|box_index| {
                let start = box_index * self.places_per_box;
                let slots = (start..start + self.places_per_box)
                    .map(|index| results.get(index).unwrap_or(&EMPTY_SLOT))
                    .collect();
                StallBox {
                    number: box_index + 1,
                    slots,
                }
            })
            .collect()
    }
}

/// One box of a layout with borrowed slot results.
#[derive(Debug, Clone)]
pub struct StallBox<'a> {
    /// 1-based box (or pen) number.
    pub number: usize,
    pub slots: Vec<&'a SlotResult>,
}

impl StallBox<'_> {
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }
}
