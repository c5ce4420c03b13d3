//! Data model for the herd stall tracker.
//!
//! - [`SourceRecord`]: one row of the imported herd dataset
//! - [`SlotResult`]: outcome of reconciling one stall place
//! - [`StallKind`] / [`StallLayout`]: the individual pens and group boxes
//! - [`StallState`]: raw ear-tags and results for one layout
//! - [`SlaughterAge`]: the months offset driving projected slaughter dates

pub mod error;
pub mod layout;
pub mod options;
pub mod record;
pub mod slot;
pub mod state;

pub use error::{ModelError, Result};
pub use layout::{
    GROUP_BOX_COUNT, GROUP_BOX_PLACES, INDIVIDUAL_PEN_COUNT, StallBox, StallKind, StallLayout,
};
pub use options::SlaughterAge;
pub use record::SourceRecord;
pub use slot::{NOT_AVAILABLE, ResolvedAnimal, SlotResult};
pub use state::{StallState, null_as_default};
