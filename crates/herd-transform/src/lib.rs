//! Herd data transformation.
//!
//! - **normalization**: ear-tag keys, empty-place markers, birthdate parsing
//!   and the age / slaughter date renderings
//! - **index**: dataset rows keyed by normalized ear-tag
//! - **pipeline**: per-place reconciliation and re-derivation of stored results

pub mod index;
pub mod normalization;
pub mod pipeline;

pub use normalization::datetime;

// Re-export common functions for external use
pub use index::RecordIndex;
pub use normalization::{
    age_display, is_empty_marker, normalize_ear_tag, parse_date, slaughter_date_display,
};
pub use pipeline::{
    DerivationOptions, derive_fields, process_slots, reprocess_results, resolve_slot,
};
