//! Normalization of operator and dataset input.
//!
//! - **ear_tag**: canonical ear-tag keys and empty-place markers
//! - **datetime**: birthdate parsing, age and slaughter date rendering

pub mod datetime;
pub mod ear_tag;

pub use datetime::{
    DATE_FORMAT, add_months, age_display, age_display_at, age_in_months, format_age,
    parse_date, slaughter_date_display,
};
pub use ear_tag::{COUNTRY_PREFIX, EMPTY_MARKERS, is_empty_marker, normalize_ear_tag};
