//! Ear-tag normalization.
//!
//! Ear-tags reach the application from two sides: typed by the operator and
//! exported by the registry. Both sides are sloppy about the country code,
//! leading zeros (spreadsheet auto-formatting), spacing and case, so every
//! comparison goes through [`normalize_ear_tag`].

/// Country code every canonical key starts with.
pub const COUNTRY_PREFIX: &str = "AT";

/// Inputs that mark a place as intentionally empty (compared case-insensitively).
pub const EMPTY_MARKERS: [&str; 3] = ["keine kuh", "leer", "frei"];

/// Returns the canonical lookup key for an ear-tag.
///
/// Whitespace is removed, letters are uppercased, the country prefix and any
/// leading zeros are stripped and the prefix is put back. Input that reduces
/// to nothing yields an empty string, meaning "no valid key".
///
/// The function is idempotent.
///
/// ```
/// use herd_transform::normalize_ear_tag;
///
/// assert_eq!(normalize_ear_tag("at 0123"), "AT123");
/// assert_eq!(normalize_ear_tag("0123"), "AT123");
/// assert_eq!(normalize_ear_tag("  "), "");
/// ```
pub fn normalize_ear_tag(raw: &str) -> String {
    let compact: String = raw
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();
    let number = compact.strip_prefix(COUNTRY_PREFIX).unwrap_or(&compact);
    let number = number.trim_start_matches('0');
    if number.is_empty() {
        return String::new();
    }
    format!("{COUNTRY_PREFIX}{number}")
}

/// Whether raw slot input means "no animal here".
pub fn is_empty_marker(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty()
        || EMPTY_MARKERS
            .iter()
            .any(|marker| trimmed.to_lowercase() == *marker)
}
