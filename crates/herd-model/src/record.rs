//! Rows imported from the herd dataset.

/// One animal as listed in the imported herd export.
///
/// Values are kept exactly as they appear in the source file. Birthdates in
/// particular stay unparsed so they can be re-derived later without the
/// dataset at hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceRecord {
    /// Ear-tag as written in the dataset (e.g. `AT000123456789`).
    pub identifier: String,
    /// Birthdate in whatever format the export used.
    pub birthdate: String,
    pub breed: String,
    pub sex: String,
}

impl SourceRecord {
    pub fn new(
        identifier: impl Into<String>,
        birthdate: impl Into<String>,
        breed: impl Into<String>,
        sex: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            birthdate: birthdate.into(),
            breed: breed.into(),
            sex: sex.into(),
        }
    }
}
