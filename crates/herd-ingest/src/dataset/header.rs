//! Header validation for herd dataset exports.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Column holding the ear-tag.
pub const IDENTIFIER_COLUMN: &str = "Ohrmarke-Name";
/// Column holding the birthdate.
pub const BIRTHDATE_COLUMN: &str = "Geburtsdatum";
/// Column holding the breed(s).
pub const BREED_COLUMN: &str = "Rasse(n)";
/// Column holding the sex.
pub const SEX_COLUMN: &str = "Geschlecht";

/// Columns every dataset must provide, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    IDENTIFIER_COLUMN,
    BIRTHDATE_COLUMN,
    BREED_COLUMN,
    SEX_COLUMN,
];

/// Positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetColumns {
    pub identifier: usize,
    pub birthdate: usize,
    pub breed: usize,
    pub sex: usize,
}

impl DatasetColumns {
    /// Locates the required columns, comparing trimmed header names.
    ///
    /// Fails with every missing column listed, so the operator can fix the
    /// export in one go.
    pub fn locate<'a, I>(headers: I, path: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = headers.into_iter().map(str::trim).collect();
        let position = |column: &str| names.iter().position(|name| *name == column);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|column| position(column).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }

        // All present, checked above.
        let find = |column: &str| position(column).unwrap_or_default();
        Ok(Self {
            identifier: find(IDENTIFIER_COLUMN),
            birthdate: find(BIRTHDATE_COLUMN),
            breed: find(BREED_COLUMN),
            sex: find(SEX_COLUMN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_reordered_columns() {
        let headers = ["Geschlecht", " Ohrmarke-Name ", "Stall", "Rasse(n)", "Geburtsdatum"];
        let columns = DatasetColumns::locate(headers, Path::new("herd.csv")).unwrap();
        assert_eq!(
            columns,
            DatasetColumns {
                identifier: 1,
                birthdate: 4,
                breed: 3,
                sex: 0,
            }
        );
    }

    #[test]
    fn test_locate_reports_missing() {
        let headers = ["Ohrmarke-Name", "Rasse(n)"];
        let err = DatasetColumns::locate(headers, Path::new("herd.csv")).unwrap_err();
        match err {
            IngestError::MissingColumns { columns, .. } => {
                assert_eq!(columns, vec!["Geburtsdatum", "Geschlecht"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
