//! Lookup of dataset rows by normalized ear-tag.

use std::collections::HashMap;

use herd_model::SourceRecord;

use crate::normalization::normalize_ear_tag;

/// Dataset rows keyed by [`normalize_ear_tag`] of their identifier.
///
/// Rows whose identifier normalizes to nothing are skipped. When two rows
/// share a key the later row replaces the earlier one, so the index always
/// reflects the last occurrence in file order.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    records: HashMap<String, SourceRecord>,
}

impl RecordIndex {
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = SourceRecord>,
    {
        let mut records = HashMap::new();
        let mut skipped = 0usize;
        let mut replaced = 0usize;
        for row in rows {
            let key = normalize_ear_tag(&row.identifier);
            if key.is_empty() {
                skipped += 1;
                continue;
            }
            if records.insert(key, row).is_some() {
                replaced += 1;
            }
        }
        tracing::debug!(
            keys = records.len(),
            skipped,
            replaced,
            "record index built"
        );
        Self { records }
    }

    /// Looks up an already normalized key.
    pub fn get(&self, key: &str) -> Option<&SourceRecord> {
        self.records.get(key)
    }

    /// Normalizes `raw` and looks it up.
    pub fn lookup(&self, raw: &str) -> Option<&SourceRecord> {
        let key = normalize_ear_tag(raw);
        if key.is_empty() {
            return None;
        }
        self.get(&key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<SourceRecord> for RecordIndex {
    fn from_iter<T: IntoIterator<Item = SourceRecord>>(iter: T) -> Self {
        Self::build(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let index = RecordIndex::build([SourceRecord::new(
            "AT000123456789",
            "15.03.2020",
            "Fleckvieh",
            "weiblich",
        )]);
        assert_eq!(index.len(), 1);
        assert!(index.get("AT123456789").is_some());
        assert!(index.lookup("123456789").is_some());
        assert!(index.lookup("at 0123456789").is_some());
    }

    #[test]
    fn blank_identifiers_are_skipped() {
        let index = RecordIndex::build([
            SourceRecord::new("", "01.01.2020", "Holstein", "weiblich"),
            SourceRecord::new("AT000", "01.01.2020", "Holstein", "weiblich"),
        ]);
        assert!(index.is_empty());
        assert!(index.lookup("").is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let index: RecordIndex = [
            SourceRecord::new("AT0042", "01.01.2020", "Holstein", "weiblich"),
            SourceRecord::new("42", "02.02.2021", "Fleckvieh", "männlich"),
        ]
        .into_iter()
        .collect();
        assert_eq!(index.len(), 1);
        let record = index.lookup("AT42").unwrap();
        assert_eq!(record.identifier, "42");
        assert_eq!(record.birthdate, "02.02.2021");
    }
}
