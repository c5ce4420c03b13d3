//! Reading herd dataset exports.
//!
//! Exports are semicolon-separated with double-quoted fields and UTF-8
//! encoding, optionally preceded by a byte order mark.

use std::fs;
use std::path::{Path, PathBuf};

use herd_model::SourceRecord;

use crate::error::{IngestError, Result};

use super::header::DatasetColumns;

/// Maximum file size for dataset loading (50 MB).
pub const MAX_DATASET_FILE_SIZE: u64 = 50 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Rows of one imported dataset, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub path: PathBuf,
    pub records: Vec<SourceRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn map_open_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| map_open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 byte order marks and strips a UTF-8 one.
fn strip_encoding_marker<'a>(bytes: &'a [u8], path: &Path) -> Result<&'a [u8]> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }
    Ok(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes))
}

/// Loads a herd dataset export.
///
/// The header row is validated before any record is read: a missing
/// required column rejects the whole file. Rows shorter than the header
/// yield empty values rather than errors.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    check_file_size_with_limit(path, MAX_DATASET_FILE_SIZE)?;
    let bytes = fs::read(path).map_err(|e| map_open_error(path, e))?;
    let records = parse_dataset(&bytes, path)?;

    tracing::info!(
        path = %path.display(),
        rows = records.len(),
        "dataset loaded"
    );
    Ok(Dataset {
        path: path.to_path_buf(),
        records,
    })
}

/// Parses dataset content that has already been read into memory.
pub fn parse_dataset(bytes: &[u8], path: &Path) -> Result<Vec<SourceRecord>> {
    let content = strip_encoding_marker(bytes, path)?;
    if content.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .quote(b'"')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    let columns = DatasetColumns::locate(headers.iter(), path)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        let field = |index: usize| row.get(index).unwrap_or_default().to_string();
        records.push(SourceRecord {
            identifier: field(columns.identifier),
            birthdate: field(columns.birthdate),
            breed: field(columns.breed),
            sex: field(columns.sex),
        });
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "dataset parsed");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Ohrmarke-Name;Geburtsdatum;Rasse(n);Geschlecht\n";

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_dataset_basic() {
        let content = format!(
            "{HEADER}\"AT000123456789\";\"15.03.2020\";\"Fleckvieh\";\"weiblich\"\nAT42;01.01.2021;Holstein;männlich\n"
        );
        let file = create_temp_csv(content.as_bytes());
        let dataset = read_dataset(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.records[0],
            SourceRecord::new("AT000123456789", "15.03.2020", "Fleckvieh", "weiblich")
        );
        assert_eq!(dataset.records[1].sex, "männlich");
    }

    #[test]
    fn test_read_dataset_with_bom_and_padded_header() {
        let mut content = UTF8_BOM.to_vec();
        content.extend_from_slice(
            b" Ohrmarke-Name ; Geburtsdatum;Rasse(n) ;Geschlecht\nAT1; 02.02.2022;Pinzgauer;weiblich\n",
        );
        let file = create_temp_csv(&content);
        let dataset = read_dataset(file.path()).unwrap();

        assert_eq!(dataset.records[0].identifier, "AT1");
        assert_eq!(dataset.records[0].birthdate, "02.02.2022");
        assert_eq!(dataset.records[0].breed, "Pinzgauer");
    }

    #[test]
    fn test_read_dataset_short_row() {
        let content = format!("{HEADER}AT7;03.03.2023\n");
        let file = create_temp_csv(content.as_bytes());
        let dataset = read_dataset(file.path()).unwrap();

        assert_eq!(dataset.records[0].identifier, "AT7");
        assert_eq!(dataset.records[0].breed, "");
        assert_eq!(dataset.records[0].sex, "");
    }

    #[test]
    fn test_read_dataset_missing_column() {
        let file = create_temp_csv(b"Ohrmarke-Name;Geburtsdatum;Geschlecht\nAT1;01.01.2020;w\n");
        let result = read_dataset(file.path());

        match result {
            Err(IngestError::MissingColumns { columns, .. }) => {
                assert_eq!(columns, vec!["Rasse(n)"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_dataset_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_dataset(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_dataset_utf16_rejected() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0]);
        let result = read_dataset(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_dataset_not_found() {
        let result = read_dataset(Path::new("/nonexistent/herd.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv(HEADER.as_bytes());
        let result = check_file_size_with_limit(file.path(), 4);

        assert!(matches!(result, Err(IngestError::FileTooLarge { .. })));
    }
}
