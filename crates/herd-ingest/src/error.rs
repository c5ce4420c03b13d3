//! Error types for herd dataset import.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a dataset import.
///
/// Any of these leaves previously reconciled state untouched; per-row
/// problems are never reported here.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Dataset file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the import size limit.
    #[error("file {path} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}, expected UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV content.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// One or more required columns are absent from the header.
    #[error("missing required columns in {path}: {}", columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/herd.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/herd.csv");
    }

    #[test]
    fn test_missing_columns_lists_all() {
        let err = IngestError::MissingColumns {
            path: PathBuf::from("herd.csv"),
            columns: vec!["Geburtsdatum".to_string(), "Geschlecht".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns in herd.csv: Geburtsdatum, Geschlecht"
        );
    }
}
