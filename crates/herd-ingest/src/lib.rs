//! Herd dataset ingestion.
//!
//! Loads the herd export produced by the livestock registry: a
//! semicolon-separated, UTF-8 CSV with at least the ear-tag, birthdate,
//! breed and sex columns. Imports are all-or-nothing; a file with a missing
//! required column or unreadable content is rejected as a whole.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use herd_ingest::read_dataset;
//!
//! let dataset = read_dataset(Path::new("Bestand.csv"))?;
//! println!("{} animals", dataset.len());
//! ```

mod dataset;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use dataset::{
    BIRTHDATE_COLUMN, BREED_COLUMN, Dataset, DatasetColumns, IDENTIFIER_COLUMN,
    MAX_DATASET_FILE_SIZE, REQUIRED_COLUMNS, SEX_COLUMN, check_file_size_with_limit,
    parse_dataset, read_dataset,
};
