//! Herd dataset exports: header layout and CSV reading.

mod header;
mod reader;

pub use header::{
    BIRTHDATE_COLUMN, BREED_COLUMN, DatasetColumns, IDENTIFIER_COLUMN, REQUIRED_COLUMNS,
    SEX_COLUMN,
};
pub use reader::{
    Dataset, MAX_DATASET_FILE_SIZE, check_file_size_with_limit, parse_dataset, read_dataset,
};
