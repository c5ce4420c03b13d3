//! Errors of the stall session.

use thiserror::Error;

use herd_ingest::IngestError;
use herd_model::StallKind;
use herd_persistence::PersistenceError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Update requested before any ear-tags were entered.
    #[error("Bitte zuerst IDs für {0} eingeben.")]
    NoRawIds(StallKind),

    #[error("{kind} needs exactly {expected} lines, got {actual}")]
    LineCount {
        kind: StallKind,
        expected: usize,
        actual: usize,
    },

    #[error("dataset import failed")]
    Import(#[from] IngestError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub type Result<T> = std::result::Result<T, SessionError>;
