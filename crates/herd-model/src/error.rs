use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("slaughter age must be between {min} and {max} months, got {value}")]
    InvalidSlaughterAge { value: u32, min: u32, max: u32 },
    #[error("unknown stall layout: {0}")]
    UnknownStallKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
