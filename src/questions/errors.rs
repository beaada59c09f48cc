use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("Question file not found: {0}")]
    NotFound(PathBuf),

    #[error("I/O error on question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed question file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Question file header does not match expected columns, found: {0}")]
    InvalidHeader(String),

    #[error("Duplicate question id: {0}")]
    DuplicateId(u32),
}
