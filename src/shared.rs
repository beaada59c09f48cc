use thiserror::Error;

use crate::game::GameError;
use crate::questions::QuestionError;

/// Errors surfaced to the binary. Everything below the front-end reports
/// through its own module error and converts here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Question data error: {0}")]
    Questions(#[from] QuestionError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Questions(_) => 2,
            AppError::Game(_) => 3,
            AppError::Io(_) => 74,
        }
    }
}
