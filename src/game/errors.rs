use thiserror::Error;

use crate::questions::QuestionError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("A game needs between {min} and {max} players, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },

    #[error("Duplicate player name: {0}")]
    DuplicatePlayer(String),

    #[error("No players registered")]
    NoPlayers,

    #[error("No question has been drawn")]
    NoCurrentQuestion,

    #[error("Question {0} is still waiting for an answer")]
    QuestionPending(u32),

    #[error("No active player")]
    NoActivePlayer,

    #[error("Unknown player: {0}")]
    UnknownPlayer(String),

    #[error("{0} has already used their block card")]
    BlockCardUsed(String),

    #[error("No other active player to pass the question to")]
    NoBlockTarget,

    #[error("The game is over")]
    GameOver,

    #[error("Question store error: {0}")]
    Store(#[from] QuestionError),
}
