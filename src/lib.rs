// Library crate for the party trivia game
// Exposes the public API for the binary and integration tests

pub mod config;
pub mod game;
pub mod questions;
pub mod scores;
pub mod shared;
pub mod ui;

// Re-export commonly used types for easier access in tests
pub use config::Config;
pub use game::{Answer, Game, GameError, RoundOutcome};
pub use questions::{
    CsvQuestionRepository, InMemoryQuestionRepository, Question, QuestionError, QuestionFilter,
    QuestionRepository, QuestionStore, QUESTION_HEADERS,
};
pub use scores::{Player, ScoreTracker, Scoreboard};
pub use shared::AppError;
pub use ui::TextUi;
