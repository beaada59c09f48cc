use clap::Parser;
use std::path::PathBuf;

use crate::game::DEFAULT_MAX_ROUNDS;
use crate::questions::QuestionFilter;

/// Log filter when RUST_LOG is unset. Round-level info lines would interleave
/// with the prompt.
pub const DEFAULT_LOG_FILTER: &str = "party_trivia=warn";

/// Party trivia in the terminal. Log verbosity follows RUST_LOG.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Config {
    /// Question file (CSV with id,question,category,difficulty,used,correct_answer)
    #[arg(short, long, env = "TRIVIA_QUESTIONS", default_value = "data/questions.csv")]
    pub questions: PathBuf,

    /// Rounds before the game ends
    #[arg(short, long, env = "TRIVIA_ROUNDS", default_value_t = DEFAULT_MAX_ROUNDS)]
    pub rounds: u32,

    /// Only draw questions from this category
    #[arg(long, env = "TRIVIA_CATEGORY")]
    pub category: Option<u32>,

    /// Only draw questions of this difficulty
    #[arg(long, env = "TRIVIA_DIFFICULTY")]
    pub difficulty: Option<u8>,

    /// Keep used flags from the file instead of resetting them at startup
    #[arg(long)]
    pub keep_used: bool,

    /// Print question counts and exit
    #[arg(long)]
    pub stats: bool,
}

impl Config {
    pub fn filter(&self) -> QuestionFilter {
        QuestionFilter {
            category: self.category,
            difficulty: self.difficulty,
            unused_only: true,
        }
    }
}
