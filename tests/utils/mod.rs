pub mod game_builders;
pub mod question_files;

// Re-export main utilities for use by test files
pub use game_builders::GameBuilder;
pub use question_files::TempQuestionFile;
