mod errors;
pub mod models;
pub mod repository;
mod store;

pub use errors::QuestionError;
pub use models::{Question, QuestionFilter, StoreStats, QUESTION_HEADERS};
pub use repository::{CsvQuestionRepository, InMemoryQuestionRepository, QuestionRepository};
pub use store::QuestionStore;
