use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, instrument};

use super::errors::QuestionError;
use super::models::{Question, QUESTION_HEADERS};

/// Backing storage for the question store. The whole list is read and
/// written at once.
pub trait QuestionRepository {
    fn load(&self) -> Result<Vec<Question>, QuestionError>;
    fn save(&self, questions: &[Question]) -> Result<(), QuestionError>;
}

/// Comma-separated file with a fixed header row
#[derive(Debug, Clone)]
pub struct CsvQuestionRepository {
    path: PathBuf,
}

impl CsvQuestionRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuestionRepository for CsvQuestionRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<Question>, QuestionError> {
        if !self.path.exists() {
            return Err(QuestionError::NotFound(self.path.clone()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        if !headers.iter().eq(QUESTION_HEADERS.iter().copied()) {
            return Err(QuestionError::InvalidHeader(
                headers.iter().collect::<Vec<_>>().join(","),
            ));
        }

        let questions = reader
            .deserialize()
            .collect::<Result<Vec<Question>, csv::Error>>()?;

        debug!(count = questions.len(), "Loaded questions from file");
        Ok(questions)
    }

    #[instrument(skip(self, questions), fields(path = %self.path.display()))]
    fn save(&self, questions: &[Question]) -> Result<(), QuestionError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        writer.write_record(QUESTION_HEADERS)?;
        for question in questions {
            writer.serialize(question)?;
        }
        writer.flush()?;

        debug!(count = questions.len(), "Saved questions to file");
        Ok(())
    }
}

impl<R: QuestionRepository + ?Sized> QuestionRepository for Rc<R> {
    fn load(&self) -> Result<Vec<Question>, QuestionError> {
        (**self).load()
    }

    fn save(&self, questions: &[Question]) -> Result<(), QuestionError> {
        (**self).save(questions)
    }
}

/// In-memory implementation of QuestionRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: RefCell<Vec<Question>>,
    saves: RefCell<usize>,
}

impl InMemoryQuestionRepository {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: RefCell::new(questions),
            saves: RefCell::new(0),
        }
    }

    /// Snapshot of what was last saved
    pub fn snapshot(&self) -> Vec<Question> {
        self.questions.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn load(&self) -> Result<Vec<Question>, QuestionError> {
        Ok(self.questions.borrow().clone())
    }

    fn save(&self, questions: &[Question]) -> Result<(), QuestionError> {
        *self.questions.borrow_mut() = questions.to_vec();
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
