use std::fs;
use std::path::{Path, PathBuf};

use party_trivia::{CsvQuestionRepository, Question, QuestionRepository};

// ============================================================================
// Temporary CSV question files
// ============================================================================

/// Question file in the system temp dir, removed on drop
pub struct TempQuestionFile {
    path: PathBuf,
}

impl TempQuestionFile {
    /// Written through the crate's own CSV writer so fields are quoted properly
    pub fn with_questions(questions: &[Question]) -> Self {
        let file = Self { path: temp_path() };
        CsvQuestionRepository::new(&file.path)
            .save(questions)
            .expect("temp question file should be writable");
        file
    }

    /// Raw contents, for malformed or hand-shaped fixtures
    pub fn with_contents(contents: &str) -> Self {
        let path = temp_path();
        fs::write(&path, contents).expect("temp question file should be writable");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("temp question file should be readable")
    }
}

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("party-trivia-it-{}.csv", uuid::Uuid::new_v4()))
}

impl Drop for TempQuestionFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
