use rand::seq::IndexedRandom;
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

use super::errors::QuestionError;
use super::models::{Question, QuestionFilter, StoreStats};
use super::repository::QuestionRepository;

/// In-memory question list with a load-mutate-save cycle against its repository.
/// All lookups are linear scans.
pub struct QuestionStore {
    repository: Box<dyn QuestionRepository>,
    questions: Vec<Question>,
}

impl std::fmt::Debug for QuestionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuestionStore")
            .field("questions", &self.questions.len())
            .finish()
    }
}

impl QuestionStore {
    /// Loads every question from the repository, rejecting duplicate ids
    pub fn open(repository: impl QuestionRepository + 'static) -> Result<Self, QuestionError> {
        let mut store = Self {
            repository: Box::new(repository),
            questions: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory list with the repository contents
    #[instrument(skip(self))]
    pub fn load(&mut self) -> Result<(), QuestionError> {
        let questions = self.repository.load()?;

        let mut seen = HashSet::with_capacity(questions.len());
        if let Some(duplicate) = questions.iter().find(|q| !seen.insert(q.id)) {
            warn!(question_id = duplicate.id, "Duplicate question id in source");
            return Err(QuestionError::DuplicateId(duplicate.id));
        }

        info!(count = questions.len(), "Question store loaded");
        self.questions = questions;
        Ok(())
    }

    pub fn save(&self) -> Result<(), QuestionError> {
        self.repository.save(&self.questions)
    }

    pub fn all(&self) -> &[Question] {
        &self.questions
    }

    pub fn filter(&self, filter: &QuestionFilter) -> Vec<&Question> {
        self.questions.iter().filter(|q| filter.matches(q)).collect()
    }

    pub fn unused(&self) -> Vec<&Question> {
        self.filter(&QuestionFilter::unused())
    }

    /// Uniform pick among the questions matching `filter`
    pub fn random(&self, filter: &QuestionFilter) -> Option<&Question> {
        let candidates = self.filter(filter);
        let picked = candidates.choose(&mut rand::rng()).copied();

        if picked.is_none() {
            debug!(?filter, "No question matches filter");
        }
        picked
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Returns false when no question has this id
    pub fn mark_used(&mut self, id: u32) -> bool {
        match self.questions.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                question.used = true;
                debug!(question_id = id, "Question marked used");
                true
            }
            None => {
                debug!(question_id = id, "Cannot mark unknown question");
                false
            }
        }
    }

    pub fn reset_all(&mut self) {
        for question in &mut self.questions {
            question.used = false;
        }
        debug!("All questions reset to unused");
    }

    pub fn total_count(&self) -> usize {
        self.questions.len()
    }

    pub fn unused_count(&self) -> usize {
        self.questions.iter().filter(|q| !q.used).count()
    }

    pub fn stats(&self) -> StoreStats {
        let mut stats = StoreStats {
            total: self.questions.len(),
            ..StoreStats::default()
        };

        for question in &self.questions {
            if question.used {
                stats.used += 1;
            } else {
                stats.unused += 1;
            }
            *stats.per_category.entry(question.category).or_default() += 1;
        }

        stats
    }
}
