use party_trivia::{
    CsvQuestionRepository, Game, InMemoryQuestionRepository, Question, QuestionFilter,
    QuestionStore,
};

use super::question_files::TempQuestionFile;

// ============================================================================
// Game Setup Utilities
// ============================================================================

pub struct GameBuilder {
    questions: Vec<Question>,
    players: Vec<String>,
    rounds: u32,
    filter: QuestionFilter,
}

#[allow(dead_code)]
impl GameBuilder {
    pub fn new() -> Self {
        Self {
            questions: vec![],
            players: vec![],
            rounds: 20,
            filter: QuestionFilter::default(),
        }
    }

    /// Ten questions split over categories 1 and 2; even ids answer "Yes"
    pub fn with_standard_deck(self) -> Self {
        let questions = (1..=10)
            .map(|id| {
                Question::new(id, format!("Question {id}?"), 1 + id % 2, 1)
                    .with_answer(id % 2 == 0)
            })
            .collect();
        self.with_questions(questions)
    }

    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    pub fn with_players(mut self, players: &[&str]) -> Self {
        self.players = players.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(&["alice", "bob", "carol"])
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_filter(mut self, filter: QuestionFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Game backed by an in-memory repository, players registered and started
    pub fn build(self) -> Game {
        let store = QuestionStore::open(InMemoryQuestionRepository::new(self.questions.clone()))
            .expect("in-memory store should open");
        self.start(store)
    }

    /// Game backed by a real CSV file; keep the file alive for the test's duration
    pub fn build_with_file(self) -> (Game, TempQuestionFile) {
        let file = TempQuestionFile::with_questions(&self.questions);
        let store = QuestionStore::open(CsvQuestionRepository::new(file.path()))
            .expect("csv store should open");
        (self.start(store), file)
    }

    fn start(self, store: QuestionStore) -> Game {
        let mut game = Game::new(store).with_filter(self.filter);
        if !self.players.is_empty() {
            game.register_players(&self.players)
                .expect("players should register");
            game.start(self.rounds).expect("game should start");
        }
        game
    }
}
