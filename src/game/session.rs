use strum_macros::Display;
use uuid::Uuid;

use crate::questions::Question;
use crate::scores::AnswerEffect;

pub const DEFAULT_MAX_ROUNDS: u32 = 20;

/// Literal yes/no answer given by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Answer {
    #[strum(serialize = "YES")]
    Yes,
    #[strum(serialize = "NO")]
    No,
}

impl Answer {
    pub fn as_bool(self) -> bool {
        matches!(self, Answer::Yes)
    }

    /// Checks the answer against the question's key. Without a key a `Yes`
    /// counts as correct.
    pub fn is_correct_for(self, question: &Question) -> bool {
        match question.correct_answer {
            Some(expected) => self.as_bool() == expected,
            None => self.as_bool(),
        }
    }
}

impl From<bool> for Answer {
    fn from(yes: bool) -> Self {
        if yes {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

/// Result of one answered round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub round: u32,
    pub player_name: String,
    pub question_id: u32,
    pub answer: Answer,
    pub correct_answer: Option<bool>,
    pub is_correct: bool,
    pub effect: AnswerEffect,
    pub game_over: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryEntry {
    Answered(RoundOutcome),
    Blocked { blocker: String, target: String },
    ClockedOut { player_name: String, round: u32 },
}

/// Per-session state, discarded when the game ends
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: Uuid,
    pub max_rounds: u32,
    pub round: u32,
    pub current_question: Option<Question>,
    /// Index into the registered players of whose turn it is
    pub turn: usize,
    /// Set when a block card passed the current question on
    pub answering: Option<String>,
    pub history: Vec<HistoryEntry>,
    pub active: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

impl GameSession {
    pub fn new(max_rounds: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            max_rounds,
            round: 0,
            current_question: None,
            turn: 0,
            answering: None,
            history: Vec::new(),
            active: false,
        }
    }

    /// Fresh session state regardless of what happened before
    pub fn reset(&mut self, max_rounds: u32) {
        *self = Self::new(max_rounds);
    }

    pub fn rounds_exhausted(&self) -> bool {
        self.round >= self.max_rounds
    }

    pub fn answered_rounds(&self) -> impl Iterator<Item = &RoundOutcome> {
        self.history.iter().filter_map(|entry| match entry {
            HistoryEntry::Answered(outcome) => Some(outcome),
            _ => None,
        })
    }
}
