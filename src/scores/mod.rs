pub mod events;
pub mod models;
mod tracker;

pub use events::{EventDetail, EventKind, ScoreEvent, ScoreSummary, Scoreboard};
pub use models::{AnswerEffect, Player, MAX_STRIKES, POINTS_PER_CORRECT};
pub use tracker::ScoreTracker;
