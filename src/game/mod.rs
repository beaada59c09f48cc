// Public API
pub use errors::GameError;
pub use logic::{FinalResults, Game, GameStatus, Standing, MAX_PLAYERS, MIN_PLAYERS};
pub use session::{Answer, GameSession, HistoryEntry, RoundOutcome, DEFAULT_MAX_ROUNDS};

// Internal modules
mod errors;
mod logic;
mod session;
