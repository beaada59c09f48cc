
/// Strikes at which a player drinks and starts over
pub const MAX_STRIKES: u8 = 3;
pub const POINTS_PER_CORRECT: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub score: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub strikes: u8,
    pub drinks: u32,
    pub has_block_card: bool,
    pub active: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            correct: 0,
            incorrect: 0,
            strikes: 0,
            drinks: 0,
            has_block_card: true,
            active: true,
        }
    }

    /// correct / (correct + incorrect), zero before the first answer
    pub fn accuracy(&self) -> f64 {
        let answered = self.correct + self.incorrect;
        if answered == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(answered)
        }
    }

    pub fn add_strike(&mut self) -> u8 {
        self.strikes = (self.strikes + 1).min(MAX_STRIKES);
        self.strikes
    }

    pub fn must_drink(&self) -> bool {
        self.strikes >= MAX_STRIKES
    }

    pub fn drink(&mut self) {
        self.drinks += 1;
        self.strikes = 0;
    }

    /// Spends the block card; false if it was already used
    pub fn use_block_card(&mut self) -> bool {
        std::mem::replace(&mut self.has_block_card, false)
    }

    /// Returns false if the player already left
    pub fn clock_out(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub(crate) fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// What a single recorded answer did to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerEffect {
    pub score: u32,
    /// Strikes after the answer, already reset if the player drank
    pub strikes: u8,
    /// Strike count this answer reached before any reset
    pub strikes_reached: u8,
    pub drank: bool,
    pub drinks: u32,
}

impl AnswerEffect {
    pub(crate) fn snapshot(player: &Player, strikes_reached: u8, drank: bool) -> Self {
        Self {
            score: player.score,
            strikes: player.strikes,
            strikes_reached,
            drank,
            drinks: player.drinks,
        }
    }
}
