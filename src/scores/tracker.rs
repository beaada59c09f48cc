use tracing::{debug, info};

use super::models::{AnswerEffect, Player, POINTS_PER_CORRECT};

/// Per-player counters keyed by name, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    players: Vec<Player>,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if a player with this name (ignoring case) exists
    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.get(name).is_some() {
            debug!(player_name = %name, "Rejected player registration");
            return false;
        }

        self.players.push(Player::new(name));
        info!(player_name = %name, "Player added");
        true
    }

    /// Returns false if no such player exists
    pub fn remove_player(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| !p.matches_name(name));

        let removed = self.players.len() != before;
        if removed {
            info!(player_name = %name, "Player removed");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.matches_name(name))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.matches_name(name))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn active_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.active).collect()
    }

    pub fn add_points(&mut self, name: &str, points: u32) -> bool {
        match self.get_mut(name) {
            Some(player) => {
                player.score = player.score.saturating_add(points);
                true
            }
            None => false,
        }
    }

    /// Awards points and a strike; the third strike turns into a drink
    pub fn record_correct(&mut self, name: &str) -> Option<AnswerEffect> {
        let player = self.get_mut(name)?;

        player.correct += 1;
        player.score = player.score.saturating_add(POINTS_PER_CORRECT);
        let reached = player.add_strike();

        let drank = player.must_drink();
        if drank {
            player.drink();
            info!(player_name = %player.name, drinks = player.drinks, "Player must drink");
        }

        debug!(player_name = %player.name, strikes = player.strikes, "Recorded correct answer");
        Some(AnswerEffect::snapshot(player, reached, drank))
    }

    pub fn record_incorrect(&mut self, name: &str) -> Option<AnswerEffect> {
        let player = self.get_mut(name)?;
        player.incorrect += 1;
        let strikes = player.strikes;

        debug!(player_name = %player.name, "Recorded incorrect answer");
        Some(AnswerEffect::snapshot(player, strikes, false))
    }

    /// Score descending, ties by name, truncated to `top_n`
    pub fn leaderboard(&self, top_n: usize) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        ranked.truncate(top_n);
        ranked
    }
}
