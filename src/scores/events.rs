use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    Strike,
    Drink,
    ClockOut,
    BlockCard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetail {
    Strike { strike_count: u8, must_drink: bool },
    Drink { drink_count: u32 },
    ClockOut { round: u32 },
    BlockCard { target_player: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEvent {
    pub player_name: String,
    pub detail: EventDetail,
    pub timestamp: DateTime<Utc>,
}

impl ScoreEvent {
    pub fn new(player_name: impl Into<String>, detail: EventDetail) -> Self {
        Self {
            player_name: player_name.into(),
            detail,
            timestamp: Utc::now(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self.detail {
            EventDetail::Strike { .. } => EventKind::Strike,
            EventDetail::Drink { .. } => EventKind::Drink,
            EventDetail::ClockOut { .. } => EventKind::ClockOut,
            EventDetail::BlockCard { .. } => EventKind::BlockCard,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    pub total_events: usize,
    pub player_drinks: BTreeMap<String, u32>,
    pub player_strikes: BTreeMap<String, u8>,
    pub total_strike_events: usize,
    pub total_drink_events: usize,
    pub total_clock_outs: usize,
    pub total_block_cards_used: usize,
}

/// Append-only log of strikes, drinks, exits and block cards for one session
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    events: Vec<ScoreEvent>,
    player_drinks: BTreeMap<String, u32>,
    player_strikes: BTreeMap<String, u8>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: ScoreEvent) {
        match &event.detail {
            EventDetail::Strike { strike_count, .. } => {
                self.player_strikes
                    .insert(event.player_name.clone(), *strike_count);
            }
            EventDetail::Drink { drink_count } => {
                self.player_drinks
                    .insert(event.player_name.clone(), *drink_count);
                // Drinking clears the strike counter
                self.player_strikes.insert(event.player_name.clone(), 0);
            }
            EventDetail::ClockOut { .. } | EventDetail::BlockCard { .. } => {}
        }
        self.events.push(event);
    }

    pub fn player_drinks(&self, player_name: &str) -> u32 {
        self.player_drinks.get(player_name).copied().unwrap_or(0)
    }

    pub fn player_strikes(&self, player_name: &str) -> u8 {
        self.player_strikes.get(player_name).copied().unwrap_or(0)
    }

    pub fn events(&self) -> &[ScoreEvent] {
        &self.events
    }

    pub fn events_for<'a>(&'a self, player_name: &'a str) -> impl Iterator<Item = &'a ScoreEvent> {
        self.events
            .iter()
            .filter(move |e| e.player_name == player_name)
    }

    /// Strike count reached at each strike event, per player
    pub fn strike_history(&self) -> BTreeMap<String, Vec<u8>> {
        let mut history: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        for event in &self.events {
            if let EventDetail::Strike { strike_count, .. } = event.detail {
                history
                    .entry(event.player_name.clone())
                    .or_default()
                    .push(strike_count);
            }
        }
        history
    }

    pub fn drink_history(&self) -> BTreeMap<String, Vec<u32>> {
        let mut history: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        for event in &self.events {
            if let EventDetail::Drink { drink_count } = event.detail {
                history
                    .entry(event.player_name.clone())
                    .or_default()
                    .push(drink_count);
            }
        }
        history
    }

    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary {
            total_events: self.events.len(),
            player_drinks: self.player_drinks.clone(),
            player_strikes: self.player_strikes.clone(),
            total_strike_events: self.count(EventKind::Strike),
            total_drink_events: self.count(EventKind::Drink),
            total_clock_outs: self.count(EventKind::ClockOut),
            total_block_cards_used: self.count(EventKind::BlockCard),
        }
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.player_drinks.clear();
        self.player_strikes.clear();
    }
}
