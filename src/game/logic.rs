// A game owns the question store, the score tracker and one session. Turns cycle
// through the active players in registration order; a block card can pass the
// current question to the previous active player without moving the turn.
use tracing::{debug, info, info_span, warn};

use crate::game::errors::GameError;
use crate::game::session::{Answer, GameSession, HistoryEntry, RoundOutcome};
use crate::questions::{Question, QuestionFilter, QuestionStore};
use crate::scores::{EventDetail, Player, ScoreEvent, ScoreTracker, Scoreboard};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub rank: usize,
    pub name: String,
    pub drinks: u32,
    pub strikes: u8,
    pub score: u32,
    pub accuracy: f64,
    pub block_card_used: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinalResults {
    pub winner: Option<String>,
    pub loser: Option<String>,
    pub standings: Vec<Standing>,
    pub total_rounds: u32,
    pub history_length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    pub round: u32,
    pub max_rounds: u32,
    pub is_active: bool,
    pub is_over: bool,
    pub active_players: usize,
    pub unused_questions: usize,
    pub current_player: Option<String>,
    pub answering_player: Option<String>,
    pub current_question: Option<Question>,
}

#[derive(Debug)]
pub struct Game {
    store: QuestionStore,
    tracker: ScoreTracker,
    scoreboard: Scoreboard,
    session: GameSession,
    filter: QuestionFilter,
    reset_on_register: bool,
}

impl Game {
    pub fn new(store: QuestionStore) -> Self {
        Self {
            store,
            tracker: ScoreTracker::new(),
            scoreboard: Scoreboard::new(),
            session: GameSession::default(),
            filter: QuestionFilter::unused(),
            reset_on_register: true,
        }
    }

    /// Keeps used flags across registrations so a pool can carry over between games
    pub fn keep_used(mut self, keep: bool) -> Self {
        self.reset_on_register = !keep;
        self
    }

    /// Restricts drawn questions by category/difficulty. Drawing always skips used questions.
    pub fn with_filter(mut self, filter: QuestionFilter) -> Self {
        self.filter = QuestionFilter {
            unused_only: true,
            ..filter
        };
        self
    }

    /// Replaces the roster. Blank names get a generated one. Resets every
    /// question to unused unless built with `keep_used(true)`.
    pub fn register_players<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: names.len(),
            });
        }

        let mut tracker = ScoreTracker::new();
        for name in names {
            let name = match name.as_ref().trim() {
                "" => generated_name(&tracker),
                name => name.to_string(),
            };
            if !tracker.add_player(&name) {
                return Err(GameError::DuplicatePlayer(name));
            }
        }

        self.tracker = tracker;
        self.scoreboard.clear();
        if self.reset_on_register {
            self.store.reset_all();
        }
        self.session.reset(self.session.max_rounds);

        info!(players = self.tracker.len(), "Players registered");
        Ok(())
    }

    /// Starts a new game: round counter and history are cleared whatever state
    /// the previous session was in.
    pub fn start(&mut self, max_rounds: u32) -> Result<(), GameError> {
        if self.tracker.is_empty() {
            return Err(GameError::NoPlayers);
        }

        self.session.reset(max_rounds);
        self.session.active = true;
        self.session.turn = self.first_active_index().ok_or(GameError::NoActivePlayer)?;

        info!(session_id = %self.session.id, max_rounds, "Game started");
        Ok(())
    }

    /// Draws a random unused question, marks it used and persists the store.
    /// Returns `None` once the filtered pool is exhausted. A drawn question
    /// must be answered or abandoned by clocking out before the next draw.
    pub fn draw(&mut self) -> Result<Option<&Question>, GameError> {
        let _span = info_span!("draw", session_id = %self.session.id).entered();

        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if let Some(pending) = &self.session.current_question {
            return Err(GameError::QuestionPending(pending.id));
        }

        let Some(question) = self.store.random(&self.filter).cloned() else {
            info!(round = self.session.round, "Question pool exhausted");
            self.session.current_question = None;
            return Ok(None);
        };

        self.store.mark_used(question.id);
        self.store.save()?;

        debug!(question_id = question.id, "Drew question");
        self.session.answering = None;
        Ok(Some(&*self.session.current_question.insert(question)))
    }

    /// Validates the answer, updates counters and moves the turn on
    pub fn submit(&mut self, answer: Answer) -> Result<RoundOutcome, GameError> {
        let _span = info_span!("submit", session_id = %self.session.id).entered();

        let player_name = self
            .answering_player()
            .map(|p| p.name.clone())
            .ok_or(GameError::NoActivePlayer)?;
        let question = self
            .session
            .current_question
            .take()
            .ok_or(GameError::NoCurrentQuestion)?;

        let is_correct = answer.is_correct_for(&question);
        let effect = if is_correct {
            self.tracker.record_correct(&player_name)
        } else {
            self.tracker.record_incorrect(&player_name)
        }
        .ok_or_else(|| GameError::UnknownPlayer(player_name.clone()))?;

        if is_correct {
            self.scoreboard.record(ScoreEvent::new(
                &player_name,
                EventDetail::Strike {
                    strike_count: effect.strikes_reached,
                    must_drink: effect.drank,
                },
            ));
        }
        if effect.drank {
            self.scoreboard.record(ScoreEvent::new(
                &player_name,
                EventDetail::Drink {
                    drink_count: effect.drinks,
                },
            ));
        }

        self.session.round += 1;
        self.session.answering = None;
        self.advance_turn();

        let outcome = RoundOutcome {
            round: self.session.round,
            player_name,
            question_id: question.id,
            answer,
            correct_answer: question.correct_answer,
            is_correct,
            effect,
            game_over: self.is_over(),
        };

        info!(
            round = outcome.round,
            player_name = %outcome.player_name,
            question_id = outcome.question_id,
            is_correct,
            "Round answered"
        );
        self.session
            .history
            .push(HistoryEntry::Answered(outcome.clone()));
        Ok(outcome)
    }

    /// Spends the answering player's block card and passes the current
    /// question to the previous active player, whose name is returned.
    pub fn use_block_card(&mut self) -> Result<String, GameError> {
        if self.session.current_question.is_none() {
            return Err(GameError::NoCurrentQuestion);
        }

        let blocker_index = self.answering_index().ok_or(GameError::NoActivePlayer)?;
        let blocker = &self.tracker.players()[blocker_index];
        if !blocker.has_block_card {
            return Err(GameError::BlockCardUsed(blocker.name.clone()));
        }

        let target_index = self
            .previous_active_index(blocker_index)
            .ok_or(GameError::NoBlockTarget)?;
        let target = self.tracker.players()[target_index].name.clone();
        let blocker = self.tracker.players()[blocker_index].name.clone();

        if let Some(player) = self.tracker.get_mut(&blocker) {
            player.use_block_card();
        }
        self.session.answering = Some(target.clone());

        self.scoreboard.record(ScoreEvent::new(
            &blocker,
            EventDetail::BlockCard {
                target_player: target.clone(),
            },
        ));
        self.session.history.push(HistoryEntry::Blocked {
            blocker: blocker.clone(),
            target: target.clone(),
        });

        info!(blocker = %blocker, target = %target, "Block card used");
        Ok(target)
    }

    /// The answering player leaves the game. The drawn question stays used.
    pub fn clock_out(&mut self) -> Result<String, GameError> {
        let index = self.answering_index().ok_or(GameError::NoActivePlayer)?;
        let name = self.tracker.players()[index].name.clone();

        let clocked_out = self
            .tracker
            .get_mut(&name)
            .is_some_and(|player| player.clock_out());
        if !clocked_out {
            return Err(GameError::UnknownPlayer(name));
        }

        if let Some(question) = self.session.current_question.take() {
            // Already marked at draw time; persist in case the save there was skipped
            if self.store.mark_used(question.id) {
                self.store.save()?;
            }
        }

        let round = self.session.round;
        self.scoreboard.record(ScoreEvent::new(
            &name,
            EventDetail::ClockOut { round },
        ));
        self.session.history.push(HistoryEntry::ClockedOut {
            player_name: name.clone(),
            round,
        });

        self.session.answering = None;
        self.advance_turn();

        info!(player_name = %name, round, "Player clocked out");
        Ok(name)
    }

    /// Over when the round limit is reached or fewer than two players remain
    pub fn is_over(&self) -> bool {
        self.session.rounds_exhausted() || self.tracker.active_players().len() < MIN_PLAYERS
    }

    pub fn end(&mut self) {
        if self.session.active {
            info!(session_id = %self.session.id, rounds = self.session.round, "Game ended");
        }
        self.session.active = false;
        self.session.current_question = None;
    }

    /// Player whose turn it is
    pub fn current_player(&self) -> Option<&Player> {
        self.tracker
            .players()
            .get(self.session.turn)
            .filter(|p| p.active)
    }

    /// Player who must answer the current question
    pub fn answering_player(&self) -> Option<&Player> {
        match &self.session.answering {
            Some(name) => self.tracker.get(name).filter(|p| p.active),
            None => self.current_player(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question.as_ref()
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn tracker(&self) -> &ScoreTracker {
        &self.tracker
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn leaderboard(&self, top_n: usize) -> Vec<&Player> {
        self.tracker.leaderboard(top_n)
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            round: self.session.round,
            max_rounds: self.session.max_rounds,
            is_active: self.session.active,
            is_over: self.is_over(),
            active_players: self.tracker.active_players().len(),
            unused_questions: self.store.filter(&self.filter).len(),
            current_player: self.current_player().map(|p| p.name.clone()),
            answering_player: self.answering_player().map(|p| p.name.clone()),
            current_question: self.session.current_question.clone(),
        }
    }

    /// Standings from fewest to most drinks; ties go to the higher score, then name
    pub fn final_results(&self) -> FinalResults {
        let mut ranked: Vec<&Player> = self.tracker.players().iter().collect();
        ranked.sort_by(|a, b| {
            a.drinks
                .cmp(&b.drinks)
                .then_with(|| b.score.cmp(&a.score))
                .then_with(|| a.name.cmp(&b.name))
        });

        let standings: Vec<Standing> = ranked
            .iter()
            .enumerate()
            .map(|(idx, p)| Standing {
                rank: idx + 1,
                name: p.name.clone(),
                drinks: p.drinks,
                strikes: p.strikes,
                score: p.score,
                accuracy: p.accuracy(),
                block_card_used: !p.has_block_card,
                active: p.active,
            })
            .collect();

        FinalResults {
            winner: standings.first().map(|s| s.name.clone()),
            loser: standings.last().map(|s| s.name.clone()),
            standings,
            total_rounds: self.session.round,
            history_length: self.session.history.len(),
        }
    }

    fn first_active_index(&self) -> Option<usize> {
        self.tracker.players().iter().position(|p| p.active)
    }

    fn answering_index(&self) -> Option<usize> {
        let name = &self.answering_player()?.name;
        self.tracker.players().iter().position(|p| &p.name == name)
    }

    fn advance_turn(&mut self) {
        let players = self.tracker.players();
        let count = players.len();
        let next = (1..=count)
            .map(|step| (self.session.turn + step) % count.max(1))
            .find(|&idx| players[idx].active);

        match next {
            Some(idx) => self.session.turn = idx,
            None => warn!("No active player left to take the turn"),
        }
    }

    fn previous_active_index(&self, from: usize) -> Option<usize> {
        let players = self.tracker.players();
        let count = players.len();
        (1..count)
            .map(|step| (from + count - step) % count)
            .find(|&idx| idx != from && players[idx].active)
    }
}

fn generated_name(tracker: &ScoreTracker) -> String {
    loop {
        let name = petname::Petnames::default().generate_one(2, " ");
        if tracker.get(&name).is_none() {
            return name;
        }
    }
}
