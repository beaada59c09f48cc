use std::io::{self, BufRead, Write};
use strum_macros::Display;
use tracing::{debug, warn};

use super::render;
use super::tokens::Command;
use crate::game::{Game, MAX_PLAYERS, MIN_PLAYERS};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UiState {
    Welcome,
    CollectPlayers,
    InRound,
    /// A player typed quit during their turn
    PlayerExit(String),
    GameOver,
    Exit,
}

/// Sequential prompt front-end. Holds no game rules; every decision goes
/// through [`Game`].
pub struct TextUi<R, W> {
    game: Game,
    input: R,
    output: W,
    state: UiState,
    max_rounds: u32,
}

impl<R: BufRead, W: Write> TextUi<R, W> {
    pub fn new(game: Game, input: R, output: W, max_rounds: u32) -> Self {
        Self {
            game,
            input,
            output,
            state: UiState::Welcome,
            max_rounds,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Runs until the exit state and hands the game back
    pub fn run(mut self) -> io::Result<Game> {
        while self.state != UiState::Exit {
            let next = self.step()?;
            debug!(from = %self.state, to = %next, "UI transition");
            self.state = next;
        }
        Ok(self.game)
    }

    pub fn step(&mut self) -> io::Result<UiState> {
        match self.state.clone() {
            UiState::Welcome => self.welcome(),
            UiState::CollectPlayers => self.collect_players(),
            UiState::InRound => self.in_round(),
            UiState::PlayerExit(name) => self.player_exit(&name),
            UiState::GameOver => self.game_over(),
            UiState::Exit => Ok(UiState::Exit),
        }
    }

    fn welcome(&mut self) -> io::Result<UiState> {
        write!(self.output, "{}", render::welcome())?;
        Ok(UiState::CollectPlayers)
    }

    fn collect_players(&mut self) -> io::Result<UiState> {
        let count = loop {
            let prompt = format!("Number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(UiState::Exit);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => break n,
                _ => writeln!(self.output, "Enter a number from {MIN_PLAYERS} to {MAX_PLAYERS}.")?,
            }
        };

        let mut names = Vec::with_capacity(count);
        for idx in 1..=count {
            let Some(name) = self.prompt(&format!("Player {idx} name (blank for random): "))? else {
                return Ok(UiState::Exit);
            };
            names.push(name.trim().to_string());
        }

        if let Err(e) = self
            .game
            .register_players(&names)
            .and_then(|()| self.game.start(self.max_rounds))
        {
            warn!(error = %e, "Could not start game");
            writeln!(self.output, "Error: {e}")?;
            return Ok(UiState::CollectPlayers);
        }

        let roster: Vec<&str> = self
            .game
            .tracker()
            .players()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        writeln!(self.output, "Players: {}", roster.join(", "))?;
        Ok(UiState::InRound)
    }

    fn in_round(&mut self) -> io::Result<UiState> {
        if self.game.is_over() {
            return Ok(UiState::GameOver);
        }

        // A question left over from a failed submit is asked again
        if self.game.current_question().is_none() {
            match self.game.draw() {
                Ok(Some(_)) => {}
                Ok(None) => {
                    writeln!(self.output, "No questions left.")?;
                    return Ok(UiState::GameOver);
                }
                Err(e) => {
                    warn!(error = %e, "Could not draw question");
                    writeln!(self.output, "Error: {e}")?;
                    return Ok(UiState::GameOver);
                }
            }
        }

        loop {
            let (Some(player), Some(question)) =
                (self.game.answering_player(), self.game.current_question())
            else {
                return Ok(UiState::GameOver);
            };
            let session = self.game.session();
            let text = render::question(player, question, session.round, session.max_rounds);
            write!(self.output, "{text}")?;

            let prompt = format!("Answer [{}]: ", Command::words().join("/"));
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(UiState::GameOver);
            };

            let Some(command) = Command::parse(&line) else {
                writeln!(self.output, "Please answer {}.", Command::listing())?;
                continue;
            };

            if let Some(answer) = command.answer() {
                match self.game.submit(answer) {
                    Ok(outcome) => write!(self.output, "{}", render::outcome(&outcome))?,
                    Err(e) => writeln!(self.output, "Error: {e}")?,
                }
                return Ok(UiState::InRound);
            }

            match command {
                Command::Quit => {
                    return match self.game.clock_out() {
                        Ok(name) => Ok(UiState::PlayerExit(name)),
                        Err(e) => {
                            writeln!(self.output, "Error: {e}")?;
                            Ok(UiState::InRound)
                        }
                    };
                }
                Command::Block => match self.game.use_block_card() {
                    Ok(target) => writeln!(self.output, "Blocked! {target} must answer.")?,
                    Err(e) => writeln!(self.output, "Error: {e}")?,
                },
                Command::Score => {
                    let board = render::scoreboard(&self.game.leaderboard(MAX_PLAYERS));
                    write!(self.output, "{board}")?;
                }
                Command::Yes | Command::No => {}
            }
        }
    }

    fn player_exit(&mut self, name: &str) -> io::Result<UiState> {
        let drinks = self.game.tracker().get(name).map_or(0, |p| p.drinks);
        writeln!(self.output, "{name} clocked out after {drinks} drinks. Bye!")?;
        Ok(UiState::InRound)
    }

    fn game_over(&mut self) -> io::Result<UiState> {
        let results = self.game.final_results();
        write!(self.output, "{}", render::final_results(&results))?;
        let board = render::scoreboard(&self.game.leaderboard(MAX_PLAYERS));
        write!(self.output, "{board}")?;
        self.game.end();
        Ok(UiState::Exit)
    }

    /// `None` on end of input
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
