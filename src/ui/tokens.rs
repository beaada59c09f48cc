use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::game::Answer;

/// Words understood at the round prompt, matched case-insensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Command {
    #[strum(to_string = "yes", serialize = "y", serialize = "si", serialize = "sí")]
    Yes,
    #[strum(to_string = "no", serialize = "n")]
    No,
    #[strum(to_string = "block", serialize = "b")]
    Block,
    #[strum(to_string = "score", serialize = "s")]
    Score,
    #[strum(to_string = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        Self::from_str(input.trim()).ok()
    }

    /// Main word of every command, in prompt order
    pub fn words() -> Vec<String> {
        Self::iter().map(|c| c.to_string()).collect()
    }

    /// "yes, no, block, score or quit"
    pub fn listing() -> String {
        let words = Self::words();
        match words.split_last() {
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
            None => String::new(),
        }
    }

    pub fn answer(self) -> Option<Answer> {
        match self {
            Command::Yes => Some(Answer::Yes),
            Command::No => Some(Answer::No),
            _ => None,
        }
    }
}
