use std::fmt::Write;

use crate::game::{FinalResults, RoundOutcome};
use crate::questions::{Question, StoreStats};
use crate::scores::{Player, MAX_STRIKES};

const RULE: &str = "============================================================";

pub fn welcome() -> String {
    format!(
        "{RULE}\n  PARTY TRIVIA\n{RULE}\n\
         1. Players answer one question per turn, in order\n\
         2. Answer YES or NO\n\
         3. A correct answer earns points and a STRIKE\n\
         4. At {MAX_STRIKES} strikes you DRINK and your strikes reset\n\
         5. Type BLOCK once per game to pass a question to the previous player\n\
         6. Type QUIT during your turn to leave the game\n\
         7. Fewest drinks wins\n"
    )
}

pub fn question(player: &Player, question: &Question, round: u32, max_rounds: u32) -> String {
    format!(
        "\n--- Round {} of {} ---\n{}, {}/{} strikes, {} drinks\nQ: {}\n",
        round + 1,
        max_rounds,
        player.name,
        player.strikes,
        MAX_STRIKES,
        player.drinks,
        question.question
    )
}

pub fn outcome(outcome: &RoundOutcome) -> String {
    let mut out = String::new();
    let verdict = if outcome.is_correct { "CORRECT" } else { "WRONG" };
    let _ = writeln!(out, "{} answered {}: {}", outcome.player_name, outcome.answer, verdict);

    if outcome.is_correct {
        let _ = writeln!(
            out,
            "Strike {}/{}, score {}",
            outcome.effect.strikes_reached, MAX_STRIKES, outcome.effect.score
        );
    }
    if outcome.effect.drank {
        let _ = writeln!(
            out,
            "{} MUST DRINK! Strikes reset to 0 (drinks: {})",
            outcome.player_name, outcome.effect.drinks
        );
    }
    out
}

pub fn scoreboard(players: &[&Player]) -> String {
    let mut out = format!(
        "{:<4}{:<16}{:>7}{:>9}{:>8}{:>10}\n",
        "#", "Player", "Score", "Strikes", "Drinks", "Accuracy"
    );
    for (idx, player) in players.iter().enumerate() {
        let name = if player.active {
            player.name.clone()
        } else {
            format!("{} (out)", player.name)
        };
        let _ = writeln!(
            out,
            "{:<4}{:<16}{:>7}{:>9}{:>8}{:>9.0}%",
            idx + 1,
            name,
            player.score,
            format!("{}/{}", player.strikes, MAX_STRIKES),
            player.drinks,
            player.accuracy() * 100.0
        );
    }
    out
}

pub fn final_results(results: &FinalResults) -> String {
    let mut out = format!("\n{RULE}\n  GAME OVER after {} rounds\n{RULE}\n", results.total_rounds);
    for standing in &results.standings {
        let _ = writeln!(
            out,
            "{}. {} with {} drinks, {} points{}",
            standing.rank,
            standing.name,
            standing.drinks,
            standing.score,
            if standing.block_card_used { " (block card used)" } else { "" }
        );
    }
    if let Some(winner) = &results.winner {
        let _ = writeln!(out, "Winner: {winner}");
    }
    out
}

pub fn store_stats(stats: &StoreStats) -> String {
    let mut out = format!(
        "Questions: {} total, {} used, {} unused\n",
        stats.total, stats.used, stats.unused
    );
    for (category, count) in &stats.per_category {
        let _ = writeln!(out, "  category {category}: {count}");
    }
    out
}
