use clap::Parser;
use std::io;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use party_trivia::config::DEFAULT_LOG_FILTER;
use party_trivia::{ui::render, AppError, Config, CsvQuestionRepository, Game, QuestionStore, TextUi};

fn main() {
    // Initialize tracing; stdout belongs to the prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::parse();

    if let Err(e) = run(&config) {
        error!(error = %e, "Party trivia stopped");
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    info!(path = %config.questions.display(), "Loading questions");
    let mut store = QuestionStore::open(CsvQuestionRepository::new(&config.questions))?;

    if config.stats {
        print!("{}", render::store_stats(&store.stats()));
        return Ok(());
    }

    if !config.keep_used {
        store.reset_all();
        store.save()?;
    }

    let game = Game::new(store)
        .with_filter(config.filter())
        .keep_used(config.keep_used);
    let stdin = io::stdin();
    let ui = TextUi::new(game, stdin.lock(), io::stdout(), config.rounds);
    let game = ui.run()?;

    info!(
        rounds = game.session().round,
        events = game.scoreboard().events().len(),
        "Session finished"
    );
    Ok(())
}
