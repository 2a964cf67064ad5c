use anyhow::{Context, Result};
use clap::Parser;
use crt_hangman::cli::{Cli, Config, Presentation};
use crt_hangman::core::terminal::{CrtTerminal, PlainTerminal, Presenter};
use crt_hangman::games::hangman::{HangmanGame, HangmanRenderer, WordBank};
use crt_hangman::{Engine, EngineSettings};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::Level;

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());
    init_tracing(config.log_level);

    // A bad word list is fatal before anything is drawn
    let bank = match &config.words {
        Some(words) => WordBank::new(words).context("invalid --words list")?,
        None => WordBank::default(),
    };
    tracing::info!(words = bank.len(), seed = ?config.seed, "word bank ready");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = HangmanGame::new(bank, rng);

    match config.presentation {
        Presentation::Plain => play(game, PlainTerminal::new(io::stdout()), config.engine),
        Presentation::Crt(style) => play(game, CrtTerminal::new(io::stdout(), style), config.engine),
    }
}

fn play<P: Presenter>(game: HangmanGame<StdRng>, presenter: P, settings: EngineSettings) -> Result<()> {
    let mut engine = Engine::new(game, HangmanRenderer, presenter, settings);
    engine.run(io::stdin().lock())?;
    Ok(())
}

fn init_tracing(level: Level) {
    // stdout belongs to the game screen
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
