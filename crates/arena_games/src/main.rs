//! Arena Games - terminal front end
//!
//! Runs the arena engines locally: a scripted demo, or two players sharing
//! one terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod play;

use anyhow::Result;
use arena_engine::{Connect4Engine, LocalGame, TicTacToeEngine};
use clap::Parser;
use cli::{Cli, Command, GameKind};
use config::ArenaConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ArenaConfig::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Demo => play::run_demo(&mut std::io::stdout().lock()),
        Command::Play { game } => run_play(game, &config),
    }
}

/// Run an interactive local game on stdin/stdout
#[instrument(skip(config))]
fn run_play(kind: GameKind, config: &ArenaConfig) -> Result<()> {
    info!("Starting local game");

    let input = std::io::stdin().lock();
    let mut output = std::io::stdout().lock();

    match kind {
        GameKind::Connect4 => {
            let mut game = LocalGame::new(Connect4Engine);
            play::run_session(&mut game, play::parse_connect4, config, input, &mut output)
        }
        GameKind::TicTacToe => {
            let mut game = LocalGame::new(TicTacToeEngine);
            play::run_session(&mut game, play::parse_tictactoe, config, input, &mut output)
        }
    }
}
