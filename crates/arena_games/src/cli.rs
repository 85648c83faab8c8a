//! Command-line interface for arena_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arena Games - local two-player games in the terminal
#[derive(Parser, Debug)]
#[command(name = "arena_games")]
#[command(about = "Play turn-based arena games locally", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "arena.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a short scripted Connect-4 game
    Demo,

    /// Play a local two-player game on this terminal
    Play {
        /// Which game to play
        #[arg(short, long, value_enum, default_value_t = GameKind::Connect4)]
        game: GameKind,
    },
}

/// Games selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    /// Connect-4 (moves are column numbers 0-6)
    Connect4,
    /// Tic-tac-toe (moves are positions 0-8 or labels like `center`)
    #[value(name = "tictactoe")]
    TicTacToe,
}
