//! Line-oriented local play over a [`LocalGame`].

use crate::config::ArenaConfig;
use anyhow::Result;
use arena_engine::{
    Connect4Engine, Connect4Move, GameEngine, LocalGame, Outcome, Player, Position,
};
use std::fmt::Debug;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// A parsed line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<M> {
    /// Play a move for the player holding the turn.
    Move(M),
    /// Take back the last move.
    Undo,
    /// Start over.
    Reset,
    /// Print the board.
    Board,
    /// List commands.
    Help,
    /// Leave the game.
    Quit,
}

impl<M> Command<M> {
    /// Parses a line, handing anything that is not a keyword to `parse_move`.
    pub fn parse(line: &str, parse_move: impl Fn(&str) -> Option<M>) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "undo" | "u" => Some(Command::Undo),
            "reset" => Some(Command::Reset),
            "board" | "b" => Some(Command::Board),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => parse_move(other).map(Command::Move),
        }
    }
}

const HELP: &str = "Commands: <move>, undo, reset, board, help, quit";

/// Parses a Connect-4 column. Out-of-range numbers are passed through for the
/// engine to reject.
pub fn parse_connect4(input: &str) -> Option<Connect4Move> {
    input.trim().parse::<i32>().ok().map(Connect4Move::new)
}

/// Parses a tic-tac-toe position by index or label.
pub fn parse_tictactoe(input: &str) -> Option<Position> {
    Position::parse(input)
}

/// Runs a session until `quit` or end of input.
///
/// Rejected moves are reported and the loop continues.
#[instrument(skip_all)]
pub fn run_session<S, M, E>(
    game: &mut LocalGame<S, M, E>,
    parse_move: impl Fn(&str) -> Option<M>,
    config: &ArenaConfig,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<()>
where
    E: GameEngine<S, M>,
    S: Clone,
    M: Clone + Debug,
{
    writeln!(output, "{}", game.state_string())?;
    writeln!(output, "{}", HELP)?;
    prompt(game, config, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(game, config, output)?;
            continue;
        }

        let Some(command) = Command::parse(&line, &parse_move) else {
            writeln!(output, "Unrecognized input: {}", line.trim())?;
            prompt(game, config, output)?;
            continue;
        };
        debug!(?command, "Command received");

        match command {
            Command::Move(mv) => {
                let player = game.current_player();
                match game.make_move(mv) {
                    Ok(()) => {
                        if *config.show_board() {
                            writeln!(output, "{}", game.state_string())?;
                        }
                        if let Some(outcome) = game.winner() {
                            writeln!(output, "{}", describe_outcome(outcome, config))?;
                        }
                    }
                    Err(e) => writeln!(output, "{} cannot play that: {}", config.name_of(player), e)?,
                }
            }
            Command::Undo => {
                if game.can_undo() {
                    game.undo_last_move()?;
                    writeln!(output, "{}", game.state_string())?;
                } else {
                    writeln!(output, "Nothing to undo")?;
                }
            }
            Command::Reset => {
                game.reset_game();
                writeln!(output, "{}", game.state_string())?;
            }
            Command::Board => writeln!(output, "{}", game.state_string())?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }

        prompt(game, config, output)?;
    }

    Ok(())
}

fn prompt<S, M, E>(
    game: &LocalGame<S, M, E>,
    config: &ArenaConfig,
    output: &mut impl Write,
) -> Result<()> {
    if game.is_game_complete() {
        write!(output, "Game over (undo, reset or quit)> ")?;
    } else {
        let player = game.current_player();
        write!(
            output,
            "{} ({}) to move> ",
            config.name_of(player),
            player.label()
        )?;
    }
    output.flush()?;
    Ok(())
}

fn describe_outcome(outcome: Outcome, config: &ArenaConfig) -> String {
    match outcome {
        Outcome::Winner(player) => format!("{} wins!", config.name_of(player)),
        Outcome::Draw => "It's a draw.".to_string(),
    }
}

/// Prints the scripted Connect-4 opening: A to column 3, B to column 3, A to
/// column 4.
#[instrument(skip_all)]
pub fn run_demo(output: &mut impl Write) -> Result<()> {
    let engine = Connect4Engine;
    let mut state = engine.initial_state();

    writeln!(output, "=== Game Abstraction Demo ===\n")?;
    writeln!(output, "Initial state:")?;
    writeln!(output, "{}\n", engine.render(&state))?;

    for (col, by) in [(3, Player::A), (3, Player::B), (4, Player::A)] {
        writeln!(output, "Player {} plays column {}:", by.label(), col)?;
        state = engine.reducer(&state, &Connect4Move::new(col), by)?.state;
        writeln!(output, "{}\n", engine.render(&state))?;
    }

    writeln!(output, "=== Demo Complete ===")?;
    Ok(())
}
