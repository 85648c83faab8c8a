//! Tic-tac-toe rules as a [`GameEngine`].

use super::position::Position;
use super::rules::{check_winner, is_full};
use super::types::{Board, Square};
use crate::engine::{GameEngine, Outcome, Player, Transition};
use tracing::{instrument, warn};

/// Tic-tac-toe move rejection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TicTacToeError {
    /// Somebody already marked this square.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for TicTacToeError {}

/// Stateless tic-tac-toe rule-set; three in a row wins, a full board draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicTacToeEngine;

impl GameEngine<Board, Position> for TicTacToeEngine {
    type Error = TicTacToeError;

    fn initial_state(&self) -> Board {
        Board::new()
    }

    #[instrument(skip(self, board), fields(position = %pos, player = %by))]
    fn reducer(
        &self,
        board: &Board,
        pos: &Position,
        by: Player,
    ) -> Result<Transition<Board>, TicTacToeError> {
        if !board.is_empty(*pos) {
            warn!("Square is already occupied");
            return Err(TicTacToeError::SquareOccupied(*pos));
        }

        let mut next = board.clone();
        next.set(*pos, Square::Occupied(by));

        let outcome = match check_winner(&next) {
            Some(player) => Some(Outcome::Winner(player)),
            None if is_full(&next) => Some(Outcome::Draw),
            None => None,
        };

        Ok(Transition::new(next, outcome))
    }

    fn render(&self, board: &Board) -> String {
        board.to_string()
    }
}
