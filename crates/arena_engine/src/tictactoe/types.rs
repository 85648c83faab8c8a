//! Tic-tac-toe board.

use super::position::Position;
use crate::engine::Player;
use serde::{Deserialize, Serialize};

/// One of the nine squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Unmarked.
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

/// 3×3 board, squares stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// The square at `pos`.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// True if nobody has marked `pos`.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// All squares, row-major.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let line = (0..3)
                .map(|col| {
                    let pos = row * 3 + col;
                    match self.squares[pos] {
                        Square::Empty => pos.to_string(),
                        Square::Occupied(player) => player.label().to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
