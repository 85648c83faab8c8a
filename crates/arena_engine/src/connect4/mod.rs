//! Connect-4: the reference engine.
//!
//! Pieces drop into one of seven columns and settle on the lowest empty row.
//! Four in a row horizontally, vertically or diagonally wins; a full board
//! without a line is a draw.

mod engine;
pub mod invariants;
pub mod rules;
mod types;

pub use engine::Connect4Engine;
pub use invariants::{Connect4Invariants, GravityInvariant, LastMoveInvariant};
pub use types::{COLS, Cell, Connect4Error, Connect4Move, Connect4State, LastMove, ROWS};
