//! Tic-tac-toe: a second engine driven by the same session manager.

mod engine;
mod position;
pub mod rules;
mod types;

pub use engine::{TicTacToeEngine, TicTacToeError};
pub use position::Position;
pub use types::{Board, Square};
