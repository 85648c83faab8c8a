//! Arena Engine - turn-based two-player game rules and local sessions
//!
//! # Architecture
//!
//! - **Engine**: the [`GameEngine`] contract every game implements
//! - **Games**: Connect-4 (the reference engine) and tic-tac-toe
//! - **Session**: [`LocalGame`], turn order, history and undo over any engine
//! - **Invariants**: composable board properties checked in debug builds
//!
//! # Example
//!
//! ```
//! use arena_engine::{Connect4Engine, Connect4Move, LocalGame, Outcome, Player};
//!
//! # fn main() -> Result<(), arena_engine::SessionError> {
//! let mut game = LocalGame::new(Connect4Engine);
//! for col in [0, 1, 0, 1, 0, 1] {
//!     game.make_move(Connect4Move::new(col))?;
//! }
//! game.make_move(Connect4Move::new(0))?;
//! assert_eq!(game.winner(), Some(Outcome::Winner(Player::A)));
//!
//! game.undo_last_move()?;
//! assert!(!game.is_game_complete());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod connect4;
mod engine;
pub mod invariants;
mod session;
pub mod tictactoe;

// Crate-level exports - Engine contract
pub use engine::{GameEngine, Outcome, Player, Transition};

// Crate-level exports - Session management
pub use session::{GameState, LocalGame, MoveRecord, SessionError};

// Crate-level exports - Game types (Connect-4)
pub use connect4::{Connect4Engine, Connect4Error, Connect4Move, Connect4State};

// Crate-level exports - Game types (tic-tac-toe)
pub use tictactoe::{Position, TicTacToeEngine, TicTacToeError};
