//! Game rules for Connect-4.
//!
//! Pure functions over a board. Kept apart from board storage so the engine
//! and the invariant checks can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{CONNECT, run_length, winner_at};
