//! Draw detection for Connect-4.
//!
//! The engine checks for a win first; a placement that fills the board
//! without one is a draw.

use super::super::types::Connect4State;
use tracing::instrument;

/// Checks if no column can accept another piece.
#[instrument(skip(state))]
pub fn is_full(state: &Connect4State) -> bool {
    state.is_full()
}
