//! Connect-4 rules as a [`GameEngine`].

#[cfg(debug_assertions)]
use super::invariants::Connect4Invariants;
use super::rules::{is_full, winner_at};
use super::types::{Connect4Error, Connect4Move, Connect4State};
use crate::engine::{GameEngine, Outcome, Player, Transition};
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, describe};
use tracing::{debug, instrument, warn};

/// Stateless Connect-4 rule-set: 6 rows, 7 columns, four in a row wins.
///
/// The engine carries no data, so one value can drive any number of sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Connect4Engine;

impl GameEngine<Connect4State, Connect4Move> for Connect4Engine {
    type Error = Connect4Error;

    fn initial_state(&self) -> Connect4State {
        Connect4State::new()
    }

    /// Drops a piece for `by` into the requested column.
    ///
    /// # Errors
    ///
    /// - [`Connect4Error::ColumnOutOfRange`] if the column is off the board.
    /// - [`Connect4Error::ColumnFull`] if the column has no empty slot.
    #[instrument(skip(self, state), fields(col = mv.col, player = %by))]
    fn reducer(
        &self,
        state: &Connect4State,
        mv: &Connect4Move,
        by: Player,
    ) -> Result<Transition<Connect4State>, Connect4Error> {
        let col = mv.column().inspect_err(|e| warn!(error = %e, "Rejected move"))?;

        if state.is_column_full(col) {
            warn!(col, "Column is full");
            return Err(Connect4Error::ColumnFull { col });
        }
        let row = state
            .drop_row(col)
            .ok_or(Connect4Error::ColumnFull { col })?;

        let mut next = state.clone();
        next.place(row, col, by);

        let outcome = match winner_at(&next, row, col) {
            Some(player) => Some(Outcome::Winner(player)),
            None if is_full(&next) => Some(Outcome::Draw),
            None => None,
        };

        #[cfg(debug_assertions)]
        Connect4Invariants::check_all(&next).map_err(|violations| {
            Connect4Error::InvariantViolation(format!(
                "Postcondition failed: {}",
                describe(&violations)
            ))
        })?;

        debug!(row, col, ?outcome, "Piece placed");
        Ok(Transition::new(next, outcome))
    }

    fn render(&self, state: &Connect4State) -> String {
        state.to_string()
    }
}
