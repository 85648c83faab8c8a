//! Board invariants for Connect-4.

use super::types::{Cell, Connect4State};
use crate::invariants::Invariant;

/// Invariant: no piece sits above an empty slot in its column.
pub struct GravityInvariant;

impl Invariant<Connect4State> for GravityInvariant {
    fn holds(state: &Connect4State) -> bool {
        state.first_floating_piece().is_none()
    }

    fn description() -> &'static str {
        "Every column is a contiguous stack resting on the bottom row"
    }
}

/// Invariant: the recorded last move is the top piece of its column and
/// belongs to the recorded player.
pub struct LastMoveInvariant;

impl Invariant<Connect4State> for LastMoveInvariant {
    fn holds(state: &Connect4State) -> bool {
        let Some(last) = state.last_move() else {
            return true;
        };

        let owned = state.cell(last.row, last.col) == Some(Cell::Occupied(last.player));
        let on_top = last.row == 0
            || state
                .cell(last.row - 1, last.col)
                .is_some_and(Cell::is_empty);

        owned && on_top
    }

    fn description() -> &'static str {
        "Last move names the top piece of its column and its owner"
    }
}

/// All Connect-4 board invariants as a composable set.
pub type Connect4Invariants = (GravityInvariant, LastMoveInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect4::{COLS, Connect4Engine, Connect4Move, ROWS};
    use crate::engine::{GameEngine, Player};
    use crate::invariants::InvariantSet;

    #[test]
    fn test_empty_board_holds() {
        assert!(Connect4Invariants::check_all(&Connect4State::new()).is_ok());
    }

    #[test]
    fn test_holds_after_moves() {
        let engine = Connect4Engine;
        let mut state = engine.initial_state();
        let mut by = Player::A;
        for col in [3, 3, 4, 2, 3, 0] {
            state = engine
                .reducer(&state, &Connect4Move::new(col), by)
                .unwrap()
                .state;
            by = by.opponent();
            assert!(Connect4Invariants::check_all(&state).is_ok());
        }
    }

    #[test]
    fn test_detects_floating_piece() {
        let mut state = Connect4State::new();
        state.place(2, 4, Player::B);
        let violations = Connect4Invariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, GravityInvariant::description());
    }

    #[test]
    fn test_detects_buried_last_move() {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        cells[ROWS - 1][0] = Cell::Occupied(Player::A);
        cells[ROWS - 2][0] = Cell::Occupied(Player::B);
        let mut state = Connect4State::from_cells(cells, None).unwrap();
        // Re-placing the bottom piece leaves the record pointing under B's piece.
        state.place(ROWS - 1, 0, Player::A);
        assert!(!LastMoveInvariant::holds(&state));
        assert!(GravityInvariant::holds(&state));
    }
}
