//! Win and draw rules for tic-tac-toe.

use super::position::Position;
use super::types::{Board, Square};
use crate::engine::Player;
use tracing::instrument;

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player holding three in a row, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    })
}

/// True once all nine squares are marked.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board(&[
            (Position::TopRight, Player::B),
            (Position::Center, Player::B),
            (Position::BottomLeft, Player::B),
        ]);
        assert_eq!(check_winner(&board), Some(Player::B));
    }

    #[test]
    fn test_full_board_without_line() {
        // A B A / B A A / B A B
        use Player::{A, B};
        let board = board(&[
            (Position::TopLeft, A),
            (Position::TopCenter, B),
            (Position::TopRight, A),
            (Position::MiddleLeft, B),
            (Position::Center, A),
            (Position::MiddleRight, A),
            (Position::BottomLeft, B),
            (Position::BottomCenter, A),
            (Position::BottomRight, B),
        ]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }
}
