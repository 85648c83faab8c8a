//! Core domain types for Connect-4.

use super::invariants::{GravityInvariant, LastMoveInvariant};
use crate::engine::Player;
use crate::invariants::Invariant;
use serde::{Deserialize, Serialize};

/// Number of rows on the board. Row 0 is the top.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// A single slot on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Empty slot.
    Empty,
    /// Slot holding a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Returns true if no piece sits here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    fn marker(self) -> &'static str {
        match self {
            Cell::Empty => "·",
            Cell::Occupied(player) => player.label(),
        }
    }
}

/// Where the most recent piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastMove {
    /// Row the piece settled in.
    pub row: usize,
    /// Column the piece was dropped into.
    pub col: usize,
    /// Owner of the piece.
    pub player: Player,
}

/// A drop into a column. The landing row is derived by gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connect4Move {
    /// Target column. Signed so out-of-range input can be reported as given.
    pub col: i32,
}

impl Connect4Move {
    /// Creates a drop into `col`.
    pub fn new(col: i32) -> Self {
        Self { col }
    }

    /// Returns the column as a board index, rejecting values off the board.
    pub fn column(&self) -> Result<usize, Connect4Error> {
        usize::try_from(self.col)
            .ok()
            .filter(|&col| col < COLS)
            .ok_or(Connect4Error::ColumnOutOfRange { col: self.col })
    }
}

/// Rules violation or malformed board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Connect4Error {
    /// Column index outside `0..COLS`.
    #[display("Invalid column: {}. Must be between 0 and {}", col, COLS - 1)]
    ColumnOutOfRange {
        /// The rejected column.
        col: i32,
    },

    /// The column has no empty slot left.
    #[display("Column {} is full", col)]
    ColumnFull {
        /// The full column.
        col: usize,
    },

    /// A piece sits above an empty slot.
    #[display("Piece at row {}, column {} is not supported from below", row, col)]
    FloatingPiece {
        /// Row of the unsupported piece.
        row: usize,
        /// Column of the unsupported piece.
        col: usize,
    },

    /// A board invariant failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for Connect4Error {}

/// A 6×7 Connect-4 board plus the last placement.
///
/// Pieces only enter at the top of a column and settle on the lowest empty
/// row, so within a column the occupied cells always form a contiguous block
/// resting on the bottom row.
///
/// Deserialization goes through [`Connect4State::from_cells`], so a stored
/// board with a floating piece is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard")]
pub struct Connect4State {
    cells: [[Cell; COLS]; ROWS],
    last_move: Option<LastMove>,
}

/// Unchecked wire shape of [`Connect4State`].
#[derive(Deserialize)]
struct StoredBoard {
    cells: [[Cell; COLS]; ROWS],
    last_move: Option<LastMove>,
}

impl TryFrom<StoredBoard> for Connect4State {
    type Error = Connect4Error;

    fn try_from(stored: StoredBoard) -> Result<Self, Self::Error> {
        Self::from_cells(stored.cells, stored.last_move)
    }
}

impl Connect4State {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
            last_move: None,
        }
    }

    /// Builds a board directly from a grid, `cells[row][col]`, row 0 on top.
    ///
    /// # Errors
    ///
    /// Returns [`Connect4Error::FloatingPiece`] for the first piece found above
    /// an empty slot, or [`Connect4Error::InvariantViolation`] if `last_move`
    /// does not name the top piece of its column.
    pub fn from_cells(
        cells: [[Cell; COLS]; ROWS],
        last_move: Option<LastMove>,
    ) -> Result<Self, Connect4Error> {
        let state = Self { cells, last_move };

        if let Some((row, col)) = state.first_floating_piece() {
            return Err(Connect4Error::FloatingPiece { row, col });
        }
        if !LastMoveInvariant::holds(&state) {
            return Err(Connect4Error::InvariantViolation(
                LastMoveInvariant::description().to_string(),
            ));
        }
        debug_assert!(GravityInvariant::holds(&state));

        Ok(state)
    }

    /// Returns the cell at `(row, col)`, or `None` off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the whole grid, row 0 on top.
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Returns the most recent placement, if any.
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Returns true if the top slot of `col` is taken. Columns off the board
    /// accept nothing and count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        !self.cell(0, col).is_some_and(Cell::is_empty)
    }

    /// Lowest empty row in `col`, scanning from the bottom up. `None` for a
    /// full or off-board column.
    pub fn drop_row(&self, col: usize) -> Option<usize> {
        (0..ROWS)
            .rev()
            .find(|&row| self.cell(row, col).is_some_and(Cell::is_empty))
    }

    /// Columns that can still accept a piece.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Returns true if every column is full.
    ///
    /// Gravity means a full top row implies a full board.
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|cell| !cell.is_empty())
    }

    /// Number of pieces `player` has on the board.
    pub fn piece_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// First `(row, col)` holding a piece over an empty slot, top-down.
    pub(crate) fn first_floating_piece(&self) -> Option<(usize, usize)> {
        (0..ROWS - 1)
            .flat_map(|row| (0..COLS).map(move |col| (row, col)))
            .find(|&(row, col)| {
                !self.cells[row][col].is_empty() && self.cells[row + 1][col].is_empty()
            })
    }

    /// Places a piece without any checks. Callers resolve gravity first.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Cell::Occupied(player);
        self.last_move = Some(LastMove { row, col, player });
    }
}

impl Default for Connect4State {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Connect4State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let header = (0..COLS).map(|c| c.to_string()).collect::<Vec<_>>().join(" ");
        writeln!(f, "  {}", header)?;
        write!(f, "  {}", "-".repeat(COLS * 2 - 1))?;

        for (index, row) in self.cells.iter().enumerate() {
            let markers = row.iter().map(|c| c.marker()).collect::<Vec<_>>().join(" ");
            write!(f, "\n{} {}", index, markers)?;
        }

        if let Some(last) = self.last_move {
            write!(
                f,
                "\n\nLast move: Player {} -> Column {}",
                last.player.label(),
                last.col
            )?;
        }

        Ok(())
    }
}
