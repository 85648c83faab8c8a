//! Win detection logic for Connect-4.

use super::super::types::{COLS, Cell, Connect4State, ROWS};
use crate::engine::Player;
use tracing::instrument;

/// Length of a winning run.
pub const CONNECT: usize = 4;

/// Horizontal, vertical, diagonal `\`, diagonal `/`.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Checks whether the piece at `(row, col)` completes a line of four.
///
/// Only lines through this cell are examined: a placement can only create a
/// new winning line through itself. Returns the owner on a win.
#[instrument(skip(state))]
pub fn winner_at(state: &Connect4State, row: usize, col: usize) -> Option<Player> {
    let Some(Cell::Occupied(player)) = state.cell(row, col) else {
        return None;
    };

    AXES.iter()
        .any(|&(dr, dc)| run_length(state, row, col, dr, dc, player) >= CONNECT)
        .then_some(player)
}

/// Length of the contiguous run of `player` through `(row, col)` along one
/// axis, counting both directions and the origin once.
pub fn run_length(
    state: &Connect4State,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> usize {
    1 + ray(state, row, col, dr, dc, player) + ray(state, row, col, -dr, -dc, player)
}

/// Pieces of `player` strictly beyond `(row, col)` in direction `(dr, dc)`.
fn ray(
    state: &Connect4State,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    player: Player,
) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;

    while (0..ROWS as isize).contains(&r)
        && (0..COLS as isize).contains(&c)
        && state.cells()[r as usize][c as usize] == Cell::Occupied(player)
    {
        count += 1;
        r += dr;
        c += dc;
    }

    count
}
