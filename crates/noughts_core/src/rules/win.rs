//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Symbol};

/// The eight winning lines as index triples.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` fully occupies any line.
pub fn has_winner(board: &Board, player: Symbol) -> bool {
    let cells = board.cells();
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| cells[pos] == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first completed line found, `None`
/// otherwise.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    let cells = board.cells();
    for [a, b, c] in LINES {
        if let Cell::Occupied(player) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
        {
            return Some(player);
        }
    }
    None
}
