//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Scan order is fixed so that evaluation is deterministic: the first
/// uniformly-marked line decides the winner.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Rows
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6], // Columns
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8], // Diagonals
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = squares[a]
            && squares[b] == squares[a]
            && squares[c] == squares[a]
        {
            return Some(player);
        }
    }
    None
}
