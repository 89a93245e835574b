//! Win detection generalized to an N×N board.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    winner: Player,
    cells: Vec<usize>,
}

impl WinningLine {
    /// Returns the player who completed the line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the cell indices of the line, in scan order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Checks whether the line contains the given cell.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Checks for a winner on the board.
///
/// Lines are scanned in a fixed order: each row, each column, the main
/// diagonal, then the anti-diagonal. The first completed line found is
/// returned; when one move completes several lines at once this order
/// decides which cells get highlighted, nothing more.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<WinningLine> {
    let n = board.size();

    for row in 0..n {
        if let Some(line) = check_line(board, (0..n).map(|col| row * n + col)) {
            return Some(line);
        }
    }

    for col in 0..n {
        if let Some(line) = check_line(board, (0..n).map(|row| col + row * n)) {
            return Some(line);
        }
    }

    // Main diagonal: (0, 0) to (n-1, n-1), stride n + 1.
    if let Some(line) = check_line(board, (0..n).map(|i| i * (n + 1))) {
        return Some(line);
    }

    // Anti-diagonal: (0, n-1) to (n-1, 0), stride n - 1 starting at n - 1.
    if let Some(line) = check_line(board, (0..n).map(|i| (n - 1) + i * (n - 1))) {
        return Some(line);
    }

    None
}

/// Checks a single line of cells: won if the first cell is occupied and
/// every cell matches it.
fn check_line(board: &Board, indices: impl Iterator<Item = usize>) -> Option<WinningLine> {
    let cells: Vec<usize> = indices.collect();
    let Some(Square::Occupied(winner)) = board.get(cells[0]) else {
        return None;
    };
    if cells[1..]
        .iter()
        .all(|&i| board.get(i) == Some(Square::Occupied(winner)))
    {
        Some(WinningLine { winner, cells })
    } else {
        None
    }
}
