//! Core domain types for N×N tic-tac-toe.

use crate::error::PlayError;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// An N×N tic-tac-toe board.
///
/// Squares are stored in row-major order: `cell(row, col) = row * size + col`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board with `size * size` squares.
    pub fn new(size: usize) -> Self {
        debug_assert!(size >= 1, "board size must be at least 1");
        Self {
            size,
            squares: vec![Square::Empty; size * size],
        }
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the square at the given index, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::OutOfBounds`] if `index` exceeds the board.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), PlayError> {
        if index >= self.squares.len() {
            return Err(PlayError::OutOfBounds {
                index,
                cells: self.squares.len(),
            });
        }
        self.squares[index] = square;
        Ok(())
    }

    /// Checks if the square at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Converts a cell index to `(row, col)` coordinates.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = match self.squares[row * self.size + col] {
                    Square::Empty => ".",
                    Square::Occupied(Player::X) => "X",
                    Square::Occupied(Player::O) => "O",
                };
                result.push_str(symbol);
                if col < self.size - 1 {
                    result.push('|');
                }
            }
            if row < self.size - 1 {
                result.push('\n');
            }
        }
        result
    }
}

/// A snapshot of the board paired with the cell played to reach it.
///
/// The root record of a session has `cell = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    board: Board,
    cell: Option<usize>,
}

impl MoveRecord {
    /// Creates a new move record.
    pub fn new(board: Board, cell: Option<usize>) -> Self {
        Self { board, cell }
    }

    /// Returns the board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the index of the cell played to reach this snapshot.
    pub fn cell(&self) -> Option<usize> {
        self.cell
    }

    /// Returns the `(row, col)` of the played cell, if any.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.cell.map(|index| self.board.row_col(index))
    }
}

/// Current status of the game, derived from a board snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress {
        /// Player to move next.
        next: Player,
    },
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// Cell indices of the completed line.
        line: Vec<usize>,
    },
    /// Game ended in a draw.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_new_board_empty() {
        let board = Board::new(4);
        assert_eq!(board.squares().len(), 16);
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(2);
        let result = board.set(4, Square::Occupied(Player::X));
        assert!(result.is_err());
    }

    #[test]
    fn test_row_col() {
        let board = Board::new(3);
        assert_eq!(board.row_col(0), (0, 0));
        assert_eq!(board.row_col(5), (1, 2));
        assert_eq!(board.row_col(8), (2, 2));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2);
        board.set(0, Square::Occupied(Player::X)).unwrap();
        board.set(3, Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.display(), "X|.\n.|O");
    }
}
