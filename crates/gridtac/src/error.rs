//! Error types for game operations.

use derive_more::{Display, Error};

/// Errors that can occur when playing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlayError {
    /// The target cell is already occupied.
    #[display("Cell {index} is already occupied")]
    Occupied {
        /// Index of the occupied cell.
        index: usize,
    },
    /// The cell index exceeds the board.
    #[display("Cell {index} is out of bounds for a board of {cells} cells")]
    OutOfBounds {
        /// Index of the rejected cell.
        index: usize,
        /// Total number of cells on the board.
        cells: usize,
    },
    /// The game already has a winner.
    #[display("The game is already over")]
    Finished,
}

/// Errors that can occur when resizing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ResizeError {
    /// The board cannot shrink below the minimum size.
    #[display("Cannot decrease board size below {min}.")]
    BelowMinimum {
        /// The minimum allowed side length.
        min: usize,
    },
}

/// Errors that can occur when jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The target move number is not in history.
    #[display("Move {target} is out of range for a history of {len} snapshots")]
    OutOfRange {
        /// The requested move number.
        target: usize,
        /// Number of snapshots in history.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_message_text() {
        let err = ResizeError::BelowMinimum { min: 2 };
        assert_eq!(err.to_string(), "Cannot decrease board size below 2.");
    }

    #[test]
    fn test_play_error_mentions_cell() {
        let err = PlayError::Occupied { index: 4 };
        assert!(err.to_string().contains("occupied"));
    }
}
