//! Draw detection.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw; the caller derives that by
/// combining this with [`check_winner`](super::check_winner).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::{Player, Square};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O: full with no completed line.
        let mut board = Board::new(3);
        for &i in &[0, 2, 4, 5, 7] {
            board.set(i, Square::Occupied(Player::X)).unwrap();
        }
        for &i in &[1, 3, 6, 8] {
            board.set(i, Square::Occupied(Player::O)).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(2);
        for &i in &[0, 1] {
            board.set(i, Square::Occupied(Player::X)).unwrap();
        }
        for &i in &[2, 3] {
            board.set(i, Square::Occupied(Player::O)).unwrap();
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
