//! Session state: move history, time travel, and board resizing.

use crate::error::{JumpError, PlayError, ResizeError};
use crate::invariants;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, GameStatus, MoveRecord, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest allowed board side length.
pub const MIN_BOARD_SIZE: usize = 2;

/// Side length of a freshly created session.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// A single game session: the board size, the full snapshot history,
/// the current position within it, and the move-list sort order.
///
/// History starts with one empty snapshot and grows by one record per
/// play. Playing from a past snapshot discards everything after it.
/// Resizing replaces history wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    size: usize,
    history: Vec<MoveRecord>,
    current_move: usize,
    ascending: bool,
}

impl GameSession {
    /// Creates a session with the default 3×3 board.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_BOARD_SIZE)
    }

    /// Creates a session with the given board side length.
    #[instrument]
    pub fn with_size(size: usize) -> Self {
        debug_assert!(size >= MIN_BOARD_SIZE);
        Self {
            size,
            history: vec![MoveRecord::new(Board::new(size), None)],
            current_move: 0,
            ascending: true,
        }
    }

    /// Returns the board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the full snapshot history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the index of the current snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the current move record.
    pub fn current(&self) -> &MoveRecord {
        &self.history[self.current_move]
    }

    /// Returns the current board snapshot.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Whether the move list displays oldest moves first.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Returns the player to move: X on even move counts, O on odd.
    pub fn next_player(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Derives the status of the current snapshot.
    pub fn status(&self) -> GameStatus {
        if let Some(line) = check_winner(self.board()) {
            GameStatus::Won {
                winner: line.winner(),
                line: line.cells().to_vec(),
            }
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Plays the next player's mark at the given cell.
    ///
    /// Appends a new snapshot after truncating any future moves, so a
    /// play from a past snapshot starts a fresh branch.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Finished`] if the current snapshot already
    /// has a winner, [`PlayError::Occupied`] if the cell is taken, or
    /// [`PlayError::OutOfBounds`] for an invalid index.
    #[instrument(skip(self), fields(player = %self.next_player()))]
    pub fn play(&mut self, cell: usize) -> Result<(), PlayError> {
        if check_winner(self.board()).is_some() {
            return Err(PlayError::Finished);
        }
        match self.board().get(cell) {
            None => {
                return Err(PlayError::OutOfBounds {
                    index: cell,
                    cells: self.size * self.size,
                });
            }
            Some(Square::Occupied(_)) => return Err(PlayError::Occupied { index: cell }),
            Some(Square::Empty) => {}
        }

        let player = self.next_player();
        let mut next = self.board().clone();
        next.set(cell, Square::Occupied(player))?;

        self.history.truncate(self.current_move + 1);
        self.history.push(MoveRecord::new(next, Some(cell)));
        self.current_move = self.history.len() - 1;
        debug!(cell, move_number = self.current_move, "played move");
        debug_assert!(invariants::verify(self).is_ok());
        Ok(())
    }

    /// Jumps to the given move number without altering history.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `move_number` is not a
    /// stored snapshot. The UI only offers valid targets.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), JumpError> {
        if move_number >= self.history.len() {
            return Err(JumpError::OutOfRange {
                target: move_number,
                len: self.history.len(),
            });
        }
        self.current_move = move_number;
        debug!(move_number, "jumped to move");
        Ok(())
    }

    /// Grows the board by one and starts a fresh history.
    #[instrument(skip(self))]
    pub fn increase_size(&mut self) {
        self.reset_with(self.size + 1);
    }

    /// Shrinks the board by one and starts a fresh history.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::BelowMinimum`] without mutating any state
    /// when the board is already at [`MIN_BOARD_SIZE`].
    #[instrument(skip(self))]
    pub fn decrease_size(&mut self) -> Result<(), ResizeError> {
        if self.size <= MIN_BOARD_SIZE {
            return Err(ResizeError::BelowMinimum {
                min: MIN_BOARD_SIZE,
            });
        }
        self.reset_with(self.size - 1);
        Ok(())
    }

    /// Starts a fresh game at the current board size.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.reset_with(self.size);
    }

    /// Flips the move-list sort order. History and the current move are
    /// untouched.
    pub fn toggle_sort(&mut self) {
        self.ascending = !self.ascending;
    }

    fn reset_with(&mut self, size: usize) {
        debug!(size, "resetting session");
        self.size = size;
        self.history = vec![MoveRecord::new(Board::new(size), None)];
        self.current_move = 0;
        debug_assert!(invariants::verify(self).is_ok());
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
