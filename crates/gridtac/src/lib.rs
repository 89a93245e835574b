//! Pure N×N tic-tac-toe game logic.
//!
//! This crate owns the full game model: a variable-size board, winner
//! and draw detection generalized to N×N, and a session with move
//! history and time travel (jump to any past snapshot; playing from a
//! past snapshot discards the future).
//!
//! # Example
//!
//! ```
//! use gridtac::{GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     session.play(cell)?;
//! }
//! match session.status() {
//!     GameStatus::Won { winner, line } => {
//!         assert_eq!(winner, Player::X);
//!         assert_eq!(line, vec![0, 1, 2]);
//!     }
//!     other => panic!("expected a win, got {other:?}"),
//! }
//! # Ok::<(), gridtac::PlayError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
pub mod rules;
mod session;
mod types;

pub use error::{JumpError, PlayError, ResizeError};
pub use rules::{WinningLine, check_winner, is_full};
pub use session::{DEFAULT_BOARD_SIZE, GameSession, MIN_BOARD_SIZE};
pub use types::{Board, GameStatus, MoveRecord, Player, Square};

/// Alias for clarity at UI boundaries.
pub type Mark = Player;
