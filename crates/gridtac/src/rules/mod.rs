//! Game rules for N×N tic-tac-toe.
//!
//! This module contains pure functions for evaluating board snapshots.
//! Rules are separated from board storage and from session state so they
//! can be tested in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, check_winner};
