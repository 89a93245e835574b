//! History linkage invariant: each snapshot extends its predecessor.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Square;

/// Invariant: every non-root record differs from its predecessor in
/// exactly one cell, that cell was empty before, and it is the cell the
/// record claims was played.
///
/// Marks are never overwritten and never removed; history is a chain of
/// single-cell extensions of the empty root board.
pub struct LinkedHistoryInvariant;

impl Invariant<GameSession> for LinkedHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(played) = next.cell() else {
                return false;
            };
            let changed: Vec<usize> = prev
                .board()
                .squares()
                .iter()
                .zip(next.board().squares())
                .enumerate()
                .filter(|(_, (a, b))| a != b)
                .map(|(i, _)| i)
                .collect();
            changed == [played]
                && prev.board().is_empty(played)
                && !matches!(next.board().get(played), Some(Square::Empty))
        })
    }

    fn description() -> &'static str {
        "Each snapshot extends its predecessor by exactly the played cell"
    }
}
