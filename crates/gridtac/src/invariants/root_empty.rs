//! Root snapshot invariant: history always starts from an empty board.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Square;

/// Invariant: the first history record is an all-empty board with no
/// played cell.
pub struct RootEmptyInvariant;

impl Invariant<GameSession> for RootEmptyInvariant {
    fn holds(session: &GameSession) -> bool {
        let Some(root) = session.history().first() else {
            return false;
        };
        root.cell().is_none()
            && root
                .board()
                .squares()
                .iter()
                .all(|s| *s == Square::Empty)
    }

    fn description() -> &'static str {
        "History starts with an empty snapshot and no played cell"
    }
}
