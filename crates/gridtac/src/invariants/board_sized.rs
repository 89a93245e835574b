//! Board size invariant: every snapshot matches the session size.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: every snapshot in history has exactly size² cells.
///
/// Resizing replaces history wholesale, so no snapshot from a previous
/// size can survive in the current session.
pub struct BoardSizedInvariant;

impl Invariant<GameSession> for BoardSizedInvariant {
    fn holds(session: &GameSession) -> bool {
        let cells = session.size() * session.size();
        session
            .history()
            .iter()
            .all(|record| record.board().squares().len() == cells)
    }

    fn description() -> &'static str {
        "Every snapshot has exactly size² cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_holds() {
        assert!(BoardSizedInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_after_resize() {
        let mut session = GameSession::new();
        session.play(0).unwrap();
        session.increase_size();
        assert_eq!(session.size(), 4);
        assert!(BoardSizedInvariant::holds(&session));
    }
}
