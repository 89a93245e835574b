//! Move pointer invariant: the current move always names a stored snapshot.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: `current_move` is a valid index into history.
pub struct PointerBoundedInvariant;

impl Invariant<GameSession> for PointerBoundedInvariant {
    fn holds(session: &GameSession) -> bool {
        session.current_move() < session.history().len()
    }

    fn description() -> &'static str {
        "The current move index never exceeds history length - 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_holds() {
        assert!(PointerBoundedInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_holds_after_jump_and_branch() {
        let mut session = GameSession::new();
        session.play(0).unwrap();
        session.play(1).unwrap();
        session.play(2).unwrap();
        session.jump_to(0).unwrap();
        assert!(PointerBoundedInvariant::holds(&session));

        // Branching truncates the future; the pointer must follow.
        session.play(8).unwrap();
        assert!(PointerBoundedInvariant::holds(&session));
        assert_eq!(session.current_move(), 1);
    }
}
