//! First-class invariants for the game session.
//!
//! Invariants are logical properties that must hold throughout a session's
//! lifetime. They are testable independently and serve as documentation of
//! the guarantees the session upholds. Mutating operations check them with
//! `debug_assert!` in debug builds.

mod board_sized;
mod linked_history;
mod pointer_bounded;
mod root_empty;

pub use board_sized::BoardSizedInvariant;
pub use linked_history::LinkedHistoryInvariant;
pub use pointer_bounded::PointerBoundedInvariant;
pub use root_empty::RootEmptyInvariant;

use crate::session::GameSession;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The invariants every [`GameSession`] must satisfy.
pub type SessionInvariants = (
    BoardSizedInvariant,
    RootEmptyInvariant,
    PointerBoundedInvariant,
    LinkedHistoryInvariant,
);

/// Checks every session invariant at once.
pub fn verify(session: &GameSession) -> Result<(), Vec<InvariantViolation>> {
    SessionInvariants::check_all(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_satisfies_all() {
        let session = GameSession::new();
        assert!(verify(&session).is_ok());
    }

    #[test]
    fn test_invariants_hold_across_lifecycle() {
        let mut session = GameSession::new();
        session.play(0).unwrap();
        session.play(4).unwrap();
        session.play(1).unwrap();
        assert!(verify(&session).is_ok());

        session.jump_to(1).unwrap();
        assert!(verify(&session).is_ok());

        session.play(2).unwrap();
        assert!(verify(&session).is_ok());

        session.increase_size();
        assert!(verify(&session).is_ok());
    }
}
