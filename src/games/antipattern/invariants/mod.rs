//! First-class invariants for the anti-pattern game.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and serve as documentation of system guarantees.

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
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod prefix_safe;
pub mod suffix_anchored;

pub use alternating_turn::AlternatingTurnInvariant;
pub use prefix_safe::PrefixSafeInvariant;
pub use suffix_anchored::SuffixAnchoredInvariant;

/// All game invariants as a composable set.
pub type AntiPatternInvariants = (
    AlternatingTurnInvariant,
    SuffixAnchoredInvariant,
    PrefixSafeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::antipattern::{Game, Player, Symbol};
    use Symbol::{Black as B, White as W};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(AntiPatternInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay(&[B, W, W, B, B, W]).unwrap();
        assert!(AntiPatternInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_finished_game() {
        let game = Game::replay(&[B, W, B, W, B, W]).unwrap();
        assert!(game.is_over());
        assert!(AntiPatternInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut game = Game::replay(&[B, W]).unwrap();
        // Three blacks in an in-progress game: the tail repeats and the
        // turn parity is wrong.
        game.sequence.push(B);
        game.sequence.push(B);
        game.sequence.push(B);
        let violations = AntiPatternInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AlternatingTurnInvariant, SuffixAnchoredInvariant);
        let mut game = Game::new();
        assert!(TwoInvariants::check_all(&game).is_ok());
        game.current_player = Player::Two;
        assert_eq!(TwoInvariants::check_all(&game).unwrap_err().len(), 1);
    }
}
