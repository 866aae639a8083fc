//! Contract-based validation for the anti-pattern game.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::game::Game;
use super::invariants::{AntiPatternInvariants, InvariantSet};
use super::types::Symbol;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for submitting a symbol.
///
/// Preconditions:
/// - Game is in progress
///
/// Postconditions:
/// - Sequence grew by exactly one symbol, earlier symbols unchanged
/// - All game invariants hold
pub struct MoveContract;

impl Contract<Game, Symbol> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &Game, _symbol: &Symbol) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    #[instrument(skip_all)]
    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        let grew_by_one = after.sequence().len() == before.sequence().len() + 1
            && after.sequence().starts_with(before.sequence());
        if !grew_by_one {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: sequence must grow by one symbol".to_string(),
            ));
        }

        AntiPatternInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
