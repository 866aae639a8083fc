//! Move results for the anti-pattern game.
//!
//! A submitted move is either accepted, yielding a [`MoveOutcome`], or
//! rejected with a [`MoveError`] and no change to the game.

use super::rules::LosingPattern;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// What happened after an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No pattern formed; `next` moves now.
    Continue {
        /// Player to move next.
        next: Player,
    },
    /// The mover completed a triple repetition and lost.
    Lost {
        /// The player who just moved.
        loser: Player,
        /// Their opponent.
        winner: Player,
        /// The repetition that ended the game.
        pattern: LosingPattern,
    },
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_game_over(&self) -> bool {
        matches!(self, MoveOutcome::Lost { .. })
    }

    /// Winner, if the move ended the game.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MoveOutcome::Lost { winner, .. } => Some(*winner),
            MoveOutcome::Continue { .. } => None,
        }
    }
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input was not one of the two legal symbols.
    #[display("Invalid move '{}': expected B or W", _0)]
    InvalidSymbol(String),

    /// The game has already ended.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
