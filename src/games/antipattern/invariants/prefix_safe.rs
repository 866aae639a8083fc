//! Prefix-safe invariant: the game did not miss an earlier loss.

use super::super::Game;
use super::super::rules::detect_losing_pattern;
use super::Invariant;

/// Invariant: the sequence before the last move had no losing tail.
///
/// Otherwise the previous move would have ended the game.
pub struct PrefixSafeInvariant;

impl Invariant<Game> for PrefixSafeInvariant {
    fn holds(game: &Game) -> bool {
        match game.sequence().split_last() {
            None => true,
            Some((_, prefix)) => detect_losing_pattern(prefix).is_none(),
        }
    }

    fn description() -> &'static str {
        "No losing pattern existed before the last move"
    }
}
