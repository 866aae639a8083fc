//! Suffix-anchored invariant: the losing repetition ends at the last symbol.

use super::super::Game;
use super::super::rules::{REPETITIONS, detect_losing_pattern};
use super::Invariant;

/// Invariant: the recorded status agrees with the tail of the sequence.
///
/// A finished game's three windows end exactly at the last symbol and all
/// equal the pattern. An in-progress game has no losing tail.
pub struct SuffixAnchoredInvariant;

impl Invariant<Game> for SuffixAnchoredInvariant {
    fn holds(game: &Game) -> bool {
        let sequence = game.sequence();
        match game.losing_pattern() {
            None => detect_losing_pattern(sequence).is_none(),
            Some(losing) => {
                if losing.is_empty()
                    || losing.start_index + REPETITIONS * losing.len() != sequence.len()
                {
                    return false;
                }
                losing
                    .occurrences(sequence)
                    .is_some_and(|windows| windows.iter().all(|w| *w == losing.pattern.as_slice()))
            }
        }
    }

    fn description() -> &'static str {
        "Losing pattern is repeated three times at the end of the sequence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::antipattern::GameStatus;
    use crate::games::antipattern::Symbol::{Black as B, White as W};

    #[test]
    fn test_finished_game_holds() {
        let game = Game::replay(&[W, B, W, B, W, B]).unwrap();
        assert!(game.is_over());
        assert!(SuffixAnchoredInvariant::holds(&game));
    }

    #[test]
    fn test_unreported_loss_violates() {
        let mut game = Game::replay(&[B, B]).unwrap();
        game.sequence.push(B);
        assert!(!SuffixAnchoredInvariant::holds(&game));
    }

    #[test]
    fn test_misplaced_pattern_violates() {
        let mut game = Game::replay(&[B, B, B]).unwrap();
        if let GameStatus::Over { losing, .. } = &mut game.status {
            losing.start_index = 1;
        }
        assert!(!SuffixAnchoredInvariant::holds(&game));
    }
}
