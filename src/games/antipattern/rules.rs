//! Losing-pattern detection.
//!
//! A sequence is lost when its tail is some block repeated three times
//! back to back. Only the tail is examined: a repetition that was once a
//! suffix but has since been extended is never reported.

use super::types::{Symbol, letters};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of consecutive repetitions that loses the game.
pub const REPETITIONS: usize = 3;

/// A block found repeated three times at the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LosingPattern {
    /// The repeated block.
    pub pattern: Vec<Symbol>,
    /// Index into the full sequence where the first repetition begins.
    pub start_index: usize,
}

impl LosingPattern {
    /// The block in canonical letters (`"BW"`).
    pub fn letters(&self) -> String {
        letters(&self.pattern)
    }

    /// Length of the repeated block.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Returns true if the block is empty. Never the case for detected patterns.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The three consecutive windows of `sequence` this pattern covers.
    ///
    /// Returns `None` if the windows run past the end of `sequence`.
    pub fn occurrences<'a>(
        &self,
        sequence: &'a [Symbol],
    ) -> Option<[&'a [Symbol]; REPETITIONS]> {
        let len = self.len();
        let window = |i: usize| {
            let start = self.start_index + i * len;
            sequence.get(start..start + len)
        };
        Some([window(0)?, window(1)?, window(2)?])
    }
}

/// Checks whether the tail of `sequence` is a block repeated three times.
///
/// Block lengths are tried from 1 upward, so the smallest repeating unit
/// is reported first.
#[instrument(skip(sequence), fields(len = sequence.len()))]
pub fn detect_losing_pattern(sequence: &[Symbol]) -> Option<LosingPattern> {
    let n = sequence.len();

    for block in 1..=n / REPETITIONS {
        let span = REPETITIONS * block;
        let tail = &sequence[n - span..];
        let (first, rest) = tail.split_at(block);
        let (second, third) = rest.split_at(block);

        if first == second && second == third {
            let found = LosingPattern {
                pattern: first.to_vec(),
                start_index: n - span,
            };
            debug!(
                block,
                pattern = %found.letters(),
                start_index = found.start_index,
                "Losing pattern detected"
            );
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{Black as B, White as W};

    #[test]
    fn test_empty_and_short_sequences() {
        assert_eq!(detect_losing_pattern(&[]), None);
        assert_eq!(detect_losing_pattern(&[B]), None);
        assert_eq!(detect_losing_pattern(&[B, B]), None);
    }

    #[test]
    fn test_triple_single_symbol() {
        let found = detect_losing_pattern(&[B, B, B]).unwrap();
        assert_eq!(found.pattern, vec![B]);
        assert_eq!(found.start_index, 0);
    }

    #[test]
    fn test_triple_pair() {
        let found = detect_losing_pattern(&[B, W, B, W, B, W]).unwrap();
        assert_eq!(found.pattern, vec![B, W]);
        assert_eq!(found.start_index, 0);
    }

    #[test]
    fn test_no_pattern() {
        assert_eq!(detect_losing_pattern(&[B, W, W, B, B, W]), None);
    }

    #[test]
    fn test_smallest_unit_wins() {
        // BBBBBB is both B×3 (at 3) and BB×3 (at 0); length 1 is checked first.
        let found = detect_losing_pattern(&[B, B, B, B, B, B]).unwrap();
        assert_eq!(found.pattern, vec![B]);
        assert_eq!(found.start_index, 3);
    }

    #[test]
    fn test_pattern_after_prefix() {
        let seq = [W, B, W, W, B, W, W, B, W];
        let found = detect_losing_pattern(&seq[1..]).map(|p| p.pattern);
        assert_eq!(found, None);
        let found = detect_losing_pattern(&seq).unwrap();
        assert_eq!(found.pattern, vec![W, B, W]);
        assert_eq!(found.start_index, 0);

        let mut longer = vec![B];
        longer.extend_from_slice(&seq);
        let found = detect_losing_pattern(&longer).unwrap();
        assert_eq!(found.start_index, 1);
    }

    #[test]
    fn test_only_suffix_counts() {
        // BBB appears at the front but the tail no longer repeats.
        assert_eq!(detect_losing_pattern(&[B, B, B, W]), None);
    }

    #[test]
    fn test_deterministic() {
        let seq = [W, B, B, W, B, B, W, B, B];
        assert_eq!(detect_losing_pattern(&seq), detect_losing_pattern(&seq));
    }

    #[test]
    fn test_occurrences() {
        let seq = [W, B, W, B, W, B, W];
        let found = detect_losing_pattern(&seq).unwrap();
        assert_eq!(found.letters(), "BW");
        assert_eq!(found.start_index, 1);
        let windows = found.occurrences(&seq).unwrap();
        assert!(windows.iter().all(|w| *w == [B, W]));
    }

    #[test]
    fn test_occurrences_out_of_range() {
        let pattern = LosingPattern {
            pattern: vec![B, W],
            start_index: 2,
        };
        assert!(pattern.occurrences(&[B, W, B, W]).is_none());
    }
}
