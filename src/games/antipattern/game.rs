//! Game engine for the anti-pattern game.
//!
//! [`Game`] owns the sequence and turn state. The only transition is
//! [`Game::submit_move`]; everything else is a read-only projection,
//! apart from [`Game::reset`].

use super::action::{MoveError, MoveOutcome};
use super::contracts::{Contract, MoveContract};
use super::rules::{LosingPattern, detect_losing_pattern};
use super::types::{Player, Symbol, letters};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A pattern completed; no more moves until reset.
    Over {
        /// Opponent of the player who completed the pattern.
        winner: Player,
        /// The repetition that ended the game.
        losing: LosingPattern,
    },
}

/// Anti-pattern game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(super) sequence: Vec<Symbol>,
    pub(super) current_player: Player,
    pub(super) status: GameStatus,
}

impl Game {
    /// Creates a new game: empty sequence, player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Replays `moves` from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, e.g. `GameAlreadyOver` if a move
    /// follows the losing one.
    #[instrument]
    pub fn replay(moves: &[Symbol]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for symbol in moves {
            game.submit_move(*symbol)?;
        }
        Ok(game)
    }

    /// The symbols played so far.
    pub fn sequence(&self) -> &[Symbol] {
        &self.sequence
    }

    /// The player to move, or the player who lost once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once a losing pattern has been completed.
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    /// Winner of a finished game.
    pub fn winner(&self) -> Option<Player> {
        match &self.status {
            GameStatus::Over { winner, .. } => Some(*winner),
            GameStatus::InProgress => None,
        }
    }

    /// The repetition that ended the game.
    pub fn losing_pattern(&self) -> Option<&LosingPattern> {
        match &self.status {
            GameStatus::Over { losing, .. } => Some(losing),
            GameStatus::InProgress => None,
        }
    }

    /// Index where the losing repetition begins.
    pub fn losing_pattern_start_index(&self) -> Option<usize> {
        self.losing_pattern().map(|p| p.start_index)
    }

    /// Appends `symbol` for the current player and checks for a loss.
    ///
    /// The mover loses if the new tail repeats three times; the turn does
    /// not pass on a losing move.
    ///
    /// # Errors
    ///
    /// `GameAlreadyOver` if the game has ended. Rejected moves leave the
    /// game untouched.
    #[instrument(skip(self), fields(player = self.current_player.number(), len = self.sequence.len()))]
    pub fn submit_move(&mut self, symbol: Symbol) -> Result<MoveOutcome, MoveError> {
        MoveContract::pre(self, &symbol).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.current_player;
        self.sequence.push(symbol);

        let outcome = match detect_losing_pattern(&self.sequence) {
            Some(losing) => {
                let winner = mover.opponent();
                info!(
                    loser = mover.number(),
                    winner = winner.number(),
                    pattern = %losing.letters(),
                    start_index = losing.start_index,
                    "Game over"
                );
                self.status = GameStatus::Over {
                    winner,
                    losing: losing.clone(),
                };
                MoveOutcome::Lost {
                    loser: mover,
                    winner,
                    pattern: losing,
                }
            }
            None => {
                self.current_player = mover.opponent();
                MoveOutcome::Continue {
                    next: self.current_player,
                }
            }
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, rolling back");
            *self = before;
            return Err(e);
        }

        Ok(outcome)
    }

    /// Parses `input` as a symbol and submits it.
    ///
    /// # Errors
    ///
    /// `GameAlreadyOver` takes precedence over `InvalidSymbol`.
    #[instrument(skip(self))]
    pub fn submit_raw(&mut self, input: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            warn!("Move rejected: game is over");
            return Err(MoveError::GameAlreadyOver);
        }
        let symbol = input.parse::<Symbol>().map_err(|e| {
            warn!(error = %e, "Move rejected");
            MoveError::InvalidSymbol(e.input)
        })?;
        self.submit_move(symbol)
    }

    /// Glyph for each symbol in order.
    pub fn display_symbols(&self) -> Vec<&'static str> {
        self.sequence.iter().map(|s| s.glyph()).collect()
    }

    /// Sequence as glyphs separated by spaces (`"● ○ ●"`).
    pub fn display_sequence(&self) -> String {
        self.display_symbols().join(" ")
    }

    /// Sequence as canonical letters (`"BWB"`).
    pub fn sequence_string(&self) -> String {
        letters(&self.sequence)
    }

    /// Describes the losing repetition and its three occurrences.
    ///
    /// Returns `None` while the game is in progress.
    pub fn losing_pattern_description(&self) -> Option<String> {
        let losing = self.losing_pattern()?;
        let windows = losing.occurrences(&self.sequence)?;
        let segments: Vec<String> = windows.iter().map(|w| letters(w)).collect();
        Some(format!(
            "Pattern '{}' repeated 3 times: {}",
            losing.letters(),
            segments.join(" | ")
        ))
    }

    /// Restores the initial state.
    #[instrument(skip(self), fields(len = self.sequence.len()))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        *self = Self::new();
    }

    /// Serializable view of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            sequence: self.sequence_string(),
            display: self.display_sequence(),
            current_player: self.current_player,
            game_over: self.is_over(),
            winner: self.winner(),
            losing_pattern: self.losing_pattern().map(LosingPattern::letters),
            losing_pattern_start: self.losing_pattern_start_index(),
            losing_pattern_display: self.losing_pattern_description().unwrap_or_default(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat, serializable view of a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Sequence in canonical letters.
    pub sequence: String,
    /// Sequence as glyphs.
    pub display: String,
    /// Player to move (or the loser once over).
    pub current_player: Player,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Winner, once over.
    pub winner: Option<Player>,
    /// Losing block in letters, once over.
    pub losing_pattern: Option<String>,
    /// Where the losing repetition begins, once over.
    pub losing_pattern_start: Option<usize>,
    /// Human-readable description; empty while in progress.
    pub losing_pattern_display: String,
}
