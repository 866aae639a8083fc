//! The anti-pattern sequence game.
//!
//! Players alternately append a black or white pebble to a shared
//! sequence. Whoever makes the tail repeat three times in a row loses.

mod action;
mod contracts;
mod game;
pub mod invariants;
mod rules;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use contracts::{Contract, MoveContract};
pub use game::{Game, GameSnapshot, GameStatus};
pub use rules::{LosingPattern, REPETITIONS, detect_losing_pattern};
pub use types::{ParseSymbolError, Player, Symbol, letters};
