//! Strictly Patterns library - the anti-pattern sequence game
//!
//! Two players take turns appending a black or white pebble to a shared
//! sequence. The player whose move makes the end of the sequence repeat
//! the same block three times in a row loses.
//!
//! # Architecture
//!
//! - **Games**: the game engine and pattern detection
//! - **Terminal**: interactive hot-seat driver
//! - **Config**: terminal play settings
//!
//! # Example
//!
//! ```
//! use strictly_patterns::{Game, Player, Symbol};
//!
//! let mut game = Game::new();
//! for symbol in [Symbol::Black, Symbol::White, Symbol::Black, Symbol::White, Symbol::Black] {
//!     game.submit_move(symbol).unwrap();
//! }
//! let outcome = game.submit_move(Symbol::White).unwrap();
//!
//! assert!(outcome.is_game_over());
//! assert_eq!(game.winner(), Some(Player::One));
//! assert_eq!(
//!     game.losing_pattern_description().as_deref(),
//!     Some("Pattern 'BW' repeated 3 times: BW | BW | BW")
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

/// Terminal driver.
pub mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Game types
pub use games::antipattern::{
    Contract, Game, GameSnapshot, GameStatus, LosingPattern, MoveContract, MoveError,
    MoveOutcome, ParseSymbolError, Player, REPETITIONS, Symbol, detect_losing_pattern, invariants,
    letters,
};
