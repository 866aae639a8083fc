//! Core domain types for the anti-pattern game.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A pebble placed on the shared sequence.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Symbol {
    /// Black pebble (`B`).
    #[serde(rename = "B")]
    Black,
    /// White pebble (`W`).
    #[serde(rename = "W")]
    White,
}

impl Symbol {
    /// Canonical single-letter form.
    pub fn letter(self) -> char {
        match self {
            Symbol::Black => 'B',
            Symbol::White => 'W',
        }
    }

    /// Glyph used when rendering the sequence.
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Black => "●",
            Symbol::White => "○",
        }
    }

    /// Lowercase colour name.
    pub fn name(self) -> &'static str {
        match self {
            Symbol::Black => "black",
            Symbol::White => "white",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Error returned when a string is not one of the two legal symbols.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("'{}' is not a legal symbol (expected B or W)", input)]
pub struct ParseSymbolError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Symbol {
    type Err = ParseSymbolError;

    /// Parses exactly `"B"` or `"W"`. Drivers normalize case before calling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Symbol::Black),
            "W" => Ok(Symbol::White),
            other => Err(ParseSymbolError {
                input: other.to_string(),
            }),
        }
    }
}

/// Player seat. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    /// Player 1.
    One,
    /// Player 2.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Seat number (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Player seated at `number`, if it is 1 or 2.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Symbol shown next to the player's turn prompt.
    pub fn symbol(self) -> Symbol {
        match self {
            Player::One => Symbol::Black,
            Player::Two => Symbol::White,
        }
    }

    /// Glyph of [`Player::symbol`].
    pub fn glyph(self) -> &'static str {
        self.symbol().glyph()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.number()
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Player::from_number(value).ok_or_else(|| format!("invalid player number {}", value))
    }
}

/// Renders symbols as their canonical letters (`"BWB"`).
pub fn letters(symbols: &[Symbol]) -> String {
    symbols.iter().map(|s| s.letter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_legal_symbols() {
        assert_eq!("B".parse::<Symbol>(), Ok(Symbol::Black));
        assert_eq!("W".parse::<Symbol>(), Ok(Symbol::White));
    }

    #[test]
    fn test_parse_is_exact() {
        for bad in ["b", "w", "X", "", " B", "BW"] {
            let err = bad.parse::<Symbol>().unwrap_err();
            assert_eq!(err.input, bad);
        }
    }

    #[test]
    fn test_iter_order() {
        let names: Vec<&str> = Symbol::iter().map(Symbol::name).collect();
        assert_eq!(names, ["black", "white"]);
    }

    #[test]
    fn test_player_symbols() {
        assert_eq!(Player::One.symbol(), Symbol::Black);
        assert_eq!(Player::Two.glyph(), "○");
    }

    #[test]
    fn test_player_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Player::Two).unwrap(), "2");
        let parsed: Player = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Player::One);
        assert!(serde_json::from_str::<Player>("3").is_err());
    }

    #[test]
    fn test_symbol_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Symbol::White).unwrap(), "\"W\"");
    }

    #[test]
    fn test_letters() {
        assert_eq!(letters(&[Symbol::Black, Symbol::White, Symbol::Black]), "BWB");
        assert_eq!(letters(&[]), "");
    }
}
