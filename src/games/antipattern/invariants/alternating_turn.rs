//! Alternating turn invariant: players alternate 1, 2, 1, 2, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: the turn follows the length of the sequence.
///
/// Player one makes every odd-numbered move. While in progress the player
/// to move is One iff the sequence length is even. Once over, the turn did
/// not pass, so `current_player` made the last move and the winner is their
/// opponent.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let len = game.sequence().len();
        let last_mover = if len % 2 == 1 { Player::One } else { Player::Two };

        match game.winner() {
            None => {
                let expected = if len % 2 == 0 { Player::One } else { Player::Two };
                game.current_player() == expected
            }
            Some(winner) => {
                len > 0
                    && game.current_player() == last_mover
                    && winner == last_mover.opponent()
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (1, 2, 1, 2, ...) and the last mover loses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::antipattern::Symbol::{Black as B, White as W};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = Game::replay(&[B, W, W, B, B]).unwrap();
        assert_eq!(game.current_player(), Player::Two);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_loss_keeps_mover() {
        let game = Game::replay(&[B, B, B]).unwrap();
        assert_eq!(game.current_player(), Player::One);
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let mut game = Game::replay(&[B]).unwrap();
        game.current_player = Player::One;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
