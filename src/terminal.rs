//! Line-oriented terminal driver.
//!
//! Reads one move per line from any [`BufRead`] and writes prompts and
//! results to any [`Write`], so the loop runs the same against stdin or an
//! in-memory buffer.

use crate::config::PlayConfig;
use crate::games::antipattern::{Game, MoveError, MoveOutcome, Symbol};
use std::io::{self, BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Plays one game on `input` / `output` until it ends, the player types
/// `quit`, or input runs out. Returns the game as it stood.
#[instrument(skip(input, output))]
pub fn run<R: BufRead, W: Write>(
    config: &PlayConfig,
    mut input: R,
    mut output: W,
) -> io::Result<Game> {
    let glyphs = *config.glyphs();
    let mut game = Game::new();

    if *config.show_rules() {
        write_banner(&mut output, glyphs)?;
    }

    let mut line = String::new();
    while !game.is_over() {
        let player = game.current_player();
        writeln!(output, "Current sequence: {}", render_sequence(&game, glyphs))?;
        writeln!(output, "{}'s turn ({})", player, render(player.symbol(), glyphs))?;
        write!(output, "Enter your move (B/W): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("Input closed, leaving game");
            writeln!(output)?;
            break;
        }

        let mv = line.trim().to_uppercase();
        if mv == "QUIT" {
            info!("Player quit");
            break;
        }

        match game.submit_raw(&mv) {
            Ok(MoveOutcome::Lost { loser, winner, .. }) => {
                writeln!(output)?;
                writeln!(output, "Final sequence: {}", render_sequence(&game, glyphs))?;
                writeln!(output, "{} loses!", loser)?;
                writeln!(output, "{} wins!", winner)?;
                writeln!(
                    output,
                    "Losing pattern: {}",
                    game.losing_pattern_description().unwrap_or_default()
                )?;
            }
            Ok(MoveOutcome::Continue { .. }) => writeln!(output)?,
            Err(MoveError::InvalidSymbol(raw)) => {
                debug!(input = %raw, "Rejected input");
                writeln!(output, "Invalid move! Please enter 'B' or 'W'")?;
            }
            Err(e) => writeln!(output, "Invalid move! {}", e)?,
        }
    }

    Ok(game)
}

fn write_banner<W: Write>(output: &mut W, glyphs: bool) -> io::Result<()> {
    let colours: Vec<String> = Symbol::iter()
        .map(|s| format!("{} ({})", s.name(), render(s, glyphs)))
        .collect();
    let choices: Vec<String> = Symbol::iter()
        .map(|s| format!("'{}' for {}", s.letter(), s.name()))
        .collect();

    writeln!(output, "=== Anti-Pattern Game ===")?;
    writeln!(
        output,
        "Rules: Players alternate placing {} pebbles",
        colours.join(" or ")
    )?;
    writeln!(output, "Lose if any pattern repeats 3 times consecutively")?;
    writeln!(output, "Enter {}, 'quit' to exit", choices.join(", "))?;
    writeln!(output)
}

fn render(symbol: Symbol, glyphs: bool) -> String {
    if glyphs {
        symbol.glyph().to_string()
    } else {
        symbol.to_string()
    }
}

fn render_sequence(game: &Game, glyphs: bool) -> String {
    if glyphs {
        game.display_sequence()
    } else {
        game.sequence()
            .iter()
            .map(Symbol::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
