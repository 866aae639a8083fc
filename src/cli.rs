//! Command-line interface for strictly_patterns.

use clap::{Parser, Subcommand};

/// Strictly Patterns - the anti-pattern sequence game
#[derive(Parser, Debug)]
#[command(name = "strictly_patterns")]
#[command(about = "Two-player game: don't let the sequence repeat three times", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game in the terminal
    Play {
        /// Path to a TOML play config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Show pebbles as B/W letters instead of glyphs
        #[arg(long)]
        letters: bool,

        /// Skip the rules banner
        #[arg(long)]
        no_rules: bool,
    },
}
