//! Strictly Patterns - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_patterns::{PlayConfig, terminal};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            letters,
            no_rules,
        } => run_terminal(config, letters, no_rules),
    }
}

/// Play in the terminal.
fn run_terminal(config: Option<PathBuf>, letters: bool, no_rules: bool) -> Result<()> {
    let config = PlayConfig::load(config.as_deref())?.with_overrides(letters, no_rules);
    initialize_tracing(config.log_filter());
    info!(?config, "Starting terminal game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let game = terminal::run(&config, stdin.lock(), stdout.lock())?;
    info!(moves = game.sequence().len(), over = game.is_over(), "Game finished");
    Ok(())
}

/// Logs go to stderr so they don't interleave with prompts.
fn initialize_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
