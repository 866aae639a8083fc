//! Terminal play configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Configuration for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Render pebbles as glyphs (`●`/`○`) rather than letters.
    #[serde(default = "default_true")]
    glyphs: bool,

    /// Print the rules banner before the first turn.
    #[serde(default = "default_true")]
    show_rules: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl PlayConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.log_filter.trim().is_empty() {
            return Err(ConfigError::new("log_filter must not be empty"));
        }
        EnvFilter::try_new(&config.log_filter).map_err(|e| {
            ConfigError::new(format!("Invalid log_filter '{}': {}", config.log_filter, e))
        })?;

        info!(
            glyphs = config.glyphs,
            show_rules = config.show_rules,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads from `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line switches. Flags only ever turn a feature off.
    pub fn with_overrides(mut self, letters: bool, no_rules: bool) -> Self {
        if letters {
            self.glyphs = false;
        }
        if no_rules {
            self.show_rules = false;
        }
        self
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            glyphs: true,
            show_rules: true,
            log_filter: default_log_filter(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
