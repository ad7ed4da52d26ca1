//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Symbol;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// File read when no `--config` is given. Missing is fine.
pub const DEFAULT_CONFIG_PATH: &str = "noughts.toml";

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Symbol the human plays. When unset the player is asked each game.
    #[serde(default)]
    human: Option<Symbol>,

    /// Offer another game when one finishes.
    #[serde(default = "default_ask_replay")]
    ask_replay: bool,

    /// Print the 1-9 numbering key at the start of each game.
    #[serde(default = "default_show_key")]
    show_key: bool,
}

fn default_ask_replay() -> bool {
    true
}

fn default_show_key() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human: None,
            ask_replay: default_ask_replay(),
            show_key: default_show_key(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Like [`GameConfig::load`], with the fallback file given by the caller.
    #[instrument]
    pub fn load_from(explicit: Option<&Path>, default: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if default.is_file() => Self::from_file(default),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the human's symbol when `human` is set.
    pub fn with_human(mut self, human: Option<Symbol>) -> Self {
        if human.is_some() {
            self.human = human;
        }
        self
    }

    /// Sets whether to offer another game.
    pub fn with_ask_replay(mut self, ask_replay: bool) -> Self {
        self.ask_replay = ask_replay;
        self
    }

    /// Sets whether to print the numbering key.
    pub fn with_show_key(mut self, show_key: bool) -> Self {
        self.show_key = show_key;
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
