//! Settings file for the console game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use strictly_noughts::PlayerMode;
use tracing::{debug, info, instrument};

/// Settings file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "noughts.toml";

/// Optional settings; anything unset falls back to the interactive default.
///
/// ```toml
/// players = 1
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Number of human players (1 or 2). Skips the startup question.
    players: Option<u8>,

    /// Seed for the random source. Unset means seeded from the OS.
    seed: Option<u64>,
}

impl Settings {
    /// Creates settings from explicit values.
    #[instrument]
    pub fn new(players: Option<u8>, seed: Option<u64>) -> Result<Self, ConfigError> {
        let settings = Self { players, seed };
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if given, otherwise [`DEFAULT_CONFIG`] if it exists.
    ///
    /// A missing default file yields default settings; a missing explicit
    /// file is an error.
    #[instrument]
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG).exists() => {
                info!(path = DEFAULT_CONFIG, "Using settings file from current directory");
                Self::from_file(DEFAULT_CONFIG)
            }
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces file values with any given on the command line.
    #[instrument(skip(self))]
    pub fn with_overrides(
        self,
        players: Option<u8>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        Self::new(players.or(self.players), seed.or(self.seed))
    }

    /// The configured player mode, if any.
    pub fn player_mode(&self) -> Option<PlayerMode> {
        self.players.map(|n| match n {
            1 => PlayerMode::OnePlayer,
            _ => PlayerMode::TwoPlayer,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.players {
            None | Some(1) | Some(2) => Ok(()),
            Some(n) => Err(ConfigError::new(format!(
                "players must be 1 or 2, got {}",
                n
            ))),
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
