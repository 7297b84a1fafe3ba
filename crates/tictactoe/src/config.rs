//! Session configuration: mode, difficulty and seating.

use crate::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How many humans are at the table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    /// Human against a computer opponent.
    #[default]
    OnePlayer,
    /// Two humans sharing the board.
    TwoPlayer,
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Moves at random.
    Easy,
    /// Takes wins and blocks threats, otherwise random.
    #[default]
    Normal,
    /// Follows the opening book; never loses.
    Hard,
}

/// Which side takes the first move (X) in one-player games.
///
/// Defaults to [`FirstPlayer::Human`] so the human moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human plays X.
    #[default]
    Human,
    /// The computer plays X.
    Computer,
}

impl FirstPlayer {
    /// Mark held by the computer opponent.
    #[instrument]
    pub fn computer_mark(self) -> Mark {
        match self {
            Self::Human => Mark::O,
            Self::Computer => Mark::X,
        }
    }

    /// Toggles between `Human` and `Computer`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// Configuration applied before a session starts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Getters, derive_setters::Setters, Serialize, Deserialize,
)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// One or two humans.
    #[serde(default)]
    mode: GameMode,

    /// Computer opponent strength (one-player mode only).
    #[serde(default)]
    difficulty: Difficulty,

    /// Who plays X in one-player mode.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Seed for the opponents' random choices; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl SessionConfig {
    /// Creates a configuration with defaults.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
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
