//! Command-line interface for the tic-tac-toe driver.

use clap::Parser;
use std::path::PathBuf;
use tictactoe::{Difficulty, GameMode, SessionConfig};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// one_player or two_player (overrides the config file)
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// easy, normal or hard (overrides the config file)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Let the computer play X and open each game
    #[arg(long)]
    pub ai_first: bool,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print events as JSON lines instead of drawing the board
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Builds the session config: file first, then flags on top.
    pub fn session_config(&self) -> Result<SessionConfig, tictactoe::ConfigError> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::new(),
        };
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if self.ai_first {
            config = config.with_first_player(tictactoe::FirstPlayer::Computer);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}
