//! Tic-tac-toe game core - board rules, turn protocol and computer opponents
//!
//! This library holds everything a front end needs to run a game of
//! tic-tac-toe except the drawing.
//!
//! # Architecture
//!
//! - **Board**: nine cells, move validation and win/draw detection
//! - **Turn**: whose move it is, the move gate, and the reset after a finished game
//! - **Players**: humans and three computer opponents (easy, normal, hard)
//! - **Session**: mode and difficulty settings wrapped around a running game
//!
//! # Example
//!
//! ```
//! use tictactoe::{Difficulty, GameSession, Mark, SessionConfig};
//!
//! let config = SessionConfig::new().with_difficulty(Difficulty::Hard);
//! let mut session = GameSession::new(config);
//!
//! // Human plays X in the center; the computer answers in the same call
//! let submission = session.select_cell(4).expect("center is free");
//! assert_eq!(submission.moves().count(), 2);
//! assert_eq!(session.to_move(), Some(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod players;
mod position;
mod session;
mod turn;
mod types;

pub mod rules;

// Crate-level exports - Board and marks
pub use position::Position;
pub use types::{Board, Cell, GameOutcome, Mark};

// Crate-level exports - Moves
pub use action::{Move, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, Difficulty, FirstPlayer, GameMode, SessionConfig};

// Crate-level exports - Players
pub use players::{
    BookMove, Branch, HeuristicAi, OptimalAi, Plan, Player, RandomAi, Seats, Strategy,
};

// Crate-level exports - Turn protocol
pub use turn::{GameEvent, Submission, TurnController, TurnState};

// Crate-level exports - Session
pub use session::{GameSession, SessionObserver};
