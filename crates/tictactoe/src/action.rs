//! Move proposals and the errors raised when they are rejected.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reasons a move proposal is refused.
///
/// None of these are fatal: the board and turn state are unchanged after a
/// rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The cell already holds a mark.
    #[display("{} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// A previous move is still being processed.
    #[display("Moves are not allowed right now")]
    MovesLocked,

    /// No move is expected from anyone.
    ///
    /// Reserved: a finished game is cleared within the move that ended it,
    /// so [`TurnController`](crate::TurnController) never returns this today.
    #[display("Game is already over")]
    GameOver,
}
