//! Participants and the scripted opponents.
//!
//! A seat is held by a [`Player`]: either a human, whose moves arrive from the
//! caller, or one of three computer opponents implementing [`Strategy`].

mod heuristic;
mod optimal;
mod random;

pub use heuristic::HeuristicAi;
pub use optimal::{BookMove, Branch, OptimalAi, Plan};
pub use random::RandomAi;

use crate::{Board, Difficulty, Mark, Position};
use tracing::instrument;

/// Capability shared by computer opponents.
pub trait Strategy {
    /// Chooses a cell for the next move.
    ///
    /// Only returns `None` when the board has no empty cell.
    fn decide(&mut self, board: &Board) -> Option<Position>;

    /// Forgets any state carried between moves of one game.
    fn reset(&mut self);

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Whoever holds a seat at the board.
#[derive(Debug, Clone)]
pub enum Player {
    /// Moves are supplied by the caller.
    Human,
    /// [`Difficulty::Easy`] opponent.
    Random(RandomAi),
    /// [`Difficulty::Normal`] opponent.
    Heuristic(HeuristicAi),
    /// [`Difficulty::Hard`] opponent.
    Optimal(OptimalAi),
}

impl Player {
    /// Creates the computer opponent for a difficulty.
    #[instrument]
    pub fn for_difficulty(difficulty: Difficulty, mark: Mark, seed: Option<u64>) -> Self {
        let fallback = match seed {
            Some(seed) => RandomAi::seeded(seed),
            None => RandomAi::new(),
        };
        match difficulty {
            Difficulty::Easy => Player::Random(fallback),
            Difficulty::Normal => Player::Heuristic(HeuristicAi::new(mark, fallback)),
            Difficulty::Hard => Player::Optimal(OptimalAi::new(mark, fallback)),
        }
    }

    /// Checks if this seat waits for the caller.
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human)
    }

    /// Chooses the next cell; humans never choose on their own.
    pub fn decide(&mut self, board: &Board) -> Option<Position> {
        self.strategy_mut().and_then(|ai| ai.decide(board))
    }

    /// Clears per-game state.
    pub fn reset(&mut self) {
        if let Some(ai) = self.strategy_mut() {
            ai.reset();
        }
    }

    /// Display name of the seat.
    pub fn name(&self) -> &str {
        match self {
            Player::Human => "Human",
            Player::Random(ai) => ai.name(),
            Player::Heuristic(ai) => ai.name(),
            Player::Optimal(ai) => ai.name(),
        }
    }

    fn strategy_mut(&mut self) -> Option<&mut dyn Strategy> {
        match self {
            Player::Human => None,
            Player::Random(ai) => Some(ai),
            Player::Heuristic(ai) => Some(ai),
            Player::Optimal(ai) => Some(ai),
        }
    }
}

/// The two seats of a session.
#[derive(Debug, Clone)]
pub struct Seats {
    x: Player,
    o: Player,
}

impl Seats {
    /// Seats two players.
    pub fn new(x: Player, o: Player) -> Self {
        Self { x, o }
    }

    /// Two humans.
    pub fn humans() -> Self {
        Self::new(Player::Human, Player::Human)
    }

    /// A human and a computer opponent holding `computer`.
    pub fn against(computer: Mark, opponent: Player) -> Self {
        match computer {
            Mark::X => Self::new(opponent, Player::Human),
            Mark::O => Self::new(Player::Human, opponent),
        }
    }

    /// The player holding `mark`.
    pub fn get(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Mutable access to the player holding `mark`.
    pub fn get_mut(&mut self, mark: Mark) -> &mut Player {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Resets both seats.
    pub fn reset(&mut self) {
        self.x.reset();
        self.o.reset();
    }
}
