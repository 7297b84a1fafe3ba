//! Opponent that plays any empty cell.

use super::Strategy;
use crate::{Board, Position};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone)]
pub struct RandomAi {
    rng: SmallRng,
}

impl RandomAi {
    /// Creates an opponent seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a reproducible sequence of choices.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniformly picks one of `options`.
    pub(crate) fn pick<T: Copy>(&mut self, options: &[T]) -> Option<T> {
        options.choose(&mut self.rng).copied()
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAi {
    fn decide(&mut self, board: &Board) -> Option<Position> {
        let choice = self.pick(&board.empty_positions());
        debug!(position = ?choice, "Random choice");
        choice
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "Easy AI"
    }
}
