//! Opponent that wins when it can and blocks when it must.

use super::{RandomAi, Strategy};
use crate::rules::completing_cell;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Completes its own line, else blocks the opponent's, else plays at random.
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    mark: Mark,
    fallback: RandomAi,
}

impl HeuristicAi {
    /// Creates an opponent playing `mark`.
    pub fn new(mark: Mark, fallback: RandomAi) -> Self {
        Self { mark, fallback }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// The winning cell for `mark`, else the cell blocking its opponent.
pub(crate) fn win_or_block(board: &Board, mark: Mark) -> Option<Position> {
    if let Some(win) = completing_cell(board, mark) {
        debug!(?mark, position = ?win, "Completing own line");
        return Some(win);
    }
    let block = completing_cell(board, mark.opponent());
    if let Some(pos) = block {
        debug!(?mark, position = ?pos, "Blocking opponent");
    }
    block
}

impl Strategy for HeuristicAi {
    #[instrument(skip(self, board), fields(mark = ?self.mark))]
    fn decide(&mut self, board: &Board) -> Option<Position> {
        win_or_block(board, self.mark).or_else(|| self.fallback.decide(board))
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "Normal AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ai(mark: Mark) -> HeuristicAi {
        HeuristicAi::new(mark, RandomAi::seeded(9))
    }

    #[test]
    fn test_blocks_top_row() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(4, Mark::O).unwrap();
        board.set(1, Mark::X).unwrap();
        assert_eq!(ai(Mark::O).decide(&board), Some(Position::TopRight));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(3, Mark::O).unwrap();
        board.set(1, Mark::X).unwrap();
        board.set(4, Mark::O).unwrap();
        board.set(8, Mark::X).unwrap();
        // O can win at 5; X threatens 2
        assert_eq!(ai(Mark::O).decide(&board), Some(Position::MiddleRight));
    }

    #[test]
    fn test_falls_back_to_empty_cell() {
        let mut board = Board::new();
        board.set(4, Mark::X).unwrap();
        let pos = ai(Mark::O).decide(&board).unwrap();
        assert!(board.is_empty(pos));
    }
}
