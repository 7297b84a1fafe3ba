//! Opponent that follows an opening book and never loses.
//!
//! Each turn the opponent first wins or blocks if a line is one move from
//! completion. Otherwise the number of marks on the board selects a table in
//! [`book`], keyed by the [`Branch`] recorded on the opponent's previous turn.
//! Positions the book does not cover are played at random.

mod book;
mod branch;

pub use branch::Branch;

use super::heuristic::win_or_block;
use super::{RandomAi, Strategy};
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// A move listed in the opening book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookMove {
    /// Cell to play.
    pub position: Position,
    /// Branch to record, or `None` to stay on the current one.
    pub branch: Option<Branch>,
}

impl BookMove {
    /// A move that commits to `branch`.
    pub const fn records(position: Position, branch: Branch) -> Self {
        Self {
            position,
            branch: Some(branch),
        }
    }

    /// A move that keeps the current branch.
    pub const fn keeps(position: Position) -> Self {
        Self {
            position,
            branch: None,
        }
    }
}

/// What the opponent intends to do on a given board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// Complete a line, or block one.
    Forced(Position),
    /// Play one of these book moves, chosen uniformly.
    Book(Vec<BookMove>),
    /// The book has nothing for this board; play any empty cell.
    Fallback,
}

/// The hard opponent.
#[derive(Debug, Clone)]
pub struct OptimalAi {
    mark: Mark,
    branch: Option<Branch>,
    fallback: RandomAi,
}

impl OptimalAi {
    /// Creates an opponent playing `mark`.
    pub fn new(mark: Mark, fallback: RandomAi) -> Self {
        Self {
            mark,
            branch: None,
            fallback,
        }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Branch committed to so far in this game.
    pub fn branch(&self) -> Option<Branch> {
        self.branch
    }

    /// Works out the candidate moves for `board` without choosing one.
    #[instrument(skip(self, board), fields(mark = ?self.mark, branch = ?self.branch))]
    pub fn plan(&self, board: &Board) -> Plan {
        if let Some(pos) = win_or_block(board, self.mark) {
            return Plan::Forced(pos);
        }

        let replies = board.marks_of(self.mark.opponent());
        let move_number = board.filled() + 1;
        let candidates: Vec<BookMove> = match (move_number, self.branch) {
            (1, _) => book::OPENINGS.to_vec(),
            (2, _) => replies.first().map(|first| book::answers(*first)).unwrap_or_default(),
            (3, Some(branch)) => replies
                .first()
                .and_then(|reply| book::follow_up(branch, *reply))
                .into_iter()
                .collect(),
            (4, Some(branch)) => book::consolidate(branch, board, &replies).into_iter().collect(),
            (5, Some(branch)) => book::close(branch).into_iter().collect(),
            _ => Vec::new(),
        };

        let candidates: Vec<BookMove> = candidates
            .into_iter()
            .filter(|candidate| board.is_empty(candidate.position))
            .collect();

        if candidates.is_empty() {
            debug!(move_number, "Board not covered by the book");
            Plan::Fallback
        } else {
            Plan::Book(candidates)
        }
    }

    /// Records the branch of a book move that is being played.
    pub fn follow(&mut self, chosen: BookMove) {
        if let Some(branch) = chosen.branch {
            debug!(%branch, position = ?chosen.position, "Committing to branch");
            self.branch = Some(branch);
        }
    }
}

impl Strategy for OptimalAi {
    #[instrument(skip(self, board), fields(mark = ?self.mark))]
    fn decide(&mut self, board: &Board) -> Option<Position> {
        match self.plan(board) {
            Plan::Forced(pos) => Some(pos),
            Plan::Book(candidates) => {
                let chosen = self.fallback.pick(&candidates)?;
                self.follow(chosen);
                Some(chosen.position)
            }
            Plan::Fallback => self.fallback.decide(board),
        }
    }

    fn reset(&mut self) {
        self.branch = None;
    }

    fn name(&self) -> &str {
        "Hard AI"
    }
}
