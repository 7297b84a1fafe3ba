//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's token.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Display symbol handed to the presentation layer.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::Occupied(Mark::X) => "X",
            Cell::Occupied(Mark::O) => "O",
        }
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from row-major cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Writes `mark` into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] for an index past 8 and
    /// [`MoveError::Occupied`] when the cell already holds a mark. The board
    /// is left unchanged in both cases.
    #[instrument(skip(self), level = "trace")]
    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        self.cells[index] = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Sets every cell back to empty.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; 9];
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Empty positions in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Positions holding `mark`, in index order.
    pub fn marks_of(&self, mark: Mark) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.cell(*pos) == Cell::Occupied(mark))
            .collect()
    }

    /// Evaluates the board.
    ///
    /// A completed line wins even when the board is also full.
    pub fn evaluate(&self) -> GameOutcome {
        if let Some(winner) = rules::check_winner(self) {
            GameOutcome::Win(winner)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Display symbols for all nine cells.
    pub fn symbols(&self) -> [&'static str; 9] {
        self.cells.map(Cell::symbol)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// Board is full without a completed line.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameOutcome::Win(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(mark) => write!(f, "Player {} wins", mark),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
