//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::{Board, Cell, Mark};

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if a mark holds all three cells of a line,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let cell = board.cell(a);
        if cell != Cell::Empty && cell == board.cell(b) && cell == board.cell(c) {
            return cell.mark();
        }
    }

    None
}
