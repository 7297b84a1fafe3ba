//! Detection of lines one move away from completion.

use super::LINES;
use crate::{Board, Cell, Mark, Position};

/// Finds the empty cell that would complete a line for `mark`.
///
/// Lines are scanned rows first, then columns, then diagonals; the first line
/// holding exactly two `mark` cells and one empty cell wins the scan.
pub fn completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.cell(**pos) == Cell::Occupied(mark))
            .count();
        let empty: Vec<Position> = line.iter().copied().filter(|pos| board.is_empty(*pos)).collect();
        match (owned, empty.as_slice()) {
            (2, [gap]) => Some(*gap),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_gap_in_row() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(1, Mark::X).unwrap();
        assert_eq!(completing_cell(&board, Mark::X), Some(Position::TopRight));
        assert_eq!(completing_cell(&board, Mark::O), None);
    }

    #[test]
    fn test_finds_gap_in_middle_of_diagonal() {
        let mut board = Board::new();
        board.set(2, Mark::O).unwrap();
        board.set(6, Mark::O).unwrap();
        assert_eq!(completing_cell(&board, Mark::O), Some(Position::Center));
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(1, Mark::X).unwrap();
        board.set(2, Mark::O).unwrap();
        assert_eq!(completing_cell(&board, Mark::X), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let mut board = Board::new();
        // X threatens both the middle row (5) and the left column (6)
        board.set(0, Mark::X).unwrap();
        board.set(3, Mark::X).unwrap();
        board.set(4, Mark::X).unwrap();
        board.set(8, Mark::O).unwrap();
        assert_eq!(completing_cell(&board, Mark::X), Some(Position::MiddleRight));
    }
}
