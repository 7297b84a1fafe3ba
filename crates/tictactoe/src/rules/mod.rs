//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Both the outcome check and
//! the scripted opponents read the board through the same eight lines.

pub mod threat;
pub mod win;

pub use threat::completing_cell;
pub use win::check_winner;

use crate::Position;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether two positions lie on a common line.
pub fn share_line(a: Position, b: Position) -> bool {
    a != b && LINES.iter().any(|line| line.contains(&a) && line.contains(&b))
}
