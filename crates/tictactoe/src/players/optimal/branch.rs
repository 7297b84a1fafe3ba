//! Lines of play the hard opponent can commit to.

use crate::Position;

/// The line of the opening book the opponent is following.
///
/// Recorded when a book move is played and consulted on the opponent's next
/// turn, so boards reached through different move orders stay distinct.
/// `Display` renders the short id used in logs (`"1"`, `"2b"`, `"5c-a"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Opened in the center.
    CenterOpening,
    /// Opened in the given corner.
    CornerOpening(Position),
    /// Center opening, answered at the given position.
    CenterFollowUp(Position),
    /// Corner opening, answered at `reply`.
    CornerFollowUp {
        /// Corner the opponent opened in.
        opening: Position,
        /// Where the other side replied.
        reply: Position,
    },
    /// The other side opened in the center; took the given corner.
    CornerAnswer(Position),
    /// The other side opened in the given corner; took the center.
    CenterAnswer(Position),
    /// The other side opened on `edge`; took the adjacent `corner`.
    EdgeAnswer {
        /// Edge the other side opened on.
        edge: Position,
        /// Corner taken in answer.
        corner: Position,
    },
    /// After an edge answer, took the center.
    EdgeCenter {
        /// Edge the other side opened on.
        edge: Position,
        /// Corner taken in answer.
        corner: Position,
    },
}

fn corner_letter(pos: Position) -> char {
    letter(Position::CORNERS.iter().position(|c| *c == pos))
}

fn edge_letter(pos: Position) -> char {
    letter(Position::EDGES.iter().position(|e| *e == pos))
}

fn letter(slot: Option<usize>) -> char {
    match slot {
        Some(i) => (b'a' + i as u8) as char,
        None => '?',
    }
}

/// Letter for a reply: edges `a`-`d`, then the remaining corners, then center.
fn reply_letter(reply: Position, skip_corner: Option<Position>) -> char {
    if reply.is_edge() {
        return edge_letter(reply);
    }
    let corners = Position::CORNERS.iter().filter(|c| Some(**c) != skip_corner);
    match corners.clone().position(|c| *c == reply) {
        Some(i) => letter(Some(4 + i)),
        None => letter(Some(4 + corners.count())),
    }
}

fn side_letter(edge: Position, corner: Position) -> char {
    // The lower-indexed adjacent corner is side `a`.
    let first = Position::CORNERS
        .iter()
        .find(|c| crate::rules::share_line(**c, edge))
        .copied();
    if first == Some(corner) { 'a' } else { 'b' }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Branch::CenterOpening => write!(f, "1"),
            Branch::CornerOpening(corner) => write!(f, "2{}", corner_letter(corner)),
            Branch::CenterFollowUp(reply) => write!(f, "1-{}", reply_letter(reply, None)),
            Branch::CornerFollowUp { opening, reply } => write!(
                f,
                "2{}-{}",
                corner_letter(opening),
                reply_letter(reply, Some(opening))
            ),
            Branch::CornerAnswer(corner) => write!(f, "3{}", corner_letter(corner)),
            Branch::CenterAnswer(corner) => write!(f, "4{}", corner_letter(corner)),
            Branch::EdgeAnswer { edge, corner } => {
                write!(f, "5{}-{}", edge_letter(edge), side_letter(edge, corner))
            }
            Branch::EdgeCenter { edge, corner } => {
                write!(f, "5{}-{}-a", edge_letter(edge), side_letter(edge, corner))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_ids() {
        assert_eq!(Branch::CenterOpening.to_string(), "1");
        assert_eq!(Branch::CornerOpening(Position::BottomRight).to_string(), "2d");
        assert_eq!(Branch::CornerAnswer(Position::TopRight).to_string(), "3b");
        assert_eq!(Branch::CenterAnswer(Position::BottomLeft).to_string(), "4c");
        assert_eq!(Branch::CenterFollowUp(Position::MiddleLeft).to_string(), "1-b");
        assert_eq!(Branch::CenterFollowUp(Position::BottomRight).to_string(), "1-h");
    }

    #[test]
    fn test_follow_up_ids_skip_opening_corner() {
        let id = |reply| {
            Branch::CornerFollowUp {
                opening: Position::TopLeft,
                reply,
            }
            .to_string()
        };
        assert_eq!(id(Position::TopCenter), "2a-a");
        assert_eq!(id(Position::TopRight), "2a-e");
        assert_eq!(id(Position::BottomRight), "2a-g");
        assert_eq!(id(Position::Center), "2a-h");
    }

    #[test]
    fn test_edge_answer_sides() {
        let left = Branch::EdgeAnswer {
            edge: Position::MiddleLeft,
            corner: Position::BottomLeft,
        };
        assert_eq!(left.to_string(), "5b-b");
        let top = Branch::EdgeCenter {
            edge: Position::TopCenter,
            corner: Position::TopLeft,
        };
        assert_eq!(top.to_string(), "5a-a-a");
    }
}
