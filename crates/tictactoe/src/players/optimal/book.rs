//! Opening book for the hard opponent.
//!
//! Each table is keyed by the branch recorded on an earlier turn together
//! with the other side's replies. Anything not listed here is left to the
//! random fallback.

use super::{BookMove, Branch};
use crate::{Board, Position};

use Position::{
    BottomCenter, BottomLeft, BottomRight, Center, MiddleLeft, MiddleRight, TopCenter, TopLeft,
    TopRight,
};

/// First move of the game: center or any corner.
pub(super) const OPENINGS: [BookMove; 5] = [
    BookMove::records(Center, Branch::CenterOpening),
    BookMove::records(TopLeft, Branch::CornerOpening(TopLeft)),
    BookMove::records(TopRight, Branch::CornerOpening(TopRight)),
    BookMove::records(BottomLeft, Branch::CornerOpening(BottomLeft)),
    BookMove::records(BottomRight, Branch::CornerOpening(BottomRight)),
];

/// The two corners adjacent to each edge.
const EDGE_CORNERS: [(Position, [Position; 2]); 4] = [
    (TopCenter, [TopLeft, TopRight]),
    (MiddleLeft, [TopLeft, BottomLeft]),
    (MiddleRight, [TopRight, BottomRight]),
    (BottomCenter, [BottomLeft, BottomRight]),
];

/// Own second move after opening: (opening, reply) -> target.
const FOLLOW_UPS: [(Position, Position, Position); 40] = [
    // Center opening: an edge reply gets the corner that forces a block,
    // a corner reply gets the opposite corner.
    (Center, TopCenter, BottomLeft),
    (Center, MiddleLeft, BottomRight),
    (Center, MiddleRight, TopLeft),
    (Center, BottomCenter, TopRight),
    (Center, TopLeft, BottomRight),
    (Center, TopRight, BottomLeft),
    (Center, BottomLeft, TopRight),
    (Center, BottomRight, TopLeft),
    // Top-left opening
    (TopLeft, TopCenter, Center),
    (TopLeft, MiddleLeft, Center),
    (TopLeft, MiddleRight, Center),
    (TopLeft, BottomCenter, Center),
    (TopLeft, TopRight, BottomLeft),
    (TopLeft, BottomLeft, BottomRight),
    (TopLeft, BottomRight, TopRight),
    (TopLeft, Center, BottomRight),
    // Top-right opening
    (TopRight, TopCenter, Center),
    (TopRight, MiddleLeft, Center),
    (TopRight, MiddleRight, Center),
    (TopRight, BottomCenter, Center),
    (TopRight, TopLeft, BottomRight),
    (TopRight, BottomLeft, TopLeft),
    (TopRight, BottomRight, BottomLeft),
    (TopRight, Center, BottomLeft),
    // Bottom-left opening
    (BottomLeft, TopCenter, Center),
    (BottomLeft, MiddleLeft, Center),
    (BottomLeft, MiddleRight, Center),
    (BottomLeft, BottomCenter, Center),
    (BottomLeft, TopLeft, BottomRight),
    (BottomLeft, TopRight, TopLeft),
    (BottomLeft, BottomRight, TopRight),
    (BottomLeft, Center, TopRight),
    // Bottom-right opening
    (BottomRight, TopCenter, Center),
    (BottomRight, MiddleLeft, Center),
    (BottomRight, MiddleRight, Center),
    (BottomRight, BottomCenter, Center),
    (BottomRight, TopLeft, TopRight),
    (BottomRight, TopRight, BottomLeft),
    (BottomRight, BottomLeft, TopLeft),
    (BottomRight, Center, TopLeft),
];

/// Own third move after a corner opening: (opening, reply) -> target.
const CLOSERS: [(Position, Position, Position); 20] = [
    (TopLeft, TopCenter, BottomLeft),
    (TopLeft, MiddleLeft, TopRight),
    (TopLeft, TopRight, BottomRight),
    (TopLeft, BottomLeft, TopRight),
    (TopLeft, BottomRight, BottomLeft),
    (TopRight, TopCenter, BottomRight),
    (TopRight, MiddleRight, TopLeft),
    (TopRight, TopLeft, BottomLeft),
    (TopRight, BottomLeft, BottomRight),
    (TopRight, BottomRight, TopLeft),
    (BottomLeft, MiddleLeft, BottomRight),
    (BottomLeft, BottomCenter, TopLeft),
    (BottomLeft, TopLeft, TopRight),
    (BottomLeft, TopRight, BottomRight),
    (BottomLeft, BottomRight, TopLeft),
    (BottomRight, MiddleRight, BottomLeft),
    (BottomRight, BottomCenter, TopRight),
    (BottomRight, TopLeft, BottomLeft),
    (BottomRight, TopRight, TopLeft),
    (BottomRight, BottomLeft, TopRight),
];

/// After a corner opening met in the center, a far edge threatens a fork:
/// (their corner, their edge) -> the fork cell.
const FORK_GUARDS: [(Position, Position, Position); 8] = [
    (TopLeft, MiddleRight, TopRight),
    (TopLeft, BottomCenter, BottomLeft),
    (TopRight, MiddleLeft, TopLeft),
    (TopRight, BottomCenter, BottomRight),
    (BottomLeft, TopCenter, TopLeft),
    (BottomLeft, MiddleRight, BottomRight),
    (BottomRight, TopCenter, TopRight),
    (BottomRight, MiddleLeft, BottomLeft),
];

/// Answers to the other side's opening move.
pub(super) fn answers(first: Position) -> Vec<BookMove> {
    if first == Center {
        return Position::CORNERS
            .iter()
            .map(|corner| BookMove::records(*corner, Branch::CornerAnswer(*corner)))
            .collect();
    }
    if first.is_corner() {
        return vec![BookMove::records(Center, Branch::CenterAnswer(first))];
    }
    EDGE_CORNERS
        .iter()
        .filter(|(edge, _)| *edge == first)
        .flat_map(|(edge, corners)| {
            corners.iter().map(|corner| {
                BookMove::records(
                    *corner,
                    Branch::EdgeAnswer {
                        edge: *edge,
                        corner: *corner,
                    },
                )
            })
        })
        .collect()
}

/// Own second move after opening the game.
pub(super) fn follow_up(branch: Branch, reply: Position) -> Option<BookMove> {
    let opening = match branch {
        Branch::CenterOpening => Center,
        Branch::CornerOpening(corner) => corner,
        _ => return None,
    };
    let (_, _, target) = FOLLOW_UPS
        .iter()
        .find(|(o, r, _)| *o == opening && *r == reply)?;
    let next = if opening == Center {
        Branch::CenterFollowUp(reply)
    } else {
        Branch::CornerFollowUp { opening, reply }
    };
    Some(BookMove::records(*target, next))
}

/// Own second move when answering, given both of the other side's marks.
pub(super) fn consolidate(branch: Branch, board: &Board, replies: &[Position]) -> Option<BookMove> {
    match branch {
        Branch::CornerAnswer(_) => first_empty_corner(board).map(BookMove::keeps),
        Branch::CenterAnswer(_) => {
            if replies.iter().all(|r| r.is_corner()) {
                return Some(BookMove::keeps(TopCenter));
            }
            let corner = replies.iter().find(|r| r.is_corner());
            let edge = replies.iter().find(|r| r.is_edge());
            let guard = match (corner, edge) {
                (Some(corner), Some(edge)) => FORK_GUARDS
                    .iter()
                    .find(|(c, e, _)| c == corner && e == edge)
                    .map(|(_, _, target)| *target),
                _ => None,
            };
            guard.or_else(|| first_empty_corner(board)).map(BookMove::keeps)
        }
        Branch::EdgeAnswer { edge, corner } => Some(BookMove::records(
            Center,
            Branch::EdgeCenter { edge, corner },
        )),
        _ => None,
    }
}

/// Own third move after a corner opening.
pub(super) fn close(branch: Branch) -> Option<BookMove> {
    let Branch::CornerFollowUp { opening, reply } = branch else {
        return None;
    };
    CLOSERS
        .iter()
        .find(|(o, r, _)| *o == opening && *r == reply)
        .map(|(_, _, target)| BookMove::keeps(*target))
}

fn first_empty_corner(board: &Board) -> Option<Position> {
    Position::CORNERS.iter().copied().find(|c| board.is_empty(*c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::share_line;

    #[test]
    fn test_follow_ups_cover_every_reply() {
        for opening in [Center, TopLeft, TopRight, BottomLeft, BottomRight] {
            for reply in Position::ALL.iter().filter(|p| **p != opening) {
                let found = FOLLOW_UPS.iter().filter(|(o, r, _)| *o == opening && r == reply).count();
                assert_eq!(found, 1, "opening {opening:?} reply {reply:?}");
            }
        }
    }

    #[test]
    fn test_targets_are_free_cells() {
        for (opening, reply, target) in FOLLOW_UPS.iter().chain(CLOSERS.iter()) {
            assert_ne!(target, opening);
            assert_ne!(target, reply);
        }
    }

    #[test]
    fn test_fork_guards_sit_on_both_lines() {
        for (corner, edge, target) in FORK_GUARDS {
            assert!(target.is_corner());
            assert!(share_line(corner, target));
            assert!(share_line(edge, target));
        }
    }

    #[test]
    fn test_edge_answers_are_adjacent_corners() {
        for edge in Position::EDGES {
            let moves = answers(edge);
            assert_eq!(moves.len(), 2);
            assert!(moves.iter().all(|m| m.position.is_corner() && share_line(m.position, edge)));
        }
    }

    #[test]
    fn test_close_needs_corner_follow_up() {
        assert_eq!(close(Branch::CenterFollowUp(TopCenter)), None);
        let closing = close(Branch::CornerFollowUp {
            opening: TopLeft,
            reply: TopRight,
        });
        assert_eq!(closing.map(|m| m.position), Some(BottomRight));
    }
}
