//! Turn protocol: whose move it is, the move gate, and the reset after a
//! finished game.

use crate::action::{Move, MoveError};
use crate::players::Seats;
use crate::{Board, GameOutcome, Mark, Position};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Where the turn protocol stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnState {
    /// Waiting for the holder of this mark.
    AwaitingMove(Mark),
    /// The game has just ended.
    Terminal(GameOutcome),
}

/// Something that happened while a submission was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A mark was placed.
    Placed(Move),
    /// The game ended; `board` is the final position before it was cleared.
    Finished {
        /// Win or draw.
        outcome: GameOutcome,
        /// Board as it stood when the game ended.
        board: Board,
    },
    /// The board was cleared and X is to move.
    Reset,
}

/// Everything a single submission caused, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    events: Vec<GameEvent>,
}

impl Submission {
    /// Events in the order they happened.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Every mark placed.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.events.iter().filter_map(|event| match event {
            GameEvent::Placed(mv) => Some(mv),
            _ => None,
        })
    }

    /// Outcome of the game that ended during this submission, if any.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.events.iter().find_map(|event| match event {
            GameEvent::Finished { outcome, .. } => Some(*outcome),
            _ => None,
        })
    }

    /// Final board of the game that ended during this submission, if any.
    pub fn final_board(&self) -> Option<&Board> {
        self.events.iter().find_map(|event| match event {
            GameEvent::Finished { board, .. } => Some(board),
            _ => None,
        })
    }

    fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

/// Owns the turn, the move gate, and the reset protocol.
#[derive(Debug, Clone)]
pub struct TurnController {
    state: TurnState,
    allow_move: bool,
}

impl TurnController {
    /// X to move, gate open.
    pub fn new() -> Self {
        Self {
            state: TurnState::AwaitingMove(Mark::X),
            allow_move: true,
        }
    }

    /// Current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Mark expected to move next.
    pub fn to_move(&self) -> Option<Mark> {
        match self.state {
            TurnState::AwaitingMove(mark) => Some(mark),
            TurnState::Terminal(_) => None,
        }
    }

    /// Whether a submission would currently be considered.
    pub fn moves_allowed(&self) -> bool {
        self.allow_move
    }

    /// Lets a computer holding X open the game.
    #[instrument(skip_all)]
    pub fn start(&mut self, board: &mut Board, seats: &mut Seats) -> Result<Submission, MoveError> {
        self.gated(|turn, submission| turn.run_computers(board, seats, submission))
    }

    /// Places the current mark at `index`, then lets computer seats reply
    /// until a human is to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MovesLocked`] while a previous submission is
    /// still being processed, and the board's error for an out-of-range or
    /// occupied cell. A rejected move changes nothing.
    #[instrument(skip(self, board, seats), fields(state = ?self.state))]
    pub fn submit_move(
        &mut self,
        board: &mut Board,
        seats: &mut Seats,
        index: usize,
    ) -> Result<Submission, MoveError> {
        if !self.allow_move {
            debug!("Move rejected: gate closed");
            return Err(MoveError::MovesLocked);
        }
        self.gated(|turn, submission| {
            turn.place(board, seats, index, submission)?;
            turn.run_computers(board, seats, submission)
        })
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip_all)]
    pub fn reset(&mut self, board: &mut Board, seats: &mut Seats) {
        board.clear();
        seats.reset();
        self.state = TurnState::AwaitingMove(Mark::X);
    }

    /// Abandons the current game, then lets a computer holding X open the
    /// next one. The returned submission starts with [`GameEvent::Reset`].
    #[instrument(skip_all)]
    pub fn restart(&mut self, board: &mut Board, seats: &mut Seats) -> Result<Submission, MoveError> {
        self.gated(|turn, submission| {
            turn.reset(board, seats);
            submission.push(GameEvent::Reset);
            turn.run_computers(board, seats, submission)
        })
    }

    /// Runs `step` with the gate closed, reopening it afterwards whatever the result.
    fn gated<F>(&mut self, step: F) -> Result<Submission, MoveError>
    where
        F: FnOnce(&mut Self, &mut Submission) -> Result<(), MoveError>,
    {
        self.allow_move = false;
        let mut submission = Submission::default();
        let result = step(self, &mut submission);
        self.allow_move = true;
        result.map(|()| submission)
    }

    /// Applies one move for the mark whose turn it is.
    fn place(
        &mut self,
        board: &mut Board,
        seats: &mut Seats,
        index: usize,
        submission: &mut Submission,
    ) -> Result<(), MoveError> {
        let mark = self.to_move().ok_or(MoveError::GameOver)?;
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        board.set(position.to_index(), mark)?;
        submission.push(GameEvent::Placed(Move::new(mark, position)));

        match board.evaluate() {
            GameOutcome::InProgress => {
                self.state = TurnState::AwaitingMove(mark.opponent());
            }
            outcome => {
                info!(%outcome, "Game finished");
                self.state = TurnState::Terminal(outcome);
                submission.push(GameEvent::Finished {
                    outcome,
                    board: board.clone(),
                });
                self.reset(board, seats);
                submission.push(GameEvent::Reset);
            }
        }
        Ok(())
    }

    /// Lets computer seats move while one of them holds the turn.
    fn run_computers(
        &mut self,
        board: &mut Board,
        seats: &mut Seats,
        submission: &mut Submission,
    ) -> Result<(), MoveError> {
        while let Some(mark) = self.to_move() {
            // After a finished game, only the opening move of the next one is played.
            if submission.outcome().is_some() && board.filled() > 0 {
                break;
            }
            let player = seats.get_mut(mark);
            if player.is_human() {
                break;
            }
            let Some(position) = player.decide(board) else {
                break;
            };
            debug!(?mark, ?position, player = player.name(), "Computer move");
            self.place(board, seats, position.to_index(), submission)?;
        }
        Ok(())
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
