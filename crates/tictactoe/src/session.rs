//! Game session: the surface the presentation layer talks to.

use crate::players::{Player, Seats};
use crate::turn::{GameEvent, Submission, TurnController};
use crate::{Board, Difficulty, FirstPlayer, GameMode, Mark, MoveError, SessionConfig};
use tracing::{debug, info, instrument};

/// Receives every event a session produces.
pub trait SessionObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent);
}

/// A board, its turn protocol, and the two seats.
pub struct GameSession {
    board: Board,
    turn: TurnController,
    seats: Seats,
    config: SessionConfig,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    /// Creates a session and lets a computer holding X open.
    #[instrument]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            board: Board::new(),
            turn: TurnController::new(),
            seats: Seats::humans(),
            config,
            observers: Vec::new(),
        };
        session.reseat();
        session
    }

    /// Current configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Switches between one and two players and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.config = self.config.with_mode(mode);
        self.reseat();
    }

    /// Changes the computer opponent and starts a new game.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config = self.config.with_difficulty(difficulty);
        self.reseat();
    }

    /// Chooses who plays X against the computer and starts a new game.
    #[instrument(skip(self))]
    pub fn set_first_player(&mut self, first_player: FirstPlayer) {
        self.config = self.config.with_first_player(first_player);
        self.reseat();
    }

    /// Registers an observer for subsequent events.
    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Plays the current mark at `index`.
    ///
    /// Returns `None` without changing anything when the move is refused:
    /// the cell is occupied or out of range, or a move is still in progress.
    pub fn select_cell(&mut self, index: usize) -> Option<Submission> {
        self.try_select_cell(index).ok()
    }

    /// Like [`select_cell`](Self::select_cell), but says why a move was refused.
    ///
    /// # Errors
    ///
    /// Returns the [`MoveError`] from the turn controller; nothing changes.
    #[instrument(skip(self))]
    pub fn try_select_cell(&mut self, index: usize) -> Result<Submission, MoveError> {
        let submission = self
            .turn
            .submit_move(&mut self.board, &mut self.seats, index)
            .inspect_err(|e| debug!(error = %e, index, "Move ignored"))?;
        self.notify(&submission);
        Ok(submission)
    }

    /// Abandons the current game and starts over.
    ///
    /// The returned submission begins with [`GameEvent::Reset`], followed by
    /// the computer's opening move when it holds X.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Submission {
        match self.turn.restart(&mut self.board, &mut self.seats) {
            Ok(submission) => {
                self.notify(&submission);
                submission
            }
            Err(e) => {
                debug!(error = %e, "Opening move failed");
                Submission::default()
            }
        }
    }

    /// Display symbols for the nine cells.
    pub fn grid(&self) -> [&'static str; 9] {
        self.board.symbols()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether cell selection is currently accepted.
    pub fn moves_allowed(&self) -> bool {
        self.turn.moves_allowed()
    }

    /// Mark to move next.
    pub fn to_move(&self) -> Option<Mark> {
        self.turn.to_move()
    }

    /// Player holding `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        self.seats.get(mark)
    }

    fn reseat(&mut self) {
        self.seats = match self.config.mode() {
            GameMode::TwoPlayer => Seats::humans(),
            GameMode::OnePlayer => {
                let computer = self.config.first_player().computer_mark();
                let opponent = Player::for_difficulty(*self.config.difficulty(), computer, *self.config.seed());
                Seats::against(computer, opponent)
            }
        };
        info!(
            mode = %self.config.mode(),
            difficulty = %self.config.difficulty(),
            x = self.seats.get(Mark::X).name(),
            o = self.seats.get(Mark::O).name(),
            "Seats assigned"
        );
        self.new_game();
    }

    fn notify(&mut self, submission: &Submission) {
        for event in submission.events() {
            for observer in &mut self.observers {
                observer.on_event(event);
            }
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("board", &self.board)
            .field("turn", &self.turn)
            .field("seats", &self.seats)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<GameEvent>>>);

    impl SessionObserver for Recorder {
        fn on_event(&mut self, event: &GameEvent) {
            self.0.borrow_mut().push(event.clone());
        }
    }

    fn two_player() -> GameSession {
        GameSession::new(SessionConfig::new().with_mode(GameMode::TwoPlayer))
    }

    #[test]
    fn test_occupied_cell_is_a_no_op() {
        let mut session = two_player();
        assert!(session.select_cell(4).is_some());
        let grid = session.grid();
        assert!(session.select_cell(4).is_none());
        assert!(session.select_cell(9).is_none());
        assert_eq!(session.grid(), grid);
        assert_eq!(session.to_move(), Some(Mark::O));
    }

    #[test]
    fn test_grid_symbols() {
        let mut session = two_player();
        session.select_cell(0);
        session.select_cell(8);
        let grid = session.grid();
        assert_eq!(grid[0], "X");
        assert_eq!(grid[8], "O");
        assert_eq!(grid[4], "");
        assert!(session.moves_allowed());
    }

    #[test]
    fn test_observer_sees_finished_board_before_reset() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut session = two_player();
        session.subscribe(Box::new(Recorder(Rc::clone(&events))));

        for cell in [0, 3, 1, 4, 2] {
            session.select_cell(cell);
        }

        let events = events.borrow();
        let finished = events
            .iter()
            .position(|e| matches!(e, GameEvent::Finished { .. }))
            .unwrap();
        assert!(matches!(
            &events[finished],
            GameEvent::Finished { outcome: crate::GameOutcome::Win(Mark::X), board } if board.filled() == 5
        ));
        assert_eq!(events[finished + 1], GameEvent::Reset);
        assert_eq!(session.grid(), [""; 9]);
    }

    #[test]
    fn test_one_player_computer_answers() {
        let config = SessionConfig::new().with_difficulty(Difficulty::Easy).with_seed(21);
        let mut session = GameSession::new(config);
        let submission = session.select_cell(4).unwrap();
        assert_eq!(submission.moves().count(), 2);
        assert_eq!(session.board().filled(), 2);
        assert!(session.player(Mark::O).name().contains("Easy"));
    }

    #[test]
    fn test_computer_first_opens_immediately() {
        let config = SessionConfig::new()
            .with_difficulty(Difficulty::Hard)
            .with_first_player(FirstPlayer::Computer)
            .with_seed(2);
        let session = GameSession::new(config);
        assert_eq!(session.board().filled(), 1);
        assert_eq!(session.to_move(), Some(Mark::O));
    }

    #[test]
    fn test_refusals_carry_their_reason() {
        let mut session = two_player();
        session.select_cell(4);
        assert_eq!(
            session.try_select_cell(4).unwrap_err(),
            MoveError::Occupied(crate::Position::Center)
        );
        assert_eq!(session.try_select_cell(12).unwrap_err(), MoveError::OutOfRange(12));
        assert_eq!(session.board().filled(), 1);
    }

    #[test]
    fn test_new_game_events_match_observers() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let config = SessionConfig::new()
            .with_difficulty(Difficulty::Easy)
            .with_first_player(FirstPlayer::Computer)
            .with_seed(5);
        let mut session = GameSession::new(config);
        session.subscribe(Box::new(Recorder(Rc::clone(&events))));

        let submission = session.new_game();
        assert_eq!(submission.events()[0], GameEvent::Reset);
        assert_eq!(submission.moves().count(), 1);
        assert_eq!(events.borrow().as_slice(), submission.events());
    }

    #[test]
    fn test_reconfiguring_starts_fresh_game() {
        let mut session = two_player();
        session.select_cell(0);
        session.set_mode(GameMode::OnePlayer);
        assert_eq!(session.board().filled(), 0);
        assert!(!session.player(Mark::O).is_human());

        session.set_difficulty(Difficulty::Hard);
        assert!(matches!(session.player(Mark::O), Player::Optimal(_)));
        assert_eq!(session.to_move(), Some(Mark::X));
    }
}
