//! Tests for game sessions and their configuration.

use std::io::Write;
use tictactoe::{
    Difficulty, FirstPlayer, GameEvent, GameMode, GameOutcome, GameSession, Mark, Player,
    SessionConfig,
};

#[test]
fn test_human_vs_human_win_resets_board() {
    let mut session = GameSession::new(SessionConfig::new().with_mode(GameMode::TwoPlayer));
    for cell in [4, 0, 2, 1] {
        assert!(session.select_cell(cell).is_some());
    }
    // X completes the anti-diagonal
    let submission = session.select_cell(6).unwrap();

    assert_eq!(submission.outcome(), Some(GameOutcome::Win(Mark::X)));
    let final_board = submission.final_board().unwrap();
    assert_eq!(final_board.symbols()[6], "X");
    assert_eq!(session.grid(), [""; 9]);
    assert_eq!(session.to_move(), Some(Mark::X));
}

#[test]
fn test_hard_opponent_blocks_and_never_loses() {
    let config = SessionConfig::new().with_difficulty(Difficulty::Hard).with_seed(99);
    let mut session = GameSession::new(config);

    let mut outcome = None;
    while outcome.is_none() {
        let free = session
            .board()
            .empty_positions()
            .first()
            .copied()
            .unwrap()
            .to_index();
        outcome = session.select_cell(free).unwrap().outcome();
    }
    assert_ne!(outcome, Some(GameOutcome::Win(Mark::X)));
}

#[test]
fn test_switching_sides_reseats_computer() {
    let mut session = GameSession::new(SessionConfig::new().with_difficulty(Difficulty::Normal));
    assert!(session.player(Mark::X).is_human());

    session.set_first_player(FirstPlayer::Computer);
    assert!(matches!(session.player(Mark::X), Player::Heuristic(_)));
    assert!(session.player(Mark::O).is_human());
    assert_eq!(session.board().filled(), 1);
    assert_eq!(session.to_move(), Some(Mark::O));
}

#[test]
fn test_new_game_mid_game() {
    let mut session = GameSession::new(SessionConfig::new().with_mode(GameMode::TwoPlayer));
    session.select_cell(0);
    session.select_cell(4);
    let submission = session.new_game();
    assert_eq!(submission.events(), [GameEvent::Reset].as_slice());
    assert_eq!(session.board().filled(), 0);
    assert!(session.moves_allowed());
}

#[test]
fn test_events_serialize_to_json() {
    let mut session = GameSession::new(SessionConfig::new().with_mode(GameMode::TwoPlayer));
    let submission = session.select_cell(4).unwrap();
    let json = serde_json::to_string(&submission).unwrap();
    assert!(json.contains("Center"));
    assert!(matches!(submission.events()[0], GameEvent::Placed(_)));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"two_player\"").unwrap();
    writeln!(file, "first_player = \"computer\"").unwrap();

    let config = SessionConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::TwoPlayer);
    assert_eq!(*config.first_player(), FirstPlayer::Computer);
    assert_eq!(*config.difficulty(), Difficulty::Normal);

    // Seating only applies against the computer
    let session = GameSession::new(config);
    assert_eq!(session.board().filled(), 0);
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SessionConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
