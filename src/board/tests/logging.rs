//! Log output of boards and games.

use super::{captured_logs, pos};
use crate::board::{Board, GameResult, WinType};
use crate::Game;

#[test]
fn test_simulating_a_move_logs_nothing() {
    let board = Board::initial();
    let mv = board.find_legal_move(pos("e2"), pos("e4"), None).unwrap();
    let logs = captured_logs(|| {
        let _ = board.simulate_move(&mv);
        let _ = board.play_move(&mv, false);
    });
    assert!(logs.is_empty(), "unexpected records: {logs:?}");
}

#[test]
fn test_game_logs_play_and_game_over() {
    let mut game = Game::new();
    let logs = captured_logs(|| {
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            game.play_from_to(pos(from), pos(to), None).unwrap();
        }
    });
    assert_eq!(logs.iter().filter(|l| l.starts_with("DEBUG version")).count(), 3);
    assert!(!logs.iter().any(|l| l.contains("game over")));

    let logs = captured_logs(|| {
        game.play_from_to(pos("d8"), pos("h4"), None).unwrap();
    });
    assert_eq!(game.result(), GameResult::BlackWins(WinType::Checkmate));
    let over: Vec<_> = logs.iter().filter(|l| l.contains("game over")).collect();
    assert_eq!(over.len(), 1, "records: {logs:?}");
    assert!(over[0].starts_with("DEBUG"));
}

#[test]
fn test_rejected_move_logs_a_warning() {
    let mut game = Game::new();
    let logs = captured_logs(|| {
        assert!(game.play_from_to(pos("e2"), pos("e5"), None).is_err());
    });
    let warnings: Vec<_> = logs.iter().filter(|l| l.starts_with("WARN")).collect();
    assert_eq!(warnings, ["WARN rejected e2-e5: Illegal move e2-e5"]);
    assert_eq!(game.version(), 0);
}
