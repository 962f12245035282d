//! Game-level scenarios played move by move from the initial position.

use super::{board_from_diagram, play, pos};
use crate::board::{
    generate, Board, DrawType, GameResult, Move, PieceKind, Player, Position, WinType,
};

fn en_passant_moves(board: &Board, at: &str) -> Vec<Move> {
    let pawn = board.piece_at(pos(at)).unwrap();
    generate(board, pawn, true)
        .into_iter()
        .filter(|mv| matches!(mv, Move::EnPassant { .. }))
        .collect()
}

#[test]
fn test_en_passant_window() {
    let mut board = Board::initial();
    for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
        board = play(&board, from, to);
    }

    let captures = en_passant_moves(&board, "e5");
    assert_eq!(captures.len(), 1);
    match &captures[0] {
        Move::EnPassant {
            dest,
            captured_pawn,
            ..
        } => {
            assert_eq!(*dest, pos("d6"));
            assert_eq!(*captured_pawn, pos("d5"));
        }
        other => panic!("expected en passant, got {other:?}"),
    }

    let taken = board.play_move(&captures[0], true);
    assert!(taken.piece_at(pos("d5")).is_none());
    assert_eq!(
        taken.piece_at(pos("d6")).map(|p| (p.kind(), p.player())),
        Some((PieceKind::Pawn, Player::White))
    );

    // Two plies later the capture is gone
    let board = play(&board, "h2", "h3");
    let board = play(&board, "h7", "h6");
    assert!(en_passant_moves(&board, "e5").is_empty());
}

#[test]
fn test_single_steps_do_not_allow_en_passant() {
    let mut board = Board::initial();
    for (from, to) in [("e2", "e4"), ("d7", "d6"), ("e4", "e5"), ("d6", "d5")] {
        board = play(&board, from, to);
    }
    // d6-d5 ends beside e5 but was not a double step
    assert!(en_passant_moves(&board, "e5").is_empty());
}

#[test]
fn test_castling_appears_and_disappears() {
    let mut board = Board::initial();
    for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
        board = play(&board, from, to);
    }
    assert!(board.find_legal_move(pos("e1"), pos("g1"), None).is_err());

    let board = play(&board, "f1", "c4");
    let board = play(&board, "g8", "f6");
    let castle = board.find_legal_move(pos("e1"), pos("g1"), None).unwrap();
    assert!(matches!(castle, Move::Castling { queen_side: false, .. }));

    let castled = board.play_move(&castle, true);
    assert_eq!(
        castled.piece_at(pos("g1")).map(|p| p.kind()),
        Some(PieceKind::King)
    );
    assert_eq!(
        castled.piece_at(pos("f1")).map(|p| p.kind()),
        Some(PieceKind::Rook)
    );
    assert!(castled.piece_at(pos("h1")).is_none());
    assert!(castled.piece_at(pos("e1")).is_none());
}

#[test]
fn test_castling_through_attacked_square() {
    // The black bishop on c4 covers f1
    let board = board_from_diagram("4k3/8/8/8/2b5/8/8/4K2R", Player::White);
    assert!(board.find_legal_move(pos("e1"), pos("g1"), None).is_err());

    let board = board_from_diagram("4k3/8/8/8/8/8/8/4K2R", Player::White);
    assert!(board.find_legal_move(pos("e1"), pos("g1"), None).is_ok());
}

#[test]
fn test_rook_that_moved_and_returned_cannot_castle() {
    let board = board_from_diagram("4k3/8/8/8/8/8/8/4K2R", Player::White);
    let board = play(&board, "h1", "h2");
    let board = play(&board, "e8", "d8");
    let board = play(&board, "h2", "h1");
    let board = play(&board, "d8", "e8");
    assert!(board.piece_at(pos("h1")).unwrap().has_moved());
    assert!(board.find_legal_move(pos("e1"), pos("g1"), None).is_err());
}

#[test]
fn test_back_rank_mate() {
    let board = board_from_diagram("6k1/5ppp/8/8/8/8/8/R5K1", Player::White);
    let board = play(&board, "a1", "a8");

    assert!(board.is_check());
    assert!(board.is_checkmate());
    assert!(!board.is_stalemate());
    assert_eq!(
        board.game_result(),
        GameResult::WhiteWins(WinType::Checkmate)
    );
    for piece in board.pieces(Player::Black) {
        assert!(piece.generate_moves(&board, true).is_empty());
    }
}

#[test]
fn test_scholars_mate() {
    let mut board = Board::initial();
    let line = [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
        ("h5", "f7"),
    ];
    for (from, to) in line {
        board = play(&board, from, to);
    }
    assert_eq!(
        board.game_result(),
        GameResult::WhiteWins(WinType::Checkmate)
    );
    assert_eq!(board.played_moves().len(), line.len());
}

#[test]
fn test_stalemate() {
    let board = board_from_diagram("7k/5Q2/6K1/8/8/8/8/8", Player::Black);
    assert!(board.is_stalemate());
    assert!(!board.is_checkmate());
    assert_eq!(board.game_result(), GameResult::Draw(DrawType::Stalemate));
    assert!(board.legal_moves(Player::Black).is_empty());
}

#[test]
fn test_check_only_concerns_side_to_move() {
    // White's king is attacked while Black is on turn: not Black's check
    let board = board_from_diagram("4k3/8/8/8/8/8/8/r3K3", Player::Black);
    assert!(!board.is_check());
    let board = board_from_diagram("4k3/8/8/8/8/8/8/r3K3", Player::White);
    assert!(board.is_check());
}

#[test]
fn test_square_lookup_matches_validity() {
    let board = Board::initial();
    for row in -2..10 {
        for col in -2..10 {
            let p = Position::new(row, col);
            assert_eq!(board.square_or_none(p).is_some(), p.is_valid());
            assert_eq!(board.square(p).is_ok(), p.is_valid());
        }
    }
}
