//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Move-generation node counts from reference positions
//! - `scenarios.rs` - Game-level scenarios (en passant window, mates)
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests over random games
//! - `logging.rs` - What the rules layer logs, and when it stays silent

mod logging;
mod scenarios;

use std::cell::{Cell, RefCell};
use std::sync::Once;

use crate::board::{Board, BoardBuilder, PieceKind, Player, Position};

/// Builds a board from the piece-placement field of a position diagram,
/// rank 8 first (`"rnbqkbnr/pppppppp/8/..."`).
///
/// Castling and double-step rights follow from which pieces stand on their
/// home squares.
pub(super) fn board_from_diagram(placement: &str, side_to_move: Player) -> Board {
    let mut builder = BoardBuilder::new().side_to_move(side_to_move);
    for (row, rank) in placement.split('/').enumerate() {
        let mut col = 0i8;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                col += skip as i8;
                continue;
            }
            let player = if c.is_ascii_uppercase() {
                Player::White
            } else {
                Player::Black
            };
            let kind = match c.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => panic!("unknown piece '{c}' in {placement}"),
            };
            builder = builder.piece(Position::new(row as i8, col), player, kind);
            col += 1;
        }
    }
    builder.build()
}

/// Plays the legal move `from`-`to` for the side to move
pub(super) fn play(board: &Board, from: &str, to: &str) -> Board {
    let mv = board
        .find_legal_move(pos(from), pos(to), None)
        .unwrap_or_else(|e| panic!("{from}-{to} on move {}: {e}", board.played_moves().len()));
    board.play_move(&mv, true)
}

pub(super) fn pos(s: &str) -> Position {
    s.parse().unwrap()
}

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static RECORDS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Records log output of the thread that runs a capture, so parallel tests
/// do not see each other's records.
struct ThreadLogger;

impl log::Log for ThreadLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        CAPTURING.with(Cell::get)
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            let line = format!("{} {}", record.level(), record.args());
            RECORDS.with(|records| records.borrow_mut().push(line));
        }
    }

    fn flush(&self) {}
}

/// Log lines emitted on this thread while `f` runs, as `"LEVEL message"`
pub(super) fn captured_logs(f: impl FnOnce()) -> Vec<String> {
    static LOGGER: ThreadLogger = ThreadLogger;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    CAPTURING.with(|capturing| capturing.set(true));
    f();
    CAPTURING.with(|capturing| capturing.set(false));
    RECORDS.with(RefCell::take)
}
