//! Algebraic move notation.
//!
//! Moves are written without disambiguation: the piece symbol (none for
//! pawns), the origin file for pawn captures, `x` for captures and the
//! destination. Promotions append `=Q`, castling is `O-O` or `O-O-O`, en
//! passant captures carry an ` e.p.` suffix, and `+` marks a move that
//! leaves the opponent in check.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Move, Piece, PieceKind, Player};

/// How piece symbols are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NotationStyle {
    /// `N`, `B`, `R`, `Q`, `K`
    #[default]
    Text,
    /// Chess glyphs, white or black by the piece's owner
    Figurine,
}

impl NotationStyle {
    fn symbol(self, kind: PieceKind, player: Player) -> Option<char> {
        if kind == PieceKind::Pawn {
            return None;
        }
        let symbol = match self {
            NotationStyle::Text => kind.letter(),
            NotationStyle::Figurine => match (player, kind) {
                (Player::White, PieceKind::Knight) => '♘',
                (Player::White, PieceKind::Bishop) => '♗',
                (Player::White, PieceKind::Rook) => '♖',
                (Player::White, PieceKind::Queen) => '♕',
                (Player::White, _) => '♔',
                (Player::Black, PieceKind::Knight) => '♞',
                (Player::Black, PieceKind::Bishop) => '♝',
                (Player::Black, PieceKind::Rook) => '♜',
                (Player::Black, PieceKind::Queen) => '♛',
                (Player::Black, _) => '♚',
            },
        };
        Some(symbol)
    }
}

impl Move {
    /// Text notation of this move
    #[must_use]
    pub fn notation(&self, gives_check: bool) -> String {
        self.notation_with(NotationStyle::Text, gives_check)
    }

    /// Notation of this move in the given style
    #[must_use]
    pub fn notation_with(&self, style: NotationStyle, gives_check: bool) -> String {
        let mut out = String::new();
        match self {
            Move::Basic {
                piece,
                dest,
                captured,
            } => {
                push_piece(&mut out, style, piece, *captured);
                out.push_str(&dest.to_string());
            }
            Move::Promotion {
                pawn,
                dest,
                captured,
                promoted,
            } => {
                push_piece(&mut out, style, pawn, *captured);
                out.push_str(&dest.to_string());
                out.push('=');
                if let Some(symbol) = style.symbol(promoted.kind(), promoted.player()) {
                    out.push(symbol);
                }
            }
            Move::Castling { queen_side, .. } => {
                out.push_str(if *queen_side { "O-O-O" } else { "O-O" });
            }
            Move::EnPassant { pawn, dest, .. } => {
                push_piece(&mut out, style, pawn, true);
                out.push_str(&dest.to_string());
                out.push_str(" e.p.");
            }
        }
        if gives_check {
            out.push('+');
        }
        out
    }
}

fn push_piece(out: &mut String, style: NotationStyle, piece: &Piece, captured: bool) {
    match style.symbol(piece.kind(), piece.player()) {
        Some(symbol) => out.push(symbol),
        None if captured => out.push(piece.position().file()),
        None => {}
    }
    if captured {
        out.push('x');
    }
}

impl Board {
    /// Notation of `mv` played from this board, with `+` if it gives check
    #[must_use]
    pub fn notation(&self, mv: &Move) -> String {
        self.notation_with(mv, NotationStyle::Text)
    }

    #[must_use]
    pub fn notation_with(&self, mv: &Move, style: NotationStyle) -> String {
        let after = self.play_move(mv, true);
        mv.notation_with(style, after.is_check())
    }
}

/// One scoresheet line: the move number and each side's move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovePair {
    pub number: usize,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl MovePair {
    /// Groups notations, in play order, into numbered pairs. A game that
    /// starts with Black to move gets an empty white slot in its first line
    /// once Black has moved.
    #[must_use]
    pub fn pair_up<I>(notations: I, first_mover: Player) -> Vec<MovePair>
    where
        I: IntoIterator<Item = String>,
    {
        let mut slots: Vec<Option<String>> = notations.into_iter().map(Some).collect();
        if first_mover == Player::Black && !slots.is_empty() {
            slots.insert(0, None);
        }

        slots
            .chunks(2)
            .enumerate()
            .map(|(i, chunk)| MovePair {
                number: i + 1,
                white: chunk[0].clone(),
                black: chunk.get(1).cloned().flatten(),
            })
            .collect()
    }
}

impl fmt::Display for MovePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {}",
            self.number,
            self.white.as_deref().unwrap_or("...")
        )?;
        match &self.black {
            Some(black) => write!(f, " {black}"),
            None => Ok(()),
        }
    }
}
