//! Game outcomes.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Player};

/// Ways of winning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WinType {
    Checkmate,
    /// Declared for clock-driven collaborators; never produced by the board
    Timeout,
}

/// Ways of drawing.
///
/// Only `Stalemate` is detected. Repetition and the fifty-move rule are part
/// of the taxonomy so collaborators can report them, but the board does not
/// compute them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawType {
    Stalemate,
    ThreefoldRepetition,
    FiftyMoveRule,
}

/// Result of a game, or `StillPlaying`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    WhiteWins(WinType),
    BlackWins(WinType),
    Draw(DrawType),
    StillPlaying,
}

impl GameResult {
    /// A win for `player`
    #[must_use]
    pub const fn win_for(player: Player, how: WinType) -> Self {
        match player {
            Player::White => GameResult::WhiteWins(how),
            Player::Black => GameResult::BlackWins(how),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameResult::StillPlaying)
    }

    /// Score string as written at the end of a game record
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins(_) => "1-0",
            GameResult::BlackWins(_) => "0-1",
            GameResult::Draw(_) => "1/2-1/2",
            GameResult::StillPlaying => "*",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Board {
    /// Outcome of the position for the side to move
    #[must_use]
    pub fn game_result(&self) -> GameResult {
        let player = self.current_player();
        if self.has_legal_moves(player) {
            return GameResult::StillPlaying;
        }
        if self.is_check() {
            GameResult::win_for(player.opponent(), WinType::Checkmate)
        } else {
            GameResult::Draw(DrawType::Stalemate)
        }
    }
}
