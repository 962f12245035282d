use super::error::PositionError;
use super::occupancy::Occupancy;
use super::{Move, Piece, PieceKind, Player, Position, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Immutable snapshot of a game.
///
/// A board holds its 64 squares, the player to move and the moves played to
/// reach it. It is never modified after construction: [`Board::play_move`]
/// returns a new board and leaves the receiver untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: Vec<Square>,
    pub(crate) current_player: Player,
    pub(crate) played_moves: Vec<Move>,
    pub(crate) occupancy: Occupancy,
}

impl Board {
    /// A board without pieces, White to move
    #[must_use]
    pub fn empty() -> Self {
        Board::from_pieces(Vec::new(), Player::White)
    }

    /// The standard starting position, White to move
    #[must_use]
    pub fn initial() -> Self {
        Board::from_pieces(starting_pieces(), Player::White)
    }

    /// Assembles a fresh snapshot. Later pieces replace earlier ones standing
    /// on the same position.
    pub(crate) fn from_pieces(pieces: Vec<Piece>, current_player: Player) -> Self {
        let mut squares: Vec<Square> = Position::all().map(Square::empty).collect();
        for piece in pieces {
            let idx = piece.position().index();
            squares[idx] = Square::occupied(piece);
        }
        let occupancy = Occupancy::from_squares(&squares);
        Board {
            squares,
            current_player,
            played_moves: Vec::new(),
            occupancy,
        }
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    #[must_use]
    pub fn white_on_turn(&self) -> bool {
        self.current_player == Player::White
    }

    /// Moves played to reach this board, oldest first
    #[inline]
    #[must_use]
    pub fn played_moves(&self) -> &[Move] {
        &self.played_moves
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.played_moves.last()
    }

    /// The square at `position`, or an error if it is off the board
    pub fn square(&self, position: Position) -> Result<&Square, PositionError> {
        self.square_or_none(position)
            .ok_or(PositionError::OutOfBounds {
                row: position.row(),
                col: position.col(),
            })
    }

    /// The square at `position`, or `None` if it is off the board
    #[inline]
    #[must_use]
    pub fn square_or_none(&self, position: Position) -> Option<&Square> {
        if position.is_valid() {
            Some(&self.squares[position.index()])
        } else {
            None
        }
    }

    /// The piece at `position`, if the position is on the board and occupied
    #[inline]
    #[must_use]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.square_or_none(position).and_then(Square::piece)
    }

    /// All squares in row-major order
    #[inline]
    #[must_use]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Pieces of `player` in row-major order
    #[must_use]
    pub fn pieces(&self, player: Player) -> Vec<&Piece> {
        self.occupancy
            .occupied_by(player)
            .iter()
            .filter_map(|pos| self.piece_at(pos))
            .collect()
    }

    /// The king of `player`.
    ///
    /// # Panics
    /// Panics if `player` has no king, which no game position allows.
    #[must_use]
    pub fn king(&self, player: Player) -> &Piece {
        let kings = self.occupancy.pieces_of(player, PieceKind::King);
        kings
            .iter()
            .next()
            .and_then(|pos| self.piece_at(pos))
            .unwrap_or_else(|| panic!("no {player} king on the board"))
    }

    /// Plays `mv` and returns the resulting board.
    ///
    /// Only the squares impacted by the move differ from this board. The move
    /// is appended to the played moves and, if `take_turns` is set, the other
    /// player is on turn afterwards.
    #[must_use]
    pub fn play_move(&self, mv: &Move, take_turns: bool) -> Board {
        let mut squares = self.squares.clone();
        for square in mv.impacted_squares() {
            let idx = square.position().index();
            squares[idx] = square;
        }

        let mut played_moves = Vec::with_capacity(self.played_moves.len() + 1);
        played_moves.extend_from_slice(&self.played_moves);
        played_moves.push(mv.clone());

        let current_player = if take_turns {
            self.current_player.opponent()
        } else {
            self.current_player
        };

        let occupancy = Occupancy::from_squares(&squares);
        Board {
            squares,
            current_player,
            played_moves,
            occupancy,
        }
    }

    /// Plays `mv` without handing the turn over, to see where it leads
    #[inline]
    #[must_use]
    pub fn simulate_move(&self, mv: &Move) -> Board {
        self.play_move(mv, false)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

pub(crate) fn starting_pieces() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(32);
    for player in Player::BOTH {
        for (col, kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            pieces.push(Piece::new(*kind, player, Position::new(player.back_row(), col)));
            pieces.push(Piece::new(
                PieceKind::Pawn,
                player,
                Position::new(player.pawn_row(), col),
            ));
        }
    }
    pieces
}
