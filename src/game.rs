//! Game session: board history, undo and a shared move cache.
//!
//! A [`Game`] keeps every board reached so far in an append-only arena. The
//! board at version `n - 1` is the one version `n` was played from, so undo
//! is a pop and no board has to point at its predecessor.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use crate::board::{
    generate, Board, GameResult, Move, MoveError, MovePair, MoveSet, NotationStyle, Position,
    PromotionChoice,
};

type CacheKey = (usize, Position);

/// A game in progress.
#[derive(Debug)]
pub struct Game {
    boards: Vec<Board>,
    /// Legal moves per (version, origin), filled lazily or by `pregenerate`
    move_cache: Mutex<HashMap<CacheKey, Arc<MoveSet>>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::initial())
    }

    /// A game starting from `board`, usually one set up with a builder
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Game {
            boards: vec![board],
            move_cache: Mutex::new(HashMap::new()),
        }
    }

    /// The current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.boards[self.version()]
    }

    /// Number of moves played since the start board
    #[inline]
    #[must_use]
    pub fn version(&self) -> usize {
        self.boards.len() - 1
    }

    #[must_use]
    pub fn board_at(&self, version: usize) -> Option<&Board> {
        self.boards.get(version)
    }

    /// The board the current one was played from
    #[must_use]
    pub fn previous(&self) -> Option<&Board> {
        self.version()
            .checked_sub(1)
            .and_then(|version| self.boards.get(version))
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.board().game_result()
    }

    /// Plays `mv` for the side to move.
    ///
    /// The move must be one of the legal moves of the piece it names, as
    /// generated on the current board.
    pub fn play(&mut self, mv: &Move) -> Result<&Board, MoveError> {
        if let Err(err) = self.validate(mv) {
            log::warn!("rejected {mv:?}: {err}");
            return Err(err);
        }

        let next = self.board().play_move(mv, true);
        log::debug!("version {}: played {}", self.boards.len(), mv);
        self.boards.push(next);

        if log::log_enabled!(log::Level::Debug) {
            let result = self.result();
            if result.is_over() {
                log::debug!("game over: {result:?}");
            }
        }
        Ok(self.board())
    }

    /// Resolves `from`-`to` (and a promotion choice, if needed) to a legal
    /// move and plays it.
    pub fn play_from_to(
        &mut self,
        from: Position,
        to: Position,
        promotion: Option<PromotionChoice>,
    ) -> Result<&Board, MoveError> {
        let mv = match self.board().find_legal_move(from, to, promotion) {
            Ok(mv) => mv,
            Err(err) => {
                log::warn!("rejected {from}-{to}: {err}");
                return Err(err);
            }
        };
        self.play(&mv)
    }

    fn validate(&self, mv: &Move) -> Result<(), MoveError> {
        let board = self.board();
        let result = board.game_result();
        if result.is_over() {
            return Err(MoveError::GameOver { result });
        }

        let origin = mv.origin();
        let piece = board
            .piece_at(origin)
            .ok_or(MoveError::NoPiece { position: origin })?;
        if piece.player() != board.current_player() {
            return Err(MoveError::NotYourTurn {
                player: piece.player(),
            });
        }
        if piece != mv.piece() || !self.legal_moves(origin).contains(mv) {
            return Err(MoveError::IllegalMove {
                from: origin,
                to: mv.dest(),
            });
        }
        Ok(())
    }

    /// Takes back the last move and returns it. The start board cannot be
    /// undone.
    pub fn undo(&mut self) -> Option<Move> {
        if self.boards.len() == 1 {
            return None;
        }
        let undone = self.boards.pop()?;
        let version = self.boards.len();
        self.move_cache.lock().retain(|(v, _), _| *v < version);
        log::debug!("undid version {version}");
        undone.last_move().cloned()
    }

    /// Legal moves of the piece on `position` in the current board; empty
    /// when the square is empty or off the board.
    #[must_use]
    pub fn legal_moves(&self, position: Position) -> Arc<MoveSet> {
        let key = (self.version(), position);
        if let Some(moves) = self.move_cache.lock().get(&key) {
            return Arc::clone(moves);
        }

        let moves = match self.board().piece_at(position) {
            Some(piece) => generate(self.board(), piece, true),
            None => MoveSet::new(),
        };
        let mut cache = self.move_cache.lock();
        Arc::clone(cache.entry(key).or_insert_with(|| Arc::new(moves)))
    }

    /// Generates the legal moves of every piece of the side to move in
    /// parallel, one thread per piece, and caches them. Returns once all
    /// threads have finished.
    pub fn pregenerate(&self) {
        let version = self.version();
        let board = self.board();
        let pending: Vec<_> = {
            let cache = self.move_cache.lock();
            board
                .pieces(board.current_player())
                .into_iter()
                .filter(|piece| !cache.contains_key(&(version, piece.position())))
                .collect()
        };
        log::trace!("pre-generating moves for {} pieces", pending.len());

        thread::scope(|scope| {
            for piece in pending {
                scope.spawn(move || {
                    let moves = Arc::new(generate(board, piece, true));
                    self.move_cache
                        .lock()
                        .entry((version, piece.position()))
                        .or_insert(moves);
                });
            }
        });
    }

    /// Whether the moves of the piece on `position` are cached for the
    /// current board
    #[must_use]
    pub fn is_cached(&self, position: Position) -> bool {
        self.move_cache
            .lock()
            .contains_key(&(self.version(), position))
    }

    /// Moves played in this game, in order
    pub fn moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.boards.iter().skip(1).filter_map(Board::last_move)
    }

    /// The scoresheet of this game in text notation
    #[must_use]
    pub fn move_pairs(&self) -> Vec<MovePair> {
        self.move_pairs_with(NotationStyle::Text)
    }

    #[must_use]
    pub fn move_pairs_with(&self, style: NotationStyle) -> Vec<MovePair> {
        let notations = self.boards.iter().skip(1).filter_map(|board| {
            board
                .last_move()
                .map(|mv| mv.notation_with(style, board.is_check()))
        });
        MovePair::pair_up(notations, self.boards[0].current_player())
    }
}
