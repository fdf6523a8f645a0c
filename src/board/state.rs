use std::fmt;
use std::sync::Arc;

use super::{Bitboard, Color, Move, Square};
use crate::zobrist::ZobristKeys;

/// Snapshot taken before a move is applied; `undo_move` restores it in O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UndoRecord {
    pub(crate) pawns: [Bitboard; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) current_player: Color,
    pub(crate) hash: u64,
    pub(crate) last_move: Option<Move>,
}

#[derive(Clone)]
pub struct Board {
    pub(crate) pawns: [Bitboard; 2],
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) current_player: Color,
    pub(crate) hash: u64, // Zobrist hash
    pub(crate) last_move: Option<Move>,
    pub(crate) keys: Arc<ZobristKeys>,
}

impl Board {
    /// Standard starting position: White pawns on rank 2, Black on rank 7,
    /// White to move.
    #[must_use]
    pub fn new() -> Self {
        Board::new_with_keys(ZobristKeys::shared_default())
    }

    /// Starting position hashed with the given key set.
    #[must_use]
    pub fn new_with_keys(keys: Arc<ZobristKeys>) -> Self {
        let mut board = Board::empty_with_keys(keys);
        board.pawns[Color::White.index()] = Bitboard::row_mask(Color::White.home_row());
        board.pawns[Color::Black.index()] = Bitboard::row_mask(Color::Black.home_row());
        board.hash = board.calculate_hash();
        board
    }

    /// A board with no pawns and White to move.
    #[must_use]
    pub fn empty() -> Self {
        Board::empty_with_keys(ZobristKeys::shared_default())
    }

    #[must_use]
    pub fn empty_with_keys(keys: Arc<ZobristKeys>) -> Self {
        Board {
            pawns: [Bitboard::EMPTY; 2],
            en_passant_target: None,
            current_player: Color::White,
            hash: 0,
            last_move: None,
            keys,
        }
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    #[must_use]
    pub fn pawns(&self, color: Color) -> Bitboard {
        self.pawns[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn white_pawns(&self) -> Bitboard {
        self.pawns[Color::White.index()]
    }

    #[inline]
    #[must_use]
    pub fn black_pawns(&self) -> Bitboard {
        self.pawns[Color::Black.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupied(&self) -> Bitboard {
        self.pawns[0] | self.pawns[1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.occupied().contains(sq)
    }

    #[must_use]
    pub fn pawn_at(&self, sq: Square) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|&c| self.pawns[c.index()].contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn pawn_count(&self, color: Color) -> u32 {
        self.pawns[color.index()].popcount()
    }

    #[must_use]
    pub fn zobrist_keys(&self) -> &Arc<ZobristKeys> {
        &self.keys
    }

    /// Hand the move to `color` without playing a move. The en passant
    /// target is kept.
    pub fn set_side_to_move(&mut self, color: Color) {
        if color != self.current_player {
            self.hash ^= self.keys.black_to_move_key;
            self.current_player = color;
        }
    }

    /// Full Zobrist recomputation from occupancy, en passant file and side
    /// to move. The incrementally maintained `hash` must always match it.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for color in Color::BOTH {
            for sq in self.pawns[color.index()].iter() {
                hash ^= self.keys.pawn(color, sq);
            }
        }
        if let Some(target) = self.en_passant_target {
            hash ^= self.keys.en_passant(target);
        }
        hash ^ self.keys.side(self.current_player)
    }

    #[inline]
    pub(crate) fn toggle_pawn(&mut self, color: Color, sq: Square) {
        self.pawns[color.index()] ^= Bitboard::from_square(sq);
        self.hash ^= self.keys.pawn(color, sq);
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, target: Option<Square>) {
        if let Some(old) = self.en_passant_target {
            self.hash ^= self.keys.en_passant(old);
        }
        if let Some(new) = target {
            self.hash ^= self.keys.en_passant(new);
        }
        self.en_passant_target = target;
    }

    pub(crate) fn snapshot(&self) -> UndoRecord {
        UndoRecord {
            pawns: self.pawns,
            en_passant_target: self.en_passant_target,
            current_player: self.current_player,
            hash: self.hash,
            last_move: self.last_move,
        }
    }

    /// Flip the board top-to-bottom and swap colors. The result is the same
    /// game seen from the other side.
    #[must_use]
    pub fn mirrored(&self) -> Board {
        let mut board = Board::empty_with_keys(Arc::clone(&self.keys));
        board.pawns[Color::White.index()] = self.black_pawns().flip_vertical();
        board.pawns[Color::Black.index()] = self.white_pawns().flip_vertical();
        board.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        board.current_player = self.current_player.opponent();
        board.last_move = self
            .last_move
            .map(|mv| Move::new(mv.from().flip_vertical(), mv.to().flip_vertical()));
        board.hash = board.calculate_hash();
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Boards compare by position; the key set is not part of the state.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pawns == other.pawns
            && self.en_passant_target == other.en_passant_target
            && self.current_player == other.current_player
            && self.hash == other.hash
            && self.last_move == other.last_move
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("white_pawns", &format_args!("{:#018x}", self.white_pawns().0))
            .field("black_pawns", &format_args!("{:#018x}", self.black_pawns().0))
            .field("en_passant_target", &self.en_passant_target)
            .field("current_player", &self.current_player)
            .field("hash", &format_args!("{:#018x}", self.hash))
            .field("last_move", &self.last_move)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let cell = match self.pawn_at(Square(row, col)) {
                    Some(Color::White) => "wp",
                    Some(Color::Black) => "bp",
                    None => "--",
                };
                write!(f, " {cell}")?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..8u8 {
            write!(f, "  {}", (b'a' + col) as char)?;
        }
        writeln!(f)?;
        if let Some(mv) = self.last_move {
            writeln!(f, "last move: {mv}")?;
        }
        write!(f, "{} to move", self.current_player)
    }
}
