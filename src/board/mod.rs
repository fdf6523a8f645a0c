//! Pawns-only chess board representation and game logic.
//!
//! Uses one bitboard per side. Pawns push, double-push from their home row,
//! capture diagonally and capture en passant; reaching the far row wins.
//!
//! # Example
//! ```
//! use pawn_chess::board::{Board, Color};
//!
//! let board = Board::new();
//! let moves = board.generate_moves(Color::White);
//! assert_eq!(moves.len(), 16);
//! ```

mod error;
mod eval;
mod make_unmake;
mod masks;
mod movegen;
pub mod search;
mod setup;
mod state;
mod terminal;
mod types;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, IllegalMove, NotationError, SearchError};
pub use eval::{
    ADVANCE_BONUS, BLOCKED_PENALTY, EN_PASSANT_PENALTY, HANGING_PENALTY, PASSED_BONUS, PAWN_VALUE,
};
pub use state::{Board, UndoRecord};
pub use types::{
    Bitboard, BitboardIter, Color, Move, MoveList, MoveListIntoIter, ScoredMove, ScoredMoveList,
    Square,
};

pub use search::{
    order_captures, order_moves, search, search_depth, SearchFeatures, SearchLimits,
    SearchOutcome, SearchParams, SearchState, SearchStats, CHECKMATE, MATE_THRESHOLD,
};

pub(crate) use types::MAX_PLY;
