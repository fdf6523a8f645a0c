//! Core board types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Color` - the two sides
//! - `Square` - (row, col) board coordinates
//! - `Bitboard` - 64-bit occupancy masks
//! - `Move` and `MoveList` - move representation

mod bitboard;
mod color;
mod moves;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use color::Color;
pub use moves::{Move, MoveList, MoveListIntoIter, ScoredMove, ScoredMoveList};
pub use square::Square;

pub(crate) use moves::MAX_PLY;
