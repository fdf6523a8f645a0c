//! Zobrist hashing for pawn positions.
//!
//! Keys are generated from an explicit seed and owned by whoever builds them.
//! Boards hold an `Arc` to their key set, so searches with different seeds
//! never share state.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Square};

/// Seed used by `Board::new` and friends.
pub const DEFAULT_ZOBRIST_SEED: u64 = 1_234_567_890;

static DEFAULT_KEYS: Lazy<Arc<ZobristKeys>> =
    Lazy::new(|| Arc::new(ZobristKeys::new(DEFAULT_ZOBRIST_SEED)));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristKeys {
    // pawn_keys[color][square_index]
    pub(crate) pawn_keys: [[u64; 64]; 2],
    pub(crate) black_to_move_key: u64,
    // en_passant_keys[file_index] (only file matters for EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pawn_keys = [[0; 64]; 2];
        let mut en_passant_keys = [0; 8];

        for color in &mut pawn_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            pawn_keys,
            black_to_move_key,
            en_passant_keys,
        }
    }

    /// Shared key set for the default seed.
    #[must_use]
    pub fn shared_default() -> Arc<ZobristKeys> {
        Arc::clone(&DEFAULT_KEYS)
    }

    #[inline]
    #[must_use]
    pub(crate) fn pawn(&self, color: Color, sq: Square) -> u64 {
        self.pawn_keys[color.index()][sq.index().as_usize()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn en_passant(&self, target: Square) -> u64 {
        self.en_passant_keys[target.col()]
    }

    /// Key XORed in while `color` is on move (zero for White)
    #[inline]
    #[must_use]
    pub(crate) fn side(&self, color: Color) -> u64 {
        match color {
            Color::White => 0,
            Color::Black => self.black_to_move_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_keys() {
        assert_eq!(ZobristKeys::new(7), ZobristKeys::new(7));
    }

    #[test]
    fn different_seeds_differ() {
        let a = ZobristKeys::new(1);
        let b = ZobristKeys::new(2);
        assert_ne!(a.pawn_keys, b.pawn_keys);
    }

    #[test]
    fn shared_default_is_reused() {
        let a = ZobristKeys::shared_default();
        let b = ZobristKeys::shared_default();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, ZobristKeys::new(DEFAULT_ZOBRIST_SEED));
    }
}
