//! Pre-computed bitboard masks for pawn evaluation.

use super::types::Bitboard;

/// Files adjacent to each file (0-7)
/// e.g., `ADJACENT_FILES`[3] = files c and e for file d
pub const ADJACENT_FILES: [Bitboard; 8] = {
    let mut masks = [Bitboard(0); 8];
    let mut f = 0;
    while f < 8 {
        let mut adj = 0u64;
        if f > 0 {
            adj |= Bitboard::FILE_A.0 << (f - 1);
        }
        if f < 7 {
            adj |= Bitboard::FILE_A.0 << (f + 1);
        }
        masks[f] = Bitboard(adj);
        f += 1;
    }
    masks
};

/// Passed pawn masks - squares that would block a pawn from being passed
/// `PASSED_PAWN_MASK`[color][square] = enemy pawns on these squares block passed status
pub const PASSED_PAWN_MASK: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard(0); 64]; 2];

    let mut sq = 0;
    while sq < 64 {
        let row = sq / 8;
        let file = sq % 8;
        let span = Bitboard::FILE_A.0 << file | ADJACENT_FILES[file].0;

        // White advances towards row 0: every row above this one
        let mut r = 0;
        while r < row {
            masks[0][sq].0 |= span & (Bitboard::ROW_0.0 << (r * 8));
            r += 1;
        }

        // Black advances towards row 7: every row below this one
        let mut r = row + 1;
        while r < 8 {
            masks[1][sq].0 |= span & (Bitboard::ROW_0.0 << (r * 8));
            r += 1;
        }

        sq += 1;
    }
    masks
};
