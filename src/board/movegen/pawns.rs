use super::super::{Bitboard, Board, Color, Move, MoveList, Square};

/// Set-wise pawn step helpers. Shifts move bits by whole rows, so masking
/// the edge files first rules out wraparound on the diagonals.
pub(crate) fn forward(pawns: Bitboard, color: Color) -> Bitboard {
    match color {
        Color::White => Bitboard(pawns.0 >> 8),
        Color::Black => Bitboard(pawns.0 << 8),
    }
}

/// Squares attacked diagonally by `pawns` (towards file a and file h).
pub(crate) fn attacks(pawns: Bitboard, color: Color) -> Bitboard {
    let not_a = pawns & !Bitboard::FILE_A;
    let not_h = pawns & !Bitboard::FILE_H;
    match color {
        Color::White => Bitboard((not_a.0 >> 9) | (not_h.0 >> 7)),
        Color::Black => Bitboard((not_a.0 << 7) | (not_h.0 << 9)),
    }
}

impl Board {
    /// True if a `color` pawn on `from` may capture en passant onto the
    /// current target. The pawn must stand on the rank next to the target,
    /// one file away, beside the enemy pawn that just double-pushed.
    pub(crate) fn can_capture_en_passant(&self, from: Square, color: Color) -> bool {
        let Some(target) = self.en_passant_target else {
            return false;
        };
        let on_adjacent_rank = from.offset(color.pawn_direction(), 0).map(Square::row)
            == Some(target.row());
        on_adjacent_rank
            && from.col().abs_diff(target.col()) == 1
            && self
                .pawns(color.opponent())
                .contains(Square(from.row(), target.col()))
    }

    /// All pawn moves from `from`, in push / double push / capture toward
    /// file a / capture toward file h order.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let occupied = self.occupied();

        if let Some(one) = from.offset(dir, 0) {
            if !occupied.contains(one) {
                moves.push(Move::new(from, one));
                if from.row() == color.home_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if !occupied.contains(two) {
                            moves.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        self.generate_pawn_captures(from, color, moves);
    }

    /// Regular and en passant captures from `from`.
    pub(crate) fn generate_pawn_captures(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let enemies = self.pawns(color.opponent());

        for d_col in [-1, 1] {
            let Some(target) = from.offset(dir, d_col) else {
                continue;
            };
            if enemies.contains(target)
                || (self.en_passant_target == Some(target)
                    && self.can_capture_en_passant(from, color))
            {
                moves.push(Move::new(from, target));
            }
        }
    }
}
