//! Static evaluation.
//!
//! Every pawn on the board contributes a score to its own side; the result is
//! White's total minus Black's, negated for Black.

use super::masks::PASSED_PAWN_MASK;
use super::movegen::pawn_attacks;
use super::{Board, Color, Square};

pub const PAWN_VALUE: i32 = 10;
pub const ADVANCE_BONUS: i32 = 2;
pub const PASSED_BONUS: i32 = 25;
pub const BLOCKED_PENALTY: i32 = 15;
pub const HANGING_PENALTY: i32 = 20;
pub const EN_PASSANT_PENALTY: i32 = 20;

impl Board {
    /// Static score of the position from `color`'s point of view.
    #[must_use]
    pub fn evaluate(&self, color: Color) -> i32 {
        let score = self.side_score(Color::White) - self.side_score(Color::Black);
        match color {
            Color::White => score,
            Color::Black => -score,
        }
    }

    fn side_score(&self, color: Color) -> i32 {
        let them = color.opponent();
        let enemies = self.pawns(them);
        let threatened = pawn_attacks(enemies, them);
        let occupied = self.occupied();
        let vulnerable = self.en_passant_victim();

        let mut total = 0;
        for sq in self.pawns(color).iter() {
            total += PAWN_VALUE + ADVANCE_BONUS * color.rows_advanced(sq.row()) as i32;

            if (PASSED_PAWN_MASK[color.index()][sq.as_index()] & enemies).is_empty() {
                total += PASSED_BONUS;
            }
            if sq
                .offset(color.pawn_direction(), 0)
                .is_some_and(|ahead| occupied.contains(ahead))
            {
                total -= BLOCKED_PENALTY;
            }
            if threatened.contains(sq) {
                total -= HANGING_PENALTY;
            }
            if vulnerable == Some(sq) {
                total -= EN_PASSANT_PENALTY;
            }
        }
        total
    }

    /// The pawn that just double-pushed, if an enemy pawn stands beside it
    /// and can take it en passant.
    fn en_passant_victim(&self) -> Option<Square> {
        let target = self.en_passant_target?;
        let (victim_color, victim) = Color::BOTH.into_iter().find_map(|color| {
            target
                .offset(color.pawn_direction(), 0)
                .filter(|&sq| self.pawns(color).contains(sq))
                .map(|sq| (color, sq))
        })?;
        let attackers = self.pawns(victim_color.opponent());
        [-1, 1]
            .into_iter()
            .filter_map(|d_col| victim.offset(0, d_col))
            .any(|sq| attackers.contains(sq))
            .then_some(victim)
    }
}
