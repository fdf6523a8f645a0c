//! Game-over detection.

use super::{Bitboard, Board, Color};

impl Board {
    /// The winner if the game is over with `to_move` on move, else `None`.
    ///
    /// Checked in order: a pawn on its promotion row wins for its color
    /// (White first); a side with no pawns loses; a side to move with no
    /// legal move loses.
    #[must_use]
    pub fn is_game_over(&self, to_move: Color) -> Option<Color> {
        for color in Color::BOTH {
            let goal = Bitboard::row_mask(color.promotion_row());
            if !(self.pawns(color) & goal).is_empty() {
                return Some(color);
            }
        }
        if self.pawns(Color::Black).is_empty() {
            return Some(Color::White);
        }
        if self.pawns(Color::White).is_empty() {
            return Some(Color::Black);
        }
        if !self.has_moves(to_move) {
            return Some(to_move.opponent());
        }
        None
    }
}
