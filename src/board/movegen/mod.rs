//! Pawn move generation.
//!
//! Pawns are visited in ascending square-index order (a8 first), which fixes
//! the order of the generated list before any heuristic sorting.

mod pawns;

pub(crate) use pawns::{attacks as pawn_attacks, forward as pawn_forward};

use super::{Bitboard, Board, Color, Move, MoveList};

impl Board {
    /// Every legal move for `color`: single and double pushes, diagonal
    /// captures and en passant.
    #[must_use]
    pub fn generate_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.pawns(color).iter() {
            self.generate_pawn_moves(from, color, &mut moves);
        }
        moves
    }

    /// The capturing subset of `generate_moves`, same eligibility rules.
    #[must_use]
    pub fn generate_captures(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for from in self.pawns(color).iter() {
            self.generate_pawn_captures(from, color, &mut moves);
        }
        moves
    }

    /// Cheap existence check: does `color` have any legal move?
    #[must_use]
    pub fn has_moves(&self, color: Color) -> bool {
        let own = self.pawns(color);
        if !(pawn_forward(own, color) & !self.occupied()).is_empty() {
            return true;
        }
        if !(pawn_attacks(own, color) & self.pawns(color.opponent())).is_empty() {
            return true;
        }
        self.en_passant_target.is_some()
            && own.iter().any(|from| self.can_capture_en_passant(from, color))
    }

    /// True if `color` can reach its promotion row with one move.
    #[must_use]
    pub fn has_winning_move(&self, color: Color) -> bool {
        let goal = Bitboard::row_mask(color.promotion_row());
        let own = self.pawns(color);
        let pushes = pawn_forward(own, color) & !self.occupied();
        let captures = pawn_attacks(own, color) & self.pawns(color.opponent());
        !((pushes | captures) & goal).is_empty()
    }

    /// Whether `mv` is one of the moves `color` could generate here.
    #[must_use]
    pub fn is_pseudo_legal(&self, mv: Move, color: Color) -> bool {
        if !self.pawns(color).contains(mv.from()) {
            return false;
        }
        let mut moves = MoveList::new();
        self.generate_pawn_moves(mv.from(), color, &mut moves);
        moves.contains(mv)
    }

    /// Count leaf paths of the move tree to `depth` plies for the side to
    /// move. Finished games count as a single leaf.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let color = self.current_player;
        if self.is_game_over(color).is_some() {
            return 1;
        }

        let moves = self.generate_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let record = self.make_move_unchecked(mv, color);
            nodes += self.perft(depth - 1);
            self.undo_move(record);
        }
        nodes
    }
}
