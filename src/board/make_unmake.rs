use super::{Board, Color, IllegalMove, Move, Square, UndoRecord};

impl Board {
    /// Validate and apply a pawn move for `color`.
    ///
    /// Returns the record needed to take the move back. On error the board
    /// is untouched.
    pub fn make_move(
        &mut self,
        start: Square,
        end: Square,
        color: Color,
    ) -> Result<UndoRecord, IllegalMove> {
        if color != self.current_player {
            return Err(IllegalMove::OutOfTurn { color });
        }
        let bad_geometry = IllegalMove::BadGeometry {
            color,
            from: start,
            to: end,
        };
        // Coordinates off the board never name a pawn or a target
        if Square::new(start.row(), start.col()).is_none()
            || Square::new(end.row(), end.col()).is_none()
        {
            return Err(bad_geometry);
        }
        if !self.pawns(color).contains(start) {
            return Err(IllegalMove::NoPawn {
                color,
                square: start,
            });
        }
        let mv = Move::new(start, end);
        if !self.is_pseudo_legal(mv, color) {
            return Err(bad_geometry);
        }
        Ok(self.make_move_unchecked(mv, color))
    }

    /// Commit `mv` to the board for good.
    pub fn apply_move(&mut self, mv: Move, color: Color) -> Result<(), IllegalMove> {
        self.make_move(mv.from(), mv.to(), color).map(|_| ())
    }

    /// Apply a move known to be legal (generated by this board).
    pub(crate) fn make_move_unchecked(&mut self, mv: Move, color: Color) -> UndoRecord {
        debug_assert_eq!(color, self.current_player);
        let record = self.snapshot();
        let (from, to) = (mv.from(), mv.to());
        let them = color.opponent();

        self.toggle_pawn(color, from);

        if from.col() != to.col() {
            if self.pawns(them).contains(to) {
                self.toggle_pawn(them, to);
            } else if self.en_passant_target == Some(to) {
                // The captured pawn sits beside the mover, not on the target
                self.toggle_pawn(them, Square(from.row(), to.col()));
            }
        }

        self.toggle_pawn(color, to);

        let target = if from.row().abs_diff(to.row()) == 2 {
            Some(Square((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };
        self.set_en_passant(target);

        self.current_player = them;
        self.hash ^= self.keys.black_to_move_key;
        self.last_move = Some(mv);

        debug_assert_eq!(self.white_pawns() & self.black_pawns(), super::Bitboard::EMPTY);
        record
    }

    /// Restore the state captured in `record`.
    pub fn undo_move(&mut self, record: UndoRecord) {
        self.pawns = record.pawns;
        self.en_passant_target = record.en_passant_target;
        self.current_player = record.current_player;
        self.hash = record.hash;
        self.last_move = record.last_move;
    }
}
