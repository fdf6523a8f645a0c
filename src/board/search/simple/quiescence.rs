use super::{terminal_score, SearchContext, CHECKMATE};
use crate::board::search::move_order::order_captures;

impl SearchContext<'_> {
    /// Capture-only extension below the horizon (fail-hard).
    ///
    /// A side that can reach its promotion row next move is scored as the
    /// forced win it is, since pushes are otherwise invisible here.
    pub fn quiesce(&mut self, mut alpha: i32, beta: i32, ply: usize, qdepth: u32) -> i32 {
        self.qnodes += 1;
        if self.should_stop() {
            return 0;
        }

        let color = self.board.current_player();
        if let Some(winner) = self.board.is_game_over(color) {
            return terminal_score(winner, color, ply);
        }
        if self.board.has_winning_move(color) {
            return CHECKMATE - (ply as i32 + 1);
        }

        let stand_pat = self.board.evaluate(color);
        if stand_pat >= beta {
            return beta;
        }
        if alpha < stand_pat {
            alpha = stand_pat;
        }
        if qdepth >= self.params.max_qsearch_depth {
            return alpha;
        }

        // Delta pruning: no single capture can recover more than the margin
        if stand_pat + self.params.delta_margin < alpha {
            return alpha;
        }

        let captures = order_captures(&*self.board, &self.board.generate_captures(color), color);
        for &mv in &captures {
            let record = self.board.make_move_unchecked(mv, color);
            let score = -self.quiesce(-beta, -alpha, ply + 1, qdepth + 1);
            self.board.undo_move(record);

            if self.stopped {
                return 0;
            }
            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }

        alpha
    }
}
