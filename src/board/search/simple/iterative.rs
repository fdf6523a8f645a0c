use log::{debug, trace};

use super::{SearchContext, CHECKMATE, INFINITY};
use crate::board::{Move, MoveList};

impl SearchContext<'_> {
    /// Iterative deepening with aspiration windows and a deadline checked
    /// before each depth. Returns the best move and score of the deepest
    /// completed depth.
    pub fn iterative_deepening(&mut self, max_depth: u32, moves: &MoveList) -> Option<(Move, i32)> {
        let mut root_moves = self.order_root(moves);
        let mut best: Option<(Move, i32)> = None;
        let mate_bound = CHECKMATE - self.params.mate_margin;

        for depth in 1..=max_depth.max(1) {
            if self.deadline_passed() {
                break;
            }

            // Previous best first; the rest keep their heuristic order
            if let Some((mv, _)) = best {
                root_moves.promote_to_front(mv);
            }

            let result = match best {
                Some((_, prev))
                    if self.features.aspiration && depth >= self.params.aspiration_min_depth =>
                {
                    self.aspiration_search(depth, prev, &root_moves)
                }
                _ => self.search_root(depth, -INFINITY, INFINITY, &root_moves),
            };

            let Some((mv, score)) = result else {
                break;
            };
            best = Some((mv, score));
            self.completed_depth = depth;

            debug!(
                "depth {depth} score {score} move {mv} nodes {} qnodes {} tt_hits {} time {:?}",
                self.nodes,
                self.qnodes,
                self.tt_hits,
                self.start_time.elapsed()
            );

            if score.abs() >= mate_bound {
                break;
            }
        }

        best
    }

    /// Search `previous ± window`; fall back to a full window when the
    /// result lands on or outside either bound.
    fn aspiration_search(
        &mut self,
        depth: u32,
        previous: i32,
        moves: &MoveList,
    ) -> Option<(Move, i32)> {
        let window = self.params.aspiration_window;
        let alpha = previous.saturating_sub(window).max(-INFINITY);
        let beta = previous.saturating_add(window).min(INFINITY);

        let (mv, score) = self.search_root(depth, alpha, beta, moves)?;
        if score > alpha && score < beta {
            return Some((mv, score));
        }

        self.researches += 1;
        trace!("depth {depth}: score {score} outside window ({alpha}, {beta}), re-searching");
        self.search_root(depth, -INFINITY, INFINITY, moves)
    }
}
