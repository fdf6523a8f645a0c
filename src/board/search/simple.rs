//! Core search implementation.
//!
//! This module implements:
//! - Iterative deepening with aspiration windows
//! - Negamax alpha-beta (fail-soft) with PVS
//! - Quiescence search with stand-pat and delta pruning
//! - Transposition table probing with ply-adjusted win scores

mod iterative;
mod quiescence;

use std::time::Instant;

use crate::tt::BoundType;

use super::constants::{CHECKMATE, INFINITY, MATE_THRESHOLD, NODE_CHECK_INTERVAL};
use super::move_order::order_moves;
use super::params::{SearchFeatures, SearchParams};
use super::{SearchState, SearchStats};
use crate::board::{Board, Color, Move, MoveList};

/// Search context for a single top-level search
pub(super) struct SearchContext<'a> {
    pub board: &'a mut Board,
    pub state: &'a mut SearchState,
    pub params: SearchParams,
    pub features: SearchFeatures,
    pub start_time: Instant,
    pub deadline: Option<Instant>,
    pub node_limit: u64,
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    pub researches: u64,
    pub completed_depth: u32,
    /// Set once a limit fires; every score computed afterwards is garbage
    pub stopped: bool,
}

/// Score for a finished game, seen from the side to move at `ply`.
#[inline]
pub(super) fn terminal_score(winner: Color, to_move: Color, ply: usize) -> i32 {
    let score = CHECKMATE - ply as i32;
    if winner == to_move {
        score
    } else {
        -score
    }
}

/// Win scores are stored relative to the node, not the root.
#[inline]
fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

#[inline]
fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

impl<'a> SearchContext<'a> {
    pub fn new(
        board: &'a mut Board,
        state: &'a mut SearchState,
        start_time: Instant,
        deadline: Option<Instant>,
    ) -> Self {
        let params = state.params.clone();
        let features = state.features;
        SearchContext {
            board,
            state,
            node_limit: params.node_limit,
            params,
            features,
            start_time,
            deadline,
            nodes: 0,
            qnodes: 0,
            tt_hits: 0,
            researches: 0,
            completed_depth: 0,
            stopped: false,
        }
    }

    pub fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.nodes,
            qnodes: self.qnodes,
            tt_hits: self.tt_hits,
            researches: self.researches,
            completed_depth: self.completed_depth,
        }
    }

    pub fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Node and (optionally) time limits. Once true it stays true.
    pub fn should_stop(&mut self) -> bool {
        if self.stopped {
            return true;
        }
        let total = self.nodes + self.qnodes;
        if self.node_limit > 0 && total >= self.node_limit {
            self.stopped = true;
        } else if self.params.abort_on_deadline
            && total % NODE_CHECK_INTERVAL == 0
            && self.deadline_passed()
        {
            self.stopped = true;
        }
        self.stopped
    }

    fn ordered(&self, moves: &MoveList, color: Color) -> MoveList {
        if self.features.move_ordering {
            order_moves(&*self.board, moves, color)
        } else {
            moves.clone()
        }
    }

    pub fn order_root(&self, moves: &MoveList) -> MoveList {
        self.ordered(moves, self.board.current_player())
    }

    fn probe_tt(
        &mut self,
        depth: u32,
        alpha: i32,
        beta: i32,
        ply: usize,
    ) -> (Option<i32>, Option<Move>) {
        if !self.features.transposition_table {
            return (None, None);
        }
        let Some(entry) = self.state.tt.probe(self.board.hash()) else {
            return (None, None);
        };
        let tt_move = entry.best_move();
        if entry.depth() < depth {
            return (None, tt_move);
        }
        let score = score_from_tt(entry.score(), ply);
        let usable = match entry.bound_type() {
            BoundType::Exact => true,
            BoundType::LowerBound => score >= beta,
            BoundType::UpperBound => score <= alpha,
        };
        if usable {
            self.tt_hits += 1;
            (Some(score), tt_move)
        } else {
            (None, tt_move)
        }
    }

    fn store_tt(
        &mut self,
        depth: u32,
        ply: usize,
        score: i32,
        alpha_orig: i32,
        beta: i32,
        best_move: Option<Move>,
    ) {
        if !self.features.transposition_table || self.stopped {
            return;
        }
        let bound = if score <= alpha_orig {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        let hash = self.board.hash();
        self.state
            .tt
            .store(hash, depth, score_to_tt(score, ply), bound, best_move);
    }

    /// Search one child with PVS: full window for the first move, null
    /// window for the rest with a re-search when it lands inside the window.
    fn search_child(&mut self, index: usize, depth: u32, ply: usize, alpha: i32, beta: i32) -> i32 {
        if !self.features.pvs || index == 0 {
            return -self.negamax(depth - 1, ply + 1, -beta, -alpha);
        }
        let score = -self.negamax(depth - 1, ply + 1, -alpha - 1, -alpha);
        if score > alpha && score < beta && !self.stopped {
            -self.negamax(depth - 1, ply + 1, -beta, -alpha)
        } else {
            score
        }
    }

    /// Negamax alpha-beta. Returns the score from the side to move's view.
    pub fn negamax(&mut self, depth: u32, ply: usize, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if self.should_stop() {
            return 0;
        }

        let color = self.board.current_player();
        let alpha_orig = alpha;

        let (tt_score, tt_move) = self.probe_tt(depth, alpha, beta, ply);
        if let Some(score) = tt_score {
            return score;
        }

        if let Some(winner) = self.board.is_game_over(color) {
            return terminal_score(winner, color, ply);
        }

        if depth == 0 {
            return if self.features.quiescence {
                self.quiesce(alpha, beta, ply, 0)
            } else {
                self.board.evaluate(color)
            };
        }

        let mut moves = self.ordered(&self.board.generate_moves(color), color);
        if let Some(mv) = tt_move {
            if self.features.move_ordering {
                moves.promote_to_front(mv);
            }
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;
        for (i, &mv) in moves.iter().enumerate() {
            let record = self.board.make_move_unchecked(mv, color);
            let score = self.search_child(i, depth, ply, alpha, beta);
            self.board.undo_move(record);

            if self.stopped {
                return 0;
            }
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        self.store_tt(depth, ply, best_score, alpha_orig, beta, best_move);
        best_score
    }

    /// Root search over `moves` in the given order. Unlike inner nodes the
    /// root never takes a table cutoff or a terminal shortcut, so it always
    /// yields a move. `None` when a limit stopped the search.
    pub fn search_root(
        &mut self,
        depth: u32,
        mut alpha: i32,
        beta: i32,
        moves: &MoveList,
    ) -> Option<(Move, i32)> {
        let color = self.board.current_player();
        let alpha_orig = alpha;
        let mut best: Option<(Move, i32)> = None;

        for (i, &mv) in moves.iter().enumerate() {
            let record = self.board.make_move_unchecked(mv, color);
            let score = self.search_child(i, depth, 0, alpha, beta);
            self.board.undo_move(record);

            if self.stopped {
                return None;
            }
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                break;
            }
        }

        if let Some((mv, score)) = best {
            self.store_tt(depth, 0, score, alpha_orig, beta, Some(mv));
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::{SearchContext, INFINITY};
    use crate::board::search::SearchState;
    use crate::board::{Board, Color};
    use crate::tt::BoundType;

    /// Root search of the start position at depth 3 inside `(alpha, beta)`.
    /// Returns the score and the table entry left for the root.
    fn root_search(alpha: i32, beta: i32) -> (i32, BoundType, i32) {
        let mut board = Board::new();
        let mut state = SearchState::new(1, 0);
        let moves = board.generate_moves(Color::White);
        let hash = board.hash();

        let mut ctx = SearchContext::new(&mut board, &mut state, Instant::now(), None);
        let ordered = ctx.order_root(&moves);
        let (_, score) = ctx.search_root(3, alpha, beta, &ordered).expect("root move");

        let entry = state.tt().probe(hash).expect("root entry");
        (score, entry.bound_type(), entry.score())
    }

    #[test]
    fn full_window_stores_exact_score() {
        let (score, bound, stored) = root_search(-INFINITY, INFINITY);
        assert_eq!(bound, BoundType::Exact);
        assert_eq!(stored, score);
    }

    #[test]
    fn fail_low_stores_upper_bound() {
        let (exact, ..) = root_search(-INFINITY, INFINITY);
        let (alpha, beta) = (exact + 500, exact + 600);
        let (score, bound, stored) = root_search(alpha, beta);
        assert!(score <= alpha);
        assert_eq!(bound, BoundType::UpperBound);
        assert_eq!(stored, score);
    }

    #[test]
    fn fail_high_stores_lower_bound() {
        let (exact, ..) = root_search(-INFINITY, INFINITY);
        let (alpha, beta) = (exact - 600, exact - 500);
        let (score, bound, stored) = root_search(alpha, beta);
        assert!(score >= beta);
        assert_eq!(bound, BoundType::LowerBound);
        assert_eq!(stored, score);
    }

    #[test]
    fn bound_entries_only_cut_on_their_side() {
        let mut board = Board::new();
        let mut state = SearchState::new(1, 0);
        let hash = board.hash();
        let mut ctx = SearchContext::new(&mut board, &mut state, Instant::now(), None);

        ctx.store_tt(3, 0, 40, 50, 100, None);
        assert_eq!(ctx.probe_tt(3, 60, 100, 0).0, Some(40));
        assert_eq!(ctx.probe_tt(3, 30, 100, 0).0, None);

        ctx.store_tt(3, 0, 120, 50, 100, None);
        assert_eq!(ctx.probe_tt(3, 50, 110, 0).0, Some(120));
        assert_eq!(ctx.probe_tt(3, 50, 130, 0).0, None);

        // Shallower entries only lend their move
        assert_eq!(ctx.probe_tt(4, 50, 110, 0).0, None);
        assert_eq!(ctx.tt_hits, 2);
        assert_eq!(state.tt().probe(hash).map(|e| e.depth()), Some(3));
    }
}
