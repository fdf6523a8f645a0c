//! Search module implementing alpha-beta with iterative deepening.
//!
//! Features:
//! - Iterative deepening under a wall-clock budget, with aspiration windows
//! - Negamax alpha-beta with principal variation search
//! - Quiescence search over captures with stand-pat and delta pruning
//! - Heuristic move ordering (promotions, captures, advancement, tension)
//! - Transposition table for cutoffs and move ordering
//!
//! All search state (table, random source, tuning) is owned by a
//! [`SearchState`]; independent states never influence each other.

mod constants;
mod move_order;
mod params;
mod simple;

use std::time::{Duration, Instant};

use log::{info, warn};
use rand::prelude::*;

use crate::tt::TranspositionTable;

use super::{Board, Color, Move, SearchError};
pub use constants::{CHECKMATE, INFINITY, MATE_THRESHOLD};
pub use move_order::{move_score, order_captures, order_moves};
pub use params::{SearchFeatures, SearchParams};
use simple::SearchContext;

/// Counters collected during one top-level search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub qnodes: u64,
    pub tt_hits: u64,
    /// Aspiration windows that failed and were searched again
    pub researches: u64,
    pub completed_depth: u32,
}

/// Result of a top-level search.
#[derive(Clone, Copy, Debug)]
pub struct SearchOutcome {
    pub best_move: Move,
    /// Score from the searching side's point of view; 0 for a fallback move
    pub score: i32,
    /// Deepest fully searched depth (0 when no depth completed)
    pub depth: u32,
    /// True when no depth completed and a random legal move was chosen
    pub fallback: bool,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchOutcome {
    /// True if the score proves a forced win for the searching side.
    #[must_use]
    pub fn is_forced_win(&self) -> bool {
        self.score >= MATE_THRESHOLD
    }
}

/// Depth and time bounds of one top-level search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_depth: u32,
    /// `None` = no deadline
    pub time_limit: Option<Duration>,
}

impl SearchLimits {
    #[must_use]
    pub fn new(max_depth: u32, time_limit: Duration) -> Self {
        SearchLimits {
            max_depth,
            time_limit: Some(time_limit),
        }
    }

    /// Search to `max_depth` with no deadline.
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchLimits {
            max_depth,
            time_limit: None,
        }
    }
}

/// Everything a search owns besides the board.
pub struct SearchState {
    pub(crate) tt: TranspositionTable,
    pub(crate) rng: StdRng,
    pub params: SearchParams,
    pub features: SearchFeatures,
    /// Start every top-level search with an empty table
    pub clear_tt_each_search: bool,
    /// Counters of the most recent search
    pub stats: SearchStats,
}

impl SearchState {
    #[must_use]
    pub fn new(tt_mb: usize, seed: u64) -> Self {
        SearchState {
            tt: TranspositionTable::new(tt_mb),
            rng: StdRng::seed_from_u64(seed),
            params: SearchParams::default(),
            features: SearchFeatures::default(),
            clear_tt_each_search: true,
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_features(mut self, features: SearchFeatures) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        self.tt.hashfull_per_mille()
    }

    /// Forget everything learned in earlier searches.
    pub fn reset_tables(&mut self) {
        self.tt.clear();
    }

    fn new_search(&mut self) {
        if self.clear_tt_each_search {
            self.tt.clear();
        }
        self.tt.new_search();
        self.stats = SearchStats::default();
    }
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(crate::engine::DEFAULT_TT_MB, 0)
    }
}

fn root_moves(board: &Board, color: Color) -> Result<super::MoveList, SearchError> {
    let to_move = board.current_player();
    if color != to_move {
        return Err(SearchError::NotSideToMove {
            requested: color,
            to_move,
        });
    }
    let moves = board.generate_moves(color);
    if moves.is_empty() {
        return Err(SearchError::SearchExhausted { color });
    }
    Ok(moves)
}

/// Iteratively deepen from depth 1 to `limits.max_depth` and return the
/// best move of the deepest completed depth.
///
/// The board is restored before returning. If not even depth 1 completes
/// a uniformly random legal move is returned, flagged as a fallback.
pub fn search(
    board: &mut Board,
    state: &mut SearchState,
    color: Color,
    limits: SearchLimits,
) -> Result<SearchOutcome, SearchError> {
    let moves = root_moves(board, color)?;
    state.new_search();

    let start = Instant::now();
    let deadline = limits.time_limit.map(|limit| start + limit);
    let mut ctx = SearchContext::new(board, state, start, deadline);
    let best = ctx.iterative_deepening(limits.max_depth, &moves);
    let stats = ctx.stats();
    state.stats = stats;

    let outcome = match best {
        Some((best_move, score)) => SearchOutcome {
            best_move,
            score,
            depth: stats.completed_depth,
            fallback: false,
            stats,
            elapsed: start.elapsed(),
        },
        None => {
            let pick = moves.as_slice().choose(&mut state.rng).copied();
            let best_move = pick.ok_or(SearchError::SearchExhausted { color })?;
            warn!(
                "no search depth completed for {color} in {:?}; playing random move {best_move}",
                start.elapsed()
            );
            SearchOutcome {
                best_move,
                score: 0,
                depth: 0,
                fallback: true,
                stats,
                elapsed: start.elapsed(),
            }
        }
    };

    info!(
        "{color} plays {} (score {}, depth {}, nodes {}, {:?})",
        outcome.best_move,
        outcome.score,
        outcome.depth,
        outcome.stats.nodes + outcome.stats.qnodes,
        outcome.elapsed
    );
    Ok(outcome)
}

/// Search exactly `depth` plies with a full window, without iterative
/// deepening, a deadline or a node limit.
pub fn search_depth(
    board: &mut Board,
    state: &mut SearchState,
    color: Color,
    depth: u32,
) -> Result<SearchOutcome, SearchError> {
    let moves = root_moves(board, color)?;
    state.new_search();

    let start = Instant::now();
    let mut ctx = SearchContext::new(board, state, start, None);
    ctx.node_limit = 0;
    let ordered = ctx.order_root(&moves);
    let result = ctx.search_root(depth.max(1), -INFINITY, INFINITY, &ordered);
    let mut stats = ctx.stats();
    let (best_move, score) = result.ok_or(SearchError::SearchExhausted { color })?;
    stats.completed_depth = depth.max(1);
    state.stats = stats;

    Ok(SearchOutcome {
        best_move,
        score,
        depth: stats.completed_depth,
        fallback: false,
        stats,
        elapsed: start.elapsed(),
    })
}
