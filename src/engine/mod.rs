//! Engine configuration and the move-choosing entry point used by drivers.
//!
//! An [`Engine`] owns its transposition table, random source and Zobrist
//! key set. Two engines never share search state.

pub mod time;

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::board::search::{
    self, SearchFeatures, SearchLimits, SearchOutcome, SearchParams, SearchState,
};
use crate::board::{Board, Color, Move, SearchError};
use crate::zobrist::{ZobristKeys, DEFAULT_ZOBRIST_SEED};

pub use time::{TimeConfig, DEFAULT_MOVES_TO_GO};

/// Default transposition table size in MB
pub const DEFAULT_TT_MB: usize = 16;

/// Default nominal search depth
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// Hard ceiling on the dynamically extended depth
pub const DEFAULT_DEPTH_CAP: u32 = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_depth: u32,
    pub depth_cap: u32,
    /// Search `max_depth + moves_played` plies, capped at `depth_cap`
    pub dynamic_depth: bool,
    pub time_limit: Duration,
    /// Seed of the random source used for fallback moves
    pub seed: u64,
    pub zobrist_seed: u64,
    pub tt_mb: usize,
    pub clear_tt_each_search: bool,
    pub params: SearchParams,
    pub features: SearchFeatures,
    pub time: TimeConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            depth_cap: DEFAULT_DEPTH_CAP,
            dynamic_depth: false,
            time_limit: Duration::from_secs(1),
            seed: 0,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
            tt_mb: DEFAULT_TT_MB,
            clear_tt_each_search: true,
            params: SearchParams::default(),
            features: SearchFeatures::default(),
            time: TimeConfig::default(),
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_depth_cap(mut self, depth_cap: u32) -> Self {
        self.depth_cap = depth_cap;
        self
    }

    #[must_use]
    pub fn with_dynamic_depth(mut self, dynamic_depth: bool) -> Self {
        self.dynamic_depth = dynamic_depth;
        self
    }

    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_zobrist_seed(mut self, zobrist_seed: u64) -> Self {
        self.zobrist_seed = zobrist_seed;
        self
    }

    #[must_use]
    pub fn with_tt_mb(mut self, tt_mb: usize) -> Self {
        self.tt_mb = tt_mb;
        self
    }

    #[must_use]
    pub fn with_clear_tt_each_search(mut self, clear: bool) -> Self {
        self.clear_tt_each_search = clear;
        self
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

    /// Depth to search after `moves_played` of our own moves.
    #[must_use]
    pub fn effective_depth(&self, max_depth: u32, moves_played: u32) -> u32 {
        let depth = if self.dynamic_depth {
            max_depth.saturating_add(moves_played)
        } else {
            max_depth
        };
        depth.clamp(1, self.depth_cap.max(1))
    }
}

pub struct Engine {
    config: EngineConfig,
    state: SearchState,
    keys: Arc<ZobristKeys>,
    moves_played: u32,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let mut state = SearchState::new(config.tt_mb, config.seed)
            .with_params(config.params.clone())
            .with_features(config.features);
        state.clear_tt_each_search = config.clear_tt_each_search;
        let keys = if config.zobrist_seed == DEFAULT_ZOBRIST_SEED {
            ZobristKeys::shared_default()
        } else {
            Arc::new(ZobristKeys::new(config.zobrist_seed))
        };
        Engine {
            config,
            state,
            keys,
            moves_played: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Our own moves chosen so far this game.
    #[must_use]
    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Starting position hashed with this engine's keys.
    #[must_use]
    pub fn new_board(&self) -> Board {
        Board::new_with_keys(Arc::clone(&self.keys))
    }

    /// Forget the game: move count and table contents.
    pub fn new_game(&mut self) {
        self.moves_played = 0;
        self.state.reset_tables();
    }

    /// Pick a move for `color` within `time_limit`, searching at most
    /// `max_depth` plies (extended when dynamic depth is on).
    pub fn best_move(
        &mut self,
        board: &mut Board,
        max_depth: u32,
        color: Color,
        time_limit: Duration,
    ) -> Result<Move, SearchError> {
        self.search(board, max_depth, color, time_limit)
            .map(|outcome| outcome.best_move)
    }

    /// Like [`Engine::best_move`] but returns the full outcome.
    pub fn search(
        &mut self,
        board: &mut Board,
        max_depth: u32,
        color: Color,
        time_limit: Duration,
    ) -> Result<SearchOutcome, SearchError> {
        let depth = self.config.effective_depth(max_depth, self.moves_played);
        debug!("searching {color} to depth {depth} within {time_limit:?}");
        let outcome = search::search(
            board,
            &mut self.state,
            color,
            SearchLimits::new(depth, time_limit),
        )?;
        self.moves_played += 1;
        Ok(outcome)
    }

    /// Search with the configured depth and time limit.
    pub fn think(&mut self, board: &mut Board, color: Color) -> Result<SearchOutcome, SearchError> {
        let (depth, limit) = (self.config.max_depth, self.config.time_limit);
        self.search(board, depth, color, limit)
    }

    /// Time to spend on the next move given the clock.
    #[must_use]
    pub fn move_time(&self, remaining: Duration) -> Duration {
        self.config
            .time
            .move_time(remaining, self.moves_played, self.config.time_limit)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}
