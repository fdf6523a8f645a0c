//! Search constants and parameters.
//!
//! Contains the fixed scores and tuned defaults used by the alpha-beta search.

use crate::board::MAX_PLY;

// ============================================================================
// SCORES
// ============================================================================

/// Score of a won game at the root. A win found `n` plies deep scores
/// `CHECKMATE - n`, so shorter wins are preferred.
pub const CHECKMATE: i32 = 1_000_000;

/// Window bound wider than any reachable score
pub const INFINITY: i32 = 2_000_000;

/// Scores with absolute value >= this are win/loss scores
pub const MATE_THRESHOLD: i32 = CHECKMATE - MAX_PLY as i32;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Default cap on capture-only plies below the horizon
pub const MAX_QSEARCH_DEPTH: u32 = 2;

/// Poll the clock once per this many nodes
pub const NODE_CHECK_INTERVAL: u64 = 1024;

/// Default half-width of the aspiration window
pub const ASPIRATION_WINDOW: i32 = 50;

/// Aspiration windows start at this depth
pub const ASPIRATION_MIN_DEPTH: u32 = 5;

/// Largest eval swing one capture can produce; captures that cannot lift
/// stand-pat to alpha even with this bonus are skipped.
pub const DELTA_MARGIN: i32 = 70;

/// Stop deepening when a win or loss this close to `CHECKMATE` is proven
pub const MATE_MARGIN: i32 = 1000;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores = tried earlier.

/// Move reaching the promotion row
pub const PROMOTION_SCORE: i32 = 10_000;

/// Any capture, en passant included
pub const CAPTURE_SCORE: i32 = 500;

/// Destination has an enemy pawn diagonally ahead
pub const TENSION_SCORE: i32 = 200;

/// Quiescence: capture landing on the promotion row
pub const Q_PROMOTION_SCORE: i32 = 1000;

/// Quiescence: en passant capture
pub const Q_EN_PASSANT_SCORE: i32 = 500;
