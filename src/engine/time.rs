//! Per-move time budgeting from the remaining game clock.

use std::time::Duration;

/// Moves-to-go estimate at the start of a game
pub const DEFAULT_MOVES_TO_GO: u32 = 20;

/// Minimum moves-to-go estimate to avoid over-thinking late in the game
const MIN_MOVES_TO_GO: u32 = 8;

/// Configuration for time management calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeConfig {
    /// Reserved per move for I/O latency
    pub move_overhead: Duration,
    /// Never plan less than this for one move
    pub min_move_time: Duration,
    /// Estimated moves left when the game starts
    pub moves_to_go: u32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            move_overhead: Duration::from_millis(50),
            min_move_time: Duration::from_millis(20),
            moves_to_go: DEFAULT_MOVES_TO_GO,
        }
    }
}

impl TimeConfig {
    /// Moves still expected after `moves_played` of our own moves.
    #[must_use]
    pub fn moves_to_go(&self, moves_played: u32) -> u32 {
        self.moves_to_go
            .saturating_sub(moves_played)
            .max(MIN_MOVES_TO_GO)
    }

    /// Time to spend on the next move.
    ///
    /// `remaining / moves_to_go`, clamped to `[min_move_time, cap]` and never
    /// more than half of what is left after the overhead.
    #[must_use]
    pub fn move_time(&self, remaining: Duration, moves_played: u32, cap: Duration) -> Duration {
        let usable = remaining.saturating_sub(self.move_overhead);
        let share = usable / self.moves_to_go(moves_played);
        let budget = share.max(self.min_move_time).min(cap);
        budget.min(usable / 2).max(Duration::from_millis(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_remaining_time() {
        let config = TimeConfig::default();
        let t = config.move_time(Duration::from_secs(60), 0, Duration::from_secs(10));
        // (60s - 50ms) / 20
        assert_eq!(t, Duration::from_millis(2997) + Duration::from_micros(500));
    }

    #[test]
    fn capped_by_limit() {
        let config = TimeConfig::default();
        let t = config.move_time(Duration::from_secs(600), 0, Duration::from_secs(1));
        assert_eq!(t, Duration::from_secs(1));
    }

    #[test]
    fn moves_to_go_has_a_floor() {
        let config = TimeConfig::default();
        assert_eq!(config.moves_to_go(0), 20);
        assert_eq!(config.moves_to_go(15), 8);
        assert_eq!(config.moves_to_go(100), 8);
    }

    #[test]
    fn low_clock_never_spends_everything() {
        let config = TimeConfig::default();
        let t = config.move_time(Duration::from_millis(60), 3, Duration::from_secs(1));
        assert!(t <= Duration::from_millis(5));
        assert!(t >= Duration::from_millis(1));
        let t = config.move_time(Duration::ZERO, 3, Duration::from_secs(1));
        assert_eq!(t, Duration::from_millis(1));
    }
}
