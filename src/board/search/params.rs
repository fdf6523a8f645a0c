use super::constants::{
    ASPIRATION_MIN_DEPTH, ASPIRATION_WINDOW, DELTA_MARGIN, MATE_MARGIN, MAX_QSEARCH_DEPTH,
};

/// Tunable search numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub aspiration_window: i32,
    pub aspiration_min_depth: u32,
    pub max_qsearch_depth: u32,
    pub delta_margin: i32,
    pub mate_margin: i32,
    /// 0 = unlimited
    pub node_limit: u64,
    /// Also poll the deadline inside a depth and discard the unfinished one
    pub abort_on_deadline: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            aspiration_window: ASPIRATION_WINDOW,
            aspiration_min_depth: ASPIRATION_MIN_DEPTH,
            max_qsearch_depth: MAX_QSEARCH_DEPTH,
            delta_margin: DELTA_MARGIN,
            mate_margin: MATE_MARGIN,
            node_limit: 0,
            abort_on_deadline: false,
        }
    }
}

/// Switches for the optional parts of the search. All on by default;
/// turning everything off leaves plain fixed-order alpha-beta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchFeatures {
    pub transposition_table: bool,
    pub quiescence: bool,
    pub pvs: bool,
    pub aspiration: bool,
    pub move_ordering: bool,
}

impl SearchFeatures {
    /// Everything off.
    #[must_use]
    pub const fn plain() -> Self {
        SearchFeatures {
            transposition_table: false,
            quiescence: false,
            pvs: false,
            aspiration: false,
            move_ordering: false,
        }
    }
}

impl Default for SearchFeatures {
    fn default() -> Self {
        SearchFeatures {
            transposition_table: true,
            quiescence: true,
            pvs: true,
            aspiration: true,
            move_ordering: true,
        }
    }
}
