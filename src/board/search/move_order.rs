//! Move ordering utilities for search.
//!
//! Ordering only changes which subtrees alpha-beta visits first, never the
//! result. Sorting is stable, so equal scores keep generation order.

use super::constants::{
    CAPTURE_SCORE, PROMOTION_SCORE, Q_EN_PASSANT_SCORE, Q_PROMOTION_SCORE, TENSION_SCORE,
};
use crate::board::{Board, Color, Move, MoveList, ScoredMoveList};

/// Heuristic score of a move for the main search.
#[must_use]
pub fn move_score(board: &Board, mv: Move, color: Color) -> i32 {
    let to = mv.to();
    let mut score = 0;

    if to.row() == color.promotion_row() {
        score += PROMOTION_SCORE;
    }
    if mv.is_diagonal() {
        score += CAPTURE_SCORE;
    }
    score += match color {
        Color::White => 7 - to.row() as i32,
        Color::Black => to.row() as i32,
    };

    let enemies = board.pawns(color.opponent());
    let tension = [-1, 1]
        .into_iter()
        .filter_map(|d_col| to.offset(color.pawn_direction(), d_col))
        .any(|sq| enemies.contains(sq));
    if tension {
        score += TENSION_SCORE;
    }
    score
}

/// Sort `moves` best-first for the main search.
#[must_use]
pub fn order_moves(board: &Board, moves: &MoveList, color: Color) -> MoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, move_score(board, mv, color));
    }
    scored.sort_by_score_desc();
    scored.into_moves()
}

/// Sort captures for quiescence: promotions, then en passant, then the rest.
#[must_use]
pub fn order_captures(board: &Board, moves: &MoveList, color: Color) -> MoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        let score = if mv.to().row() == color.promotion_row() {
            Q_PROMOTION_SCORE
        } else if board.is_empty(mv.to()) {
            Q_EN_PASSANT_SCORE
        } else {
            0
        };
        scored.push(mv, score);
    }
    scored.sort_by_score_desc();
    scored.into_moves()
}
