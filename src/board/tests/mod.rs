//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Move application, validation and undo
//! - `movegen.rs` - Move generation and perft counts
//! - `terminal.rs` - Game-over detection
//! - `eval.rs` - Static evaluation terms
//! - `setup.rs` - Setup strings and board display
//! - `search.rs` - Small tactical search positions
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod movegen;
mod terminal;

use crate::board::{Board, Color};

/// Parse a setup string and hand the move to `to_move`.
pub(super) fn position(setup: &str, to_move: Color) -> Board {
    let mut board = Board::from_setup(setup).expect("valid setup");
    board.set_side_to_move(to_move);
    board
}

/// Square from algebraic notation, e.g. `sq("e2")`.
pub(super) fn sq(name: &str) -> crate::board::Square {
    name.parse().expect("valid square")
}
