//! Game-over detection tests.

use super::position;
use crate::board::{Board, Color};

#[test]
fn test_start_position_not_over() {
    let board = Board::new();
    assert_eq!(board.is_game_over(Color::White), None);
    assert_eq!(board.is_game_over(Color::Black), None);
}

#[test]
fn test_promotion_wins() {
    let board = position("Setup Wa8 Bh7 Bc5", Color::Black);
    assert_eq!(board.is_game_over(Color::Black), Some(Color::White));

    let board = position("Setup Wa2 Bh1", Color::White);
    assert_eq!(board.is_game_over(Color::White), Some(Color::Black));
}

#[test]
fn test_no_pawns_loses() {
    let board = position("Setup We2", Color::Black);
    assert_eq!(board.is_game_over(Color::Black), Some(Color::White));
    assert_eq!(board.is_game_over(Color::White), Some(Color::White));

    let board = position("Setup Bd7", Color::White);
    assert_eq!(board.is_game_over(Color::White), Some(Color::Black));
}

#[test]
fn test_no_moves_loses_for_side_to_move() {
    // Black is frozen; White still has a free pawn
    let board = position("Setup We4 Be5 Wa2", Color::Black);
    assert_eq!(board.is_game_over(Color::Black), Some(Color::White));
    assert_eq!(board.is_game_over(Color::White), None);

    let board = position("Setup We4 Be5", Color::White);
    assert_eq!(board.is_game_over(Color::White), Some(Color::Black));
    assert_eq!(board.is_game_over(Color::Black), Some(Color::White));
}

#[test]
fn test_en_passant_counts_as_a_move() {
    // e4 is blocked by e3, only e4xd3 en passant remains
    let mut board = position("Setup Wd2 We3 Be4", Color::White);
    board.apply_move("d2d4".parse().expect("notation"), Color::White).expect("legal");
    assert!(board.has_moves(Color::Black));
    assert_eq!(board.is_game_over(Color::Black), None);
}

#[test]
fn test_white_promotion_checked_first() {
    // Both sides on their last row: White is checked first
    let board = position("Setup Wd8 Bc1", Color::Black);
    assert_eq!(board.is_game_over(Color::Black), Some(Color::White));
}
