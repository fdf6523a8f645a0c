//! Move generation and perft tests.

use super::{position, sq};
use crate::board::{Board, Color, Move};

fn mv(notation: &str) -> Move {
    notation.parse().expect("valid move")
}

#[test]
fn test_start_position_moves() {
    let board = Board::new();
    let white = board.generate_moves(Color::White);
    assert_eq!(white.len(), 16);
    assert!(white.contains(mv("a2a3")));
    assert!(white.contains(mv("a2a4")));
    assert!(white.contains(mv("h2h4")));
    assert!(white.iter().all(|m| !m.is_diagonal()));

    let black = board.generate_moves(Color::Black);
    assert_eq!(black.len(), 16);
    assert!(black.contains(mv("e7e5")));
    assert!(board.generate_captures(Color::White).is_empty());
}

#[test]
fn test_generation_order_is_push_double_then_captures() {
    let board = position("Setup We2 Bd3 Bf3", Color::White);
    let moves: Vec<String> = board
        .generate_moves(Color::White)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(moves, ["e2e3", "e2e4", "e2d3", "e2f3"]);
}

#[test]
fn test_perft_start_position() {
    let mut board = Board::new();
    assert_eq!(board.perft(0), 1);
    assert_eq!(board.perft(1), 16);
    assert_eq!(board.perft(2), 256);
    assert_eq!(board, Board::new());
}

#[test]
fn test_perft_counts_finished_games_once() {
    // White to move, black has nothing left: already decided
    let mut board = position("Setup We4", Color::White);
    assert_eq!(board.perft(3), 1);
}

#[test]
fn test_double_push_only_from_home_row() {
    let board = position("Setup We3 Bh7", Color::White);
    let moves = board.generate_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert!(moves.contains(mv("e3e4")));
}

#[test]
fn test_no_capture_wraparound() {
    // Unmasked shifts would wrap a4 onto h6 and h4 onto a4
    let board = position("Setup Wa4 Bh6", Color::White);
    assert!(board.generate_captures(Color::White).is_empty());
    assert!(board.generate_captures(Color::Black).is_empty());

    let board = position("Setup Wh4 Ba4", Color::Black);
    assert!(board.generate_captures(Color::White).is_empty());
    assert!(board.generate_captures(Color::Black).is_empty());
}

#[test]
fn test_en_passant_requires_adjacent_pawn() {
    let mut board = position("Setup We5 Wa5 Bd7", Color::Black);
    board.make_move(sq("d7"), sq("d5"), Color::Black).expect("legal");

    let captures = board.generate_captures(Color::White);
    assert_eq!(captures.len(), 1);
    assert!(captures.contains(mv("e5d6")));
    assert!(!board.generate_moves(Color::White).contains(mv("a5b6")));
}

#[test]
fn test_en_passant_for_black() {
    let mut board = position("Setup Wc2 Bd4", Color::White);
    board.make_move(sq("c2"), sq("c4"), Color::White).expect("legal");
    assert_eq!(board.en_passant_target(), Some(sq("c3")));
    assert!(board.generate_moves(Color::Black).contains(mv("d4c3")));
    assert!(board.is_pseudo_legal(mv("d4c3"), Color::Black));
}

#[test]
fn test_captures_are_subset_of_moves() {
    let board = position("Setup Wc4 We4 Wg2 Bd5 Bf5 Bh3", Color::White);
    let moves = board.generate_moves(Color::White);
    let captures = board.generate_captures(Color::White);
    assert_eq!(captures.len(), 4);
    assert!(captures.iter().all(|&c| moves.contains(c)));
    assert!(captures.iter().all(|c| c.is_diagonal()));
}

#[test]
fn test_has_moves_when_blocked() {
    let board = position("Setup We4 Be5", Color::White);
    assert!(!board.has_moves(Color::White));
    assert!(!board.has_moves(Color::Black));
    assert!(board.generate_moves(Color::White).is_empty());

    let board = position("Setup We4 Be5 Bd5", Color::White);
    assert!(board.has_moves(Color::White));
    assert!(board.has_moves(Color::Black));
}

#[test]
fn test_has_winning_move() {
    let board = position("Setup Wb7 Bh6", Color::White);
    assert!(board.has_winning_move(Color::White));
    assert!(!board.has_winning_move(Color::Black));

    // Blocked push, but a capture still reaches the last row
    let board = position("Setup Wb7 Bb8 Ba8", Color::White);
    assert!(board.has_winning_move(Color::White));

    let board = position("Setup Wb7 Bb8", Color::White);
    assert!(!board.has_winning_move(Color::White));

    let board = position("Setup Wa5 Bg2", Color::Black);
    assert!(board.has_winning_move(Color::Black));
}

#[test]
fn test_is_pseudo_legal() {
    let board = Board::new();
    assert!(board.is_pseudo_legal(mv("e2e4"), Color::White));
    assert!(!board.is_pseudo_legal(mv("e2e4"), Color::Black));
    assert!(!board.is_pseudo_legal(mv("e3e4"), Color::White));
    assert!(!board.is_pseudo_legal(mv("e2f3"), Color::White));
}
