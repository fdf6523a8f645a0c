//! JSON encoding of the public value types (requires `--features serde`).
#![cfg(feature = "serde")]

use pawn_chess::board::{Color, Move, Square};

#[test]
fn color_square_and_move_survive_json() {
    let mv = Move::new(Square(6, 4), Square(4, 4));
    let json = serde_json::to_string(&(Color::White, Square(6, 4), mv)).expect("serialize");
    let back: (Color, Square, Move) = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, (Color::White, Square(6, 4), mv));
}

#[test]
fn color_encodes_as_its_name() {
    assert_eq!(serde_json::to_string(&Color::Black).expect("serialize"), "\"Black\"");
    assert_eq!(serde_json::to_string(&Square(1, 3)).expect("serialize"), "[1,3]");
}
