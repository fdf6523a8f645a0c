//! Make/unmake move tests.

use super::{position, sq};
use crate::board::{Board, Color, IllegalMove, Move, Square};

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut board = Board::new();
    board
        .make_move(sq("e2"), sq("e4"), Color::White)
        .expect("legal");

    assert_eq!(board.en_passant_target(), Some(sq("e3")));
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.last_move(), Some(Move::new(sq("e2"), sq("e4"))));
    assert_eq!(board.pawn_at(sq("e4")), Some(Color::White));
    assert!(board.is_empty(sq("e2")));
    assert_eq!(board.hash(), board.calculate_hash());
}

#[test]
fn test_single_push_clears_en_passant_target() {
    let mut board = Board::new();
    board.make_move(sq("e2"), sq("e4"), Color::White).expect("legal");
    board.make_move(sq("a7"), sq("a6"), Color::Black).expect("legal");
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.hash(), board.calculate_hash());
}

#[test]
fn test_en_passant_make_unmake() {
    let mut board = position("Setup We5 Bd7", Color::Black);
    board.make_move(sq("d7"), sq("d5"), Color::Black).expect("legal");
    assert_eq!(board.en_passant_target(), Some(sq("d6")));

    let before = board.clone();
    let record = board
        .make_move(sq("e5"), sq("d6"), Color::White)
        .expect("en passant is legal");
    assert_eq!(board.pawn_at(sq("d6")), Some(Color::White));
    assert!(board.is_empty(sq("d5")));
    assert!(board.is_empty(sq("e5")));
    assert_eq!(board.pawn_count(Color::Black), 0);
    assert_eq!(board.hash(), board.calculate_hash());

    board.undo_move(record);
    assert_eq!(board, before);
}

#[test]
fn test_capture_make_unmake() {
    let mut board = position("Setup We4 Bd5 Bh7", Color::White);
    let before = board.clone();
    let record = board.make_move(sq("e4"), sq("d5"), Color::White).expect("legal");
    assert_eq!(board.pawn_count(Color::Black), 1);
    assert_eq!(board.pawn_at(sq("d5")), Some(Color::White));
    board.undo_move(record);
    assert_eq!(board, before);
    assert_eq!(board.hash(), before.hash());
}

#[test]
fn test_en_passant_window_lasts_one_ply() {
    let mut board = position("Setup We5 Wa2 Bd7 Bh7", Color::Black);
    board.make_move(sq("d7"), sq("d5"), Color::Black).expect("legal");
    board.make_move(sq("a2"), sq("a3"), Color::White).expect("legal");
    board.make_move(sq("h7"), sq("h6"), Color::Black).expect("legal");

    assert_eq!(board.en_passant_target(), None);
    assert!(!board
        .generate_moves(Color::White)
        .contains(Move::new(sq("e5"), sq("d6"))));
    assert!(matches!(
        board.make_move(sq("e5"), sq("d6"), Color::White),
        Err(IllegalMove::BadGeometry { .. })
    ));
}

#[test]
fn test_out_of_turn_rejected() {
    let mut board = Board::new();
    let before = board.clone();
    assert_eq!(
        board.make_move(sq("e7"), sq("e5"), Color::Black),
        Err(IllegalMove::OutOfTurn {
            color: Color::Black
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_missing_pawn_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.make_move(sq("e3"), sq("e4"), Color::White),
        Err(IllegalMove::NoPawn {
            color: Color::White,
            square: sq("e3")
        })
    );
    // An enemy pawn on the start square is not ours to move
    assert!(matches!(
        board.make_move(sq("e7"), sq("e6"), Color::White),
        Err(IllegalMove::NoPawn { .. })
    ));
}

#[test]
fn test_bad_geometry_rejected() {
    let mut board = Board::new();
    let before = board.clone();
    for (from, to) in [("e2", "e5"), ("e2", "d3"), ("e2", "e2"), ("e2", "f2")] {
        assert!(
            matches!(
                board.make_move(sq(from), sq(to), Color::White),
                Err(IllegalMove::BadGeometry { .. })
            ),
            "{from}{to} should be rejected"
        );
    }
    assert_eq!(board, before);

    let mut blocked = position("Setup We2 Be3", Color::White);
    assert!(blocked.make_move(sq("e2"), sq("e4"), Color::White).is_err());
    assert!(blocked.make_move(sq("e2"), sq("e3"), Color::White).is_err());

    let mut occupied_target = position("Setup We2 Be4", Color::White);
    assert!(occupied_target.make_move(sq("e2"), sq("e4"), Color::White).is_err());
    assert!(occupied_target.make_move(sq("e2"), sq("e3"), Color::White).is_ok());
}

#[test]
fn test_off_board_squares_rejected() {
    let mut board = Board::new();
    let before = board.clone();
    for (from, to) in [
        (Square(8, 0), Square(7, 0)),
        (Square(6, 4), Square(6, 9)),
        (Square(9, 9), sq("e4")),
    ] {
        assert_eq!(
            board.make_move(from, to, Color::White),
            Err(IllegalMove::BadGeometry {
                color: Color::White,
                from,
                to
            })
        );
    }
    assert_eq!(board, before);
}

#[test]
fn test_backward_move_rejected() {
    let mut board = position("Setup We4 Bd5", Color::White);
    assert!(board.make_move(sq("e4"), sq("e3"), Color::White).is_err());
    assert!(board.make_move(sq("e4"), sq("d3"), Color::White).is_err());
}

#[test]
fn test_apply_move() {
    let mut board = Board::new();
    let mv: Move = "g2g3".parse().expect("notation");
    board.apply_move(mv, Color::White).expect("legal");
    assert_eq!(board.pawn_at(sq("g3")), Some(Color::White));
    assert_eq!(board.current_player(), Color::Black);
    assert!(board.apply_move(mv, Color::Black).is_err());
}

#[test]
fn test_undo_restores_start_position() {
    let mut board = Board::new();
    let start = board.clone();
    let mut records = Vec::new();
    for (from, to, color) in [
        ("d2", "d4", Color::White),
        ("e7", "e5", Color::Black),
        ("d4", "e5", Color::White),
        ("f7", "f5", Color::Black),
        ("e5", "f6", Color::White),
    ] {
        records.push(board.make_move(sq(from), sq(to), color).expect("legal"));
        assert_eq!(board.hash(), board.calculate_hash());
    }
    assert_eq!(board.pawn_count(Color::Black), 6);
    while let Some(record) = records.pop() {
        board.undo_move(record);
    }
    assert_eq!(board, start);
}
