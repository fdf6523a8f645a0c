//! Benchmarks for pawn engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pawn_chess::board::{search_depth, Board, Color, SearchState};
use pawn_chess::engine::DEFAULT_TT_MB;

const MIDGAME: &str = "Setup Wa2 Wb3 Wc4 We4 Wf2 Wg3 Wh2 Ba6 Bb7 Bc5 Bd6 Bf7 Bg6 Bh7";
const RACE: &str = "Setup Wa4 Wc3 Wf5 Bb5 Bg6 Bh4";

fn setup(s: &str) -> Board {
    Board::from_setup(s).expect("valid setup")
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut board = Board::new();

    for depth in 1..=5 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    // Crowded middlegame with plenty of captures
    let mut midgame = setup(MIDGAME);

    for depth in 1..=4 {
        group.bench_with_input(BenchmarkId::new("midgame", depth), &depth, |b, &depth| {
            b.iter(|| midgame.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.generate_moves(Color::White)))
    });

    let midgame = setup(MIDGAME);
    group.bench_function("midgame", |b| {
        b.iter(|| black_box(midgame.generate_moves(Color::White)))
    });
    group.bench_function("midgame_captures", |b| {
        b.iter(|| black_box(midgame.generate_captures(Color::White)))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for depth in [4, 6, 8] {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::new();
                let mut state = SearchState::new(DEFAULT_TT_MB, 0);
                search_depth(&mut board, &mut state, Color::White, depth)
            })
        });
    }

    for depth in [4, 6] {
        group.bench_with_input(BenchmarkId::new("race", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = setup(RACE);
                let mut state = SearchState::new(DEFAULT_TT_MB, 0);
                search_depth(&mut board, &mut state, Color::White, depth)
            })
        });
    }

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let positions = [
        ("startpos", Board::new()),
        ("midgame", setup(MIDGAME)),
        ("race", setup(RACE)),
    ];

    for (name, board) in positions {
        group.bench_with_input(BenchmarkId::new("position", name), &board, |b, board| {
            b.iter(|| black_box(board.evaluate(Color::White)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_search,
    bench_eval
);
criterion_main!(benches);
