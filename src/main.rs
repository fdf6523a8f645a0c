//! Pawn chess player speaking the game server protocol on stdin/stdout.
//!
//! Logs go to stderr; set `RUST_LOG` to change the level (default `info`).

use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::error;

use pawn_chess::board::SearchFeatures;
use pawn_chess::engine::{Engine, EngineConfig, DEFAULT_DEPTH_CAP, DEFAULT_MAX_DEPTH, DEFAULT_TT_MB};
use pawn_chess::protocol::Session;
use pawn_chess::zobrist::DEFAULT_ZOBRIST_SEED;

#[derive(Parser)]
#[command(name = "pawn_chess")]
#[command(about = "Pawns-only chess engine", version)]
struct Cli {
    /// Nominal search depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    depth: u32,
    /// Upper bound on the dynamically extended depth
    #[arg(long, default_value_t = DEFAULT_DEPTH_CAP)]
    depth_cap: u32,
    /// Grow the depth by one per move played
    #[arg(long)]
    dynamic_depth: bool,
    /// Per-move time limit in milliseconds
    #[arg(long, default_value_t = 1000)]
    time_ms: u64,
    /// Seed for the fallback random move
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Seed for the Zobrist keys
    #[arg(long, default_value_t = DEFAULT_ZOBRIST_SEED)]
    zobrist_seed: u64,
    /// Transposition table size in MB
    #[arg(long, default_value_t = DEFAULT_TT_MB)]
    hash_mb: usize,
    /// Keep the transposition table between moves
    #[arg(long)]
    keep_hash: bool,
    #[arg(long)]
    no_quiescence: bool,
    #[arg(long)]
    no_aspiration: bool,
    #[arg(long)]
    no_pvs: bool,
    /// Print perft node counts from the starting position up to this depth and exit
    #[arg(long)]
    perft: Option<usize>,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let features = SearchFeatures {
            quiescence: !self.no_quiescence,
            aspiration: !self.no_aspiration,
            pvs: !self.no_pvs,
            ..SearchFeatures::default()
        };
        EngineConfig::default()
            .with_max_depth(self.depth)
            .with_depth_cap(self.depth_cap)
            .with_dynamic_depth(self.dynamic_depth)
            .with_time_limit(Duration::from_millis(self.time_ms))
            .with_seed(self.seed)
            .with_zobrist_seed(self.zobrist_seed)
            .with_tt_mb(self.hash_mb)
            .with_clear_tt_each_search(!self.keep_hash)
            .with_features(features)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let engine = Engine::new(cli.engine_config());

    if let Some(depth) = cli.perft {
        let mut board = engine.new_board();
        for d in 1..=depth {
            println!("perft {d}: {}", board.perft(d));
        }
        return ExitCode::SUCCESS;
    }

    let mut session = Session::new(engine);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match session.run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
