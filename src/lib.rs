pub mod board;
pub mod engine;
pub mod protocol;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Color, Move, Square};
pub use engine::{Engine, EngineConfig};
pub use tt::TranspositionTable;
