//! Error types for board operations.

use thiserror::Error;

use super::types::{Color, Square};

/// Error type for setup-string parsing failures.
///
/// A setup is validated in full before anything is applied, so the board is
/// never left half-configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Token is not exactly three characters (`<W|B><file><rank>`)
    #[error("setup token '{token}' must be three characters")]
    InvalidToken { token: String },
    #[error("invalid color '{found}' in setup token '{token}', expected 'W' or 'B'")]
    InvalidColor { token: String, found: char },
    #[error("invalid file '{found}' in setup token '{token}', expected a-h")]
    InvalidFile { token: String, found: char },
    #[error("invalid rank '{found}' in setup token '{token}', expected 1-8")]
    InvalidRank { token: String, found: char },
    /// The same square was named twice
    #[error("square {square} is named more than once in setup")]
    DuplicateSquare { square: Square },
}

/// Error type for rejected moves. The board is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("no {color} pawn on {square}")]
    NoPawn { color: Color, square: Square },
    #[error("{color} is not on move")]
    OutOfTurn { color: Color },
    #[error("{color} pawn cannot move from {from} to {to}")]
    BadGeometry { color: Color, from: Square, to: Square },
}

/// Error type for square and move notation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// Move string has invalid length (must be 4 characters)
    #[error("move must be 4 characters, found {len}")]
    InvalidLength { len: usize },
    #[error("invalid square notation '{notation}'")]
    InvalidSquare { notation: String },
    #[error("coordinates ({row}, {col}) are off the board")]
    OutOfBounds { row: usize, col: usize },
}

/// Error type for search requests that cannot produce a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The side to move has no legal move at the root
    #[error("{color} has no legal move")]
    SearchExhausted { color: Color },
    #[error("search requested for {requested} but {to_move} is on move")]
    NotSideToMove { requested: Color, to_move: Color },
}
