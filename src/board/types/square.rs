//! Square types and utilities.
//!
//! Squares are addressed top-down: row 0 is rank 8 and row 7 is rank 1, so the
//! bit index of a square is `row * 8 + col`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::NotationError;

/// Index into a 64-square bitboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SquareIdx(pub u8);

impl SquareIdx {
    #[inline]
    #[must_use]
    pub(crate) const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// A square on the board, represented as (row, col).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Build a square from signed coordinates, `None` when off the board.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Row 0-7, where 0 = rank 8
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Column 0-7, where 0 = file a
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// Flip the square vertically (e.g., a2 <-> a7)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7 - self.0, self.1)
    }

    /// Get the square's bit index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from a bit index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> SquareIdx {
        SquareIdx((self.0 * 8 + self.1) as u8)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_idx(idx: SquareIdx) -> Self {
        Square::from_index(idx.0 as usize)
    }

    /// File letter, `'a'..='h'`
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a' + self.1 as u8) as char
    }

    /// Rank digit, `'1'..='8'`
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'0' + (8 - self.0) as u8) as char
    }

    /// Parse a file letter and rank digit into a square.
    pub(crate) fn from_chars(file: char, rank: char) -> Option<Self> {
        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return None,
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return None,
        };
        Some(Square(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = NotationError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(NotationError::OutOfBounds { row, col })
    }
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(NotationError::InvalidSquare {
                notation: s.to_string(),
            });
        }
        Square::from_chars(chars[0], chars[1]).ok_or_else(|| NotationError::InvalidSquare {
            notation: s.to_string(),
        })
    }
}
