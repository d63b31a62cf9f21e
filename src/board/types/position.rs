//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A board coordinate as a 1-indexed (file, rank) pair.
///
/// File 1 is the a-file, rank 1 is White's back rank. Positions are plain
/// values: they are never mutated, only replaced. Components are `i8` so
/// displacement arithmetic stays within the type; a position built by hand
/// may lie outside the board, which `in_bounds` reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Column letter, a = 1, b = 2, ...
    pub file: i8,
    /// Row number, starting at 1 on White's side
    pub rank: i8,
}

impl Position {
    /// Create a position without bounds checking
    #[inline]
    #[must_use]
    pub const fn new(file: i8, rank: i8) -> Self {
        Position { file, rank }
    }

    /// Whether both coordinates lie on the board
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", (b'a' + self.file as u8 - 1) as char, self.rank)
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

impl TryFrom<(i8, i8)> for Position {
    type Error = SquareError;

    fn try_from((file, rank): (i8, i8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&file) {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if !(1..=8).contains(&rank) {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Position { file, rank })
    }
}

impl FromStr for Position {
    type Err = SquareError;

    /// Parse a square label such as `e4` (lowercase file letter, then rank)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?;
        let rank_char = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }

        let file = match file_char {
            'a'..='h' => file_char as i8 - 'a' as i8 + 1,
            _ => return Err(invalid()),
        };
        let rank = match rank_char {
            '1'..='8' => rank_char as i8 - '0' as i8,
            _ => return Err(invalid()),
        };

        Ok(Position { file, rank })
    }
}
