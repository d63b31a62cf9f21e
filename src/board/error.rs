//! Error types for board coordinate handling.

use std::fmt;

/// Error type for square parsing and conversion failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// File out of bounds (must be 1-8)
    FileOutOfBounds { file: i8 },
    /// Rank out of bounds (must be 1-8)
    RankOutOfBounds { rank: i8 },
    /// Invalid algebraic square label
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 1-8)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 1-8)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square label '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
