//! Result codes returned by [`Game::play`](crate::board::Game::play).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The outcome of one attempted move.
///
/// Variants are listed in order of precedence: when several conditions
/// apply to the same move, the first applicable one is returned. The
/// precedence is enforced by the executor's sequential checks, not by
/// comparing variants.
///
/// Only [`Capture`](Outcome::Capture) and [`Ok`](Outcome::Ok) mutate the
/// game; every other outcome leaves the board and the side to move exactly
/// as they were, so the same player may try again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The move was legal and resulted in a capture
    Capture,
    /// The move was legal and was performed
    Ok,
    /// There is no piece on the `from` square
    NoPiece,
    /// The piece on `from` does not belong to the side to move
    BadPiece,
    /// This move is not available for this piece
    BadMove,
    /// Another piece is in the way
    Blocked,
    /// The en passant capture window has closed
    Lapsed,
    /// One of the castling pieces has already moved
    HasMoved,
    /// The player is in check and the move does not resolve it
    InCheck,
    /// The move would place the player's own king in check
    WouldCheck,
    /// Promotion to a pawn or king was attempted
    BadPromote,
}

impl Outcome {
    /// True for the two outcomes that actually performed a move
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Outcome::Capture | Outcome::Ok)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::Capture => "move performed, capture",
            Outcome::Ok => "move performed",
            Outcome::NoPiece => "no piece on the source square",
            Outcome::BadPiece => "piece belongs to the opponent",
            Outcome::BadMove => "move not available for this piece",
            Outcome::Blocked => "another piece is in the way",
            Outcome::Lapsed => "en passant window has closed",
            Outcome::HasMoved => "castling piece has already moved",
            Outcome::InCheck => "player is in check",
            Outcome::WouldCheck => "move would leave the king in check",
            Outcome::BadPromote => "invalid promotion target",
        };
        f.write_str(text)
    }
}
