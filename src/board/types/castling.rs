//! Per-side castling movement records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Records which castling pieces of one side have ever moved.
///
/// Each flag latches permanently the first time the piece leaves its home
/// square; nothing resets it, so a rook that wanders back to its corner is
/// still "moved". One record is kept per side, selected by an explicit
/// [`Color`](crate::board::Color) tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRecord {
    king_moved: bool,
    queenside_rook_moved: bool,
    kingside_rook_moved: bool,
}

impl CastlingRecord {
    /// Fresh record: nothing has moved yet
    #[must_use]
    pub const fn fresh() -> Self {
        CastlingRecord {
            king_moved: false,
            queenside_rook_moved: false,
            kingside_rook_moved: false,
        }
    }

    /// Has this side's king ever moved?
    #[inline]
    #[must_use]
    pub const fn king_moved(self) -> bool {
        self.king_moved
    }

    /// Has the rook on the wing containing `file` ever moved?
    ///
    /// Files above the king's home file (5) select the kingside flag,
    /// the rest the queenside flag.
    #[inline]
    #[must_use]
    pub const fn rook_moved(self, file: i8) -> bool {
        if file > 5 {
            self.kingside_rook_moved
        } else {
            self.queenside_rook_moved
        }
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self) {
        self.king_moved = true;
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, file: i8) {
        if file > 5 {
            self.kingside_rook_moved = true;
        } else {
            self.queenside_rook_moved = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_record_allows_both_wings() {
        let record = CastlingRecord::fresh();
        assert!(!record.king_moved());
        assert!(!record.rook_moved(1));
        assert!(!record.rook_moved(8));
    }

    #[test]
    fn test_rook_flags_latch_by_wing() {
        let mut record = CastlingRecord::fresh();
        record.mark_rook_moved(8);
        assert!(record.rook_moved(8));
        assert!(record.rook_moved(7)); // same wing
        assert!(!record.rook_moved(1));

        record.mark_rook_moved(1);
        assert!(record.rook_moved(1));
    }

    #[test]
    fn test_king_flag_latches() {
        let mut record = CastlingRecord::fresh();
        record.mark_king_moved();
        assert!(record.king_moved());
        assert!(!record.rook_moved(8));
    }
}
