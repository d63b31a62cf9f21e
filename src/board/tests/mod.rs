//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `basic_moves.rs` - Per-piece geometry, blocking, and turn order
//! - `special_moves.rs` - Castling, en passant, and promotion protocols
//! - `check.rs` - Attack detection and check safety
//! - `proptest.rs` - Property-based tests

mod check;

use crate::board::Position;

/// Parse a square label, panicking on bad input. Test convenience only.
pub(crate) fn sq(label: &str) -> Position {
    label.parse().expect("test square label")
}

#[cfg(feature = "serde")]
mod serde_roundtrip {
    use super::sq;
    use crate::board::{Game, PieceKind};

    #[test]
    fn test_game_round_trips_through_json() {
        let mut game = Game::new();
        assert!(game.play(sq("e2"), sq("e4"), PieceKind::Pawn).is_accepted());
        assert!(game.play(sq("d7"), sq("d5"), PieceKind::Pawn).is_accepted());

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, restored);
    }
}
