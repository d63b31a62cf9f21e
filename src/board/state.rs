//! The game state: board, side to move, and special-move memos.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::grid::{Grid, Occupant};
use super::{CastlingRecord, Color, PieceKind, Position};

/// The file the kings start on
pub(crate) const KING_HOME_FILE: i8 = 5;

/// Back-rank piece order for the standard opening layout
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A game of chess: one mutable board plus the state needed to rule on
/// castling and en passant.
///
/// [`Game::play`] is the only mutating entry point. Rejected moves leave
/// the game exactly as it was, which `PartialEq` lets tests verify
/// directly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    pub(crate) grid: Grid,
    pub(crate) side_to_move: Color,
    pub(crate) castling: [CastlingRecord; 2], // indexed by Color
    /// Destination square of the immediately preceding pawn double step,
    /// overwritten on every successful move
    pub(crate) double_step: Option<Position>,
}

impl Game {
    /// A game in the standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut game = Game::blank();
        for (i, kind) in BACK_RANK.into_iter().enumerate() {
            let file = i as i8 + 1;
            game.grid
                .set(Position::new(file, 1), Some((Color::White, kind)));
            game.grid
                .set(Position::new(file, 2), Some((Color::White, PieceKind::Pawn)));
            game.grid
                .set(Position::new(file, 7), Some((Color::Black, PieceKind::Pawn)));
            game.grid
                .set(Position::new(file, 8), Some((Color::Black, kind)));
        }
        game
    }

    /// An empty board, white to move, nothing recorded as moved.
    /// Starting point for [`GameBuilder`](super::GameBuilder).
    pub(crate) const fn blank() -> Self {
        Game {
            grid: Grid::empty(),
            side_to_move: Color::White,
            castling: [CastlingRecord::fresh(); 2],
            double_step: None,
        }
    }

    /// Which piece is at the given position?
    ///
    /// # Panics
    /// The position must be in bounds; coordinate validity is the
    /// caller's contract.
    #[must_use]
    pub fn at(&self, position: Position) -> Occupant {
        assert!(position.in_bounds(), "position {position} out of bounds");
        self.grid.get(position)
    }

    /// The side whose turn it is
    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Castling movement record for one side
    #[inline]
    #[must_use]
    pub fn castling_record(&self, side: Color) -> CastlingRecord {
        self.castling[side.index()]
    }

    /// The square a pawn landed on with the immediately preceding double
    /// step, if any. This is the only move-history the engine keeps.
    #[inline]
    #[must_use]
    pub fn double_step_square(&self) -> Option<Position> {
        self.double_step
    }

    pub(crate) fn switch_sides(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
