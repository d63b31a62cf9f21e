//! Fluent builder for constructing chess positions.
//!
//! Notation parsing is out of scope for this crate, so the builder is the
//! way to set up a position other than the standard opening layout.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, PieceKind, Position};
//!
//! let game = GameBuilder::new()
//!     .piece(Position::new(5, 1), Color::White, PieceKind::King)
//!     .piece(Position::new(5, 8), Color::Black, PieceKind::King)
//!     .piece(Position::new(8, 1), Color::White, PieceKind::Rook)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{CastlingRecord, Color, Game, PieceKind, Position};

/// A fluent builder for constructing [`Game`] positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Position, Color, PieceKind)>,
    side_to_move: Color,
    castling: [CastlingRecord; 2],
    double_step: Option<Position>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty builder: no pieces, white to move, nothing
    /// recorded as moved.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: [CastlingRecord::fresh(); 2],
            double_step: None,
        }
    }

    /// Place a piece, replacing whatever was put on that square before.
    #[must_use]
    pub fn piece(mut self, position: Position, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(p, _, _)| *p != position);
        self.pieces.push((position, color, kind));
        self
    }

    /// Remove a previously placed piece.
    #[must_use]
    pub fn clear(mut self, position: Position) -> Self {
        self.pieces.retain(|(p, _, _)| *p != position);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Pretend one side's king has already moved, disabling its castling.
    #[must_use]
    pub fn king_moved(mut self, color: Color) -> Self {
        self.castling[color.index()].mark_king_moved();
        self
    }

    /// Pretend one side's rook on the wing containing `file` has already
    /// moved, disabling castling on that wing.
    #[must_use]
    pub fn rook_moved(mut self, color: Color, file: i8) -> Self {
        self.castling[color.index()].mark_rook_moved(file);
        self
    }

    /// Record a pawn double step ending on `target`, opening the en
    /// passant window for the first move of the built game.
    #[must_use]
    pub const fn double_step(mut self, target: Position) -> Self {
        self.double_step = Some(target);
        self
    }

    /// Build the game.
    ///
    /// # Panics
    /// All placed positions must be in bounds.
    #[must_use]
    pub fn build(self) -> Game {
        let mut game = Game::blank();
        for (position, color, kind) in self.pieces {
            assert!(position.in_bounds(), "builder piece at {position}");
            game.grid.set(position, Some((color, kind)));
        }
        game.side_to_move = self.side_to_move;
        game.castling = self.castling;
        game.double_step = self.double_step;
        game
    }
}
