//! Chess board representation and legal-move rules.
//!
//! A pure rules engine: callers supply coordinates and a promotion choice,
//! and get back a result code plus the mutated board. There is no I/O, no
//! clock, no notation, and no game-end detection here.
//!
//! # Example
//! ```
//! use chess_rules::board::{Game, Outcome, PieceKind, Position};
//!
//! let mut game = Game::new();
//! let e2 = Position::new(5, 2);
//! let e4 = Position::new(5, 4);
//! assert_eq!(game.play(e2, e4, PieceKind::Pawn), Outcome::Ok);
//! ```

mod attacks;
mod builder;
#[cfg(debug_assertions)]
mod debug;
mod error;
mod grid;
mod play;
pub mod prelude;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameBuilder;
pub use error::SquareError;
pub use grid::Occupant;
pub use state::Game;
pub use types::{CastlingRecord, Color, Outcome, PieceKind, Position};
