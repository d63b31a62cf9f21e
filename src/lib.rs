pub mod board;

pub use board::{Color, Game, GameBuilder, Outcome, PieceKind, Position};
