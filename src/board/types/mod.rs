//! Value types shared across the rules engine.

mod castling;
mod outcome;
mod piece;
mod position;

pub use castling::CastlingRecord;
pub use outcome::Outcome;
pub use piece::{Color, PieceKind};
pub use position::Position;
