//! The move executor: the single mutating entry point and the castling
//! and en passant protocols.

use super::grid::Occupant;
use super::state::KING_HOME_FILE;
use super::validate::{rook_corner, PathMode};
use super::{Game, Outcome, PieceKind, Position};

#[cfg(feature = "logging")]
macro_rules! trace_move {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "logging"))]
macro_rules! trace_move {
    ($($arg:tt)*) => {};
}

impl Game {
    /// Move the piece at `from` to `to`.
    ///
    /// Castling is expressed as a two-file king move; en passant as an
    /// ordinary diagonal pawn capture onto the skipped square. When the
    /// move places a pawn on its final rank it is promoted to `promote`
    /// (the argument is ignored for every other move, so callers without
    /// an opinion pass [`PieceKind::Pawn`]).
    ///
    /// On any outcome other than [`Outcome::Capture`] or [`Outcome::Ok`]
    /// the game is left exactly as it was and the same side is to move.
    ///
    /// # Panics
    /// Both coordinates must be in bounds; coordinate validity is the
    /// caller's contract.
    pub fn play(&mut self, from: Position, to: Position, promote: PieceKind) -> Outcome {
        assert!(from.in_bounds(), "from square {from} out of bounds");
        assert!(to.in_bounds(), "to square {to} out of bounds");

        let Some((owner, kind)) = self.grid.get(from) else {
            return Outcome::NoPiece;
        };
        if owner != self.side_to_move {
            return Outcome::BadPiece;
        }

        let verdict = self.validate(from, to, kind);
        if verdict != Outcome::Ok {
            return verdict;
        }
        if matches!(self.grid.get(to), Some((occupier, _)) if occupier == owner) {
            return Outcome::Blocked;
        }

        let captured = self.grid.get(to);
        let started_in_check = self.own_king_in_check();

        // A diagonal pawn move onto an empty square can only be an en
        // passant attempt; validation already pinned down the shape.
        if kind == PieceKind::Pawn && from.file != to.file && captured.is_none() {
            return self.en_passant(from, to, started_in_check);
        }
        if kind == PieceKind::King && from.file == KING_HOME_FILE && (to.file == 7 || to.file == 3)
        {
            return self.castle(from, to, started_in_check);
        }

        self.apply(from, to);
        if self.own_king_in_check() {
            self.revert(from, to, captured);
            if started_in_check {
                return Outcome::InCheck;
            }
            return Outcome::WouldCheck;
        }

        if kind == PieceKind::Pawn && (to.rank == 1 || to.rank == 8) {
            if !promote.is_valid_promotion() {
                self.revert(from, to, captured);
                return Outcome::BadPromote;
            }
            self.grid.set(to, Some((owner, promote)));
        }

        self.record_movement(from, to);
        self.switch_sides();

        trace_move!("{owner} played {from}{to}");
        if captured.is_some() {
            return Outcome::Capture;
        }
        Outcome::Ok
    }

    /// En passant: capture the pawn that just double-stepped past us.
    ///
    /// The captured pawn stands beside the mover, on the destination file.
    /// The window is exactly one move wide — the double-step memo must
    /// still name that square, otherwise the chance has lapsed.
    fn en_passant(&mut self, from: Position, to: Position, started_in_check: bool) -> Outcome {
        let capture_square = Position::new(to.file, from.rank);
        if self.double_step != Some(capture_square) {
            return Outcome::Lapsed;
        }

        let captured = self.grid.get(capture_square);
        self.grid.set(capture_square, None);
        self.apply(from, to);

        if self.own_king_in_check() {
            self.grid.set(capture_square, captured);
            self.revert(from, to, None);
            if started_in_check {
                return Outcome::InCheck;
            }
            return Outcome::WouldCheck;
        }

        self.record_movement(from, to);
        self.switch_sides();
        trace_move!("en passant capture {from}{to}");
        Outcome::Capture
    }

    /// Castling: the king slides two files toward a rook that then jumps
    /// to the far side of it.
    ///
    /// Rejections, in order: either piece has moved; the king is already
    /// in check; the king-to-rook path is obstructed or passes through an
    /// attacked square (the path walk reports those two verbatim).
    fn castle(&mut self, from: Position, to: Position, started_in_check: bool) -> Outcome {
        let record = self.castling[self.side_to_move.index()];
        if record.rook_moved(to.file) || record.king_moved() {
            return Outcome::HasMoved;
        }
        if started_in_check {
            return Outcome::InCheck;
        }

        let rook_from = rook_corner(to);
        let rook_to = Position::new(if rook_from.file == 1 { 4 } else { 6 }, rook_from.rank);

        let path = self.empty_path(from, rook_from.file - from.file, 0, PathMode::Castling);
        if path != Outcome::Ok {
            return path;
        }

        self.apply(from, to);
        self.apply(rook_from, rook_to);

        self.record_movement(from, to);
        self.switch_sides();
        trace_move!("{} castled {from}{to}", self.side_to_move.opponent());
        Outcome::Ok
    }

    /// Slide the occupant of `from` onto `to`, leaving `from` empty
    fn apply(&mut self, from: Position, to: Position) {
        let mover = self.grid.get(from);
        self.grid.set(to, mover);
        self.grid.set(from, None);
    }

    /// Undo [`Game::apply`], restoring whatever stood on `to`
    fn revert(&mut self, from: Position, to: Position, captured: Occupant) {
        let mover = self.grid.get(to);
        self.grid.set(from, mover);
        self.grid.set(to, captured);
    }

    /// Latch the castling flags and overwrite the double-step memo after
    /// a committed move from `from` to `to`. Runs before the side switch,
    /// reading the piece now standing on the destination.
    fn record_movement(&mut self, from: Position, to: Position) {
        let side = self.side_to_move;
        match self.grid.get(to) {
            Some((_, PieceKind::King)) => self.castling[side.index()].mark_king_moved(),
            Some((_, PieceKind::Rook)) => self.castling[side.index()].mark_rook_moved(from.file),
            _ => {}
        }

        let moved_pawn = matches!(self.grid.get(to), Some((_, PieceKind::Pawn)));
        self.double_step = if moved_pawn && (from.rank - to.rank).abs() == 2 {
            Some(to)
        } else {
            None
        };
    }
}
