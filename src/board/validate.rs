//! Geometric move validation and path clearing.
//!
//! Everything here is independent of whose turn it is: given a piece kind
//! and a (from, to) displacement, decide whether the shape of the move is
//! available and whether the path is clear. Check safety is the executor's
//! job, with one exception — castling paths are walked in a mode that also
//! consults the check oracle, because a king may never castle through an
//! attacked square.

use super::state::KING_HOME_FILE;
use super::{Color, Game, Outcome, PieceKind, Position};

/// How [`Game::empty_path`] treats the squares it walks over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum PathMode {
    /// Only occupancy matters
    Plain,
    /// Every walked square must also be safe from enemy attack
    Castling,
}

/// Corner square of the rook involved in a castling move toward `to`
pub(crate) fn rook_corner(to: Position) -> Position {
    if to.file == 3 {
        Position::new(1, to.rank)
    } else {
        Position::new(8, to.rank)
    }
}

impl Game {
    /// Is the move from `from` to `to` available for a piece of `kind`?
    ///
    /// Returns `Ok`, `BadMove`, `Blocked`, or (on a castling path walk)
    /// `WouldCheck`. The check oracle reuses this for attack detection, so
    /// the rules here define what "attacked" means.
    pub(crate) fn validate(&self, from: Position, to: Position, kind: PieceKind) -> Outcome {
        debug_assert!(from.in_bounds() && to.in_bounds());

        let file_delta = to.file - from.file;
        let rank_delta = to.rank - from.rank;

        if file_delta == 0 && rank_delta == 0 {
            return Outcome::BadMove;
        }

        match kind {
            PieceKind::Pawn => self.pawn_move(from, to, file_delta, rank_delta),
            PieceKind::Rook => self.rook_move(from, file_delta, rank_delta),
            PieceKind::Knight => knight_move(file_delta, rank_delta),
            PieceKind::Bishop => self.bishop_move(from, file_delta, rank_delta),
            PieceKind::Queen => self.queen_move(from, file_delta, rank_delta),
            PieceKind::King => self.king_move(from, to, file_delta, rank_delta),
        }
    }

    fn pawn_move(&self, from: Position, to: Position, file_delta: i8, rank_delta: i8) -> Outcome {
        let Some((owner, _)) = self.grid.get(from) else {
            return Outcome::BadMove;
        };

        // Pawns only ever advance
        if (rank_delta > 0 && owner == Color::Black) || (rank_delta < 0 && owner == Color::White) {
            return Outcome::BadMove;
        }

        // Double step, only from the pawn's starting rank
        if rank_delta.abs() == 2 && file_delta == 0 {
            if (rank_delta == 2 && from.rank == 2) || (rank_delta == -2 && from.rank == 7) {
                let skipped = Position::new(to.file, to.rank - rank_delta / 2);
                if self.grid.get(to).is_none() && self.grid.get(skipped).is_none() {
                    return Outcome::Ok;
                }
                return Outcome::Blocked;
            }
        }

        if rank_delta.abs() == 1 {
            // Straight advance
            if file_delta == 0 {
                if self.grid.get(to).is_none() {
                    return Outcome::Ok;
                }
                return Outcome::Blocked;
            }
            if file_delta.abs() == 1 {
                // En passant shape: an enemy pawn right beside us and a
                // landing square on rank 3 or 6. Whether the capture
                // window is still open is ruled on later; here the shape
                // alone is enough, which also makes these squares count
                // as attacked for the check oracle.
                let beside = Position::new(from.file + file_delta, from.rank);
                if let Some((other, PieceKind::Pawn)) = self.grid.get(beside) {
                    if other != owner && (to.rank == 3 || to.rank == 6) {
                        return Outcome::Ok;
                    }
                }
                // Ordinary diagonal capture
                if let Some((other, _)) = self.grid.get(to) {
                    if other != owner {
                        return Outcome::Ok;
                    }
                }
            }
        }
        Outcome::BadMove
    }

    fn rook_move(&self, from: Position, file_delta: i8, rank_delta: i8) -> Outcome {
        if file_delta != 0 && rank_delta != 0 {
            return Outcome::BadMove;
        }
        self.empty_path(from, file_delta, rank_delta, PathMode::Plain)
    }

    fn bishop_move(&self, from: Position, file_delta: i8, rank_delta: i8) -> Outcome {
        if file_delta.abs() != rank_delta.abs() {
            return Outcome::BadMove;
        }
        self.empty_path(from, file_delta, rank_delta, PathMode::Plain)
    }

    fn queen_move(&self, from: Position, file_delta: i8, rank_delta: i8) -> Outcome {
        if (file_delta != 0 && rank_delta != 0) && file_delta.abs() != rank_delta.abs() {
            return Outcome::BadMove;
        }
        self.empty_path(from, file_delta, rank_delta, PathMode::Plain)
    }

    fn king_move(&self, from: Position, to: Position, file_delta: i8, rank_delta: i8) -> Outcome {
        if file_delta.abs() <= 1 && rank_delta.abs() <= 1 {
            return Outcome::Ok;
        }
        // A two-file slide from the home file is a castling attempt; it
        // needs our own rook waiting in the matching corner.
        if file_delta.abs() == 2 && from.file == KING_HOME_FILE && rank_delta == 0 {
            let Some((owner, _)) = self.grid.get(from) else {
                return Outcome::BadMove;
            };
            return match self.grid.get(rook_corner(to)) {
                Some((corner_owner, PieceKind::Rook)) if corner_owner == owner => {
                    self.empty_path(from, file_delta, rank_delta, PathMode::Plain)
                }
                _ => Outcome::BadMove,
            };
        }
        Outcome::BadMove
    }

    /// Walk the squares strictly between `from` and `from + distance`.
    ///
    /// The remaining distances step one unit toward zero per iteration and
    /// the square at `from + remaining` is read, so the walk runs from the
    /// square before the destination back to `from` itself, whose occupant
    /// (the mover) always terminates it. An early stop with distance left
    /// means something was in the way.
    ///
    /// In [`PathMode::Castling`] every walked square — the king's current
    /// square included — is tested against the check oracle before its
    /// occupancy is considered, so an attacked square reports `WouldCheck`
    /// even when it is also occupied.
    pub(crate) fn empty_path(
        &self,
        from: Position,
        mut file_distance: i8,
        mut rank_distance: i8,
        mode: PathMode,
    ) -> Outcome {
        loop {
            file_distance -= file_distance.signum();
            rank_distance -= rank_distance.signum();

            let square = Position::new(from.file + file_distance, from.rank + rank_distance);
            if mode == PathMode::Castling && self.is_attacked(square) {
                return Outcome::WouldCheck;
            }
            if self.grid.get(square).is_some() {
                break;
            }
        }
        if file_distance != 0 || rank_distance != 0 {
            return Outcome::Blocked;
        }
        Outcome::Ok
    }
}

fn knight_move(file_delta: i8, rank_delta: i8) -> Outcome {
    if (file_delta.abs() == 2 && rank_delta.abs() == 1)
        || (file_delta.abs() == 1 && rank_delta.abs() == 2)
    {
        return Outcome::Ok;
    }
    Outcome::BadMove
}
