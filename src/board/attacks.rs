//! The check oracle: attack detection by re-running move validation.

use super::{Color, Game, Outcome, PieceKind, Position};

impl Game {
    /// Is `square` attacked by any piece of `attacker`?
    ///
    /// Attack detection is ordinary move legality: every piece of the
    /// attacking color is asked whether it could move to `square`. This
    /// deliberately includes the pawn-capture branch that accepts an empty
    /// destination when the en passant shape matches, so such squares
    /// count as attacked — castling-path checks near enemy pawns depend on
    /// this sharing one code path with real moves.
    #[must_use]
    pub fn is_attacked_by(&self, square: Position, attacker: Color) -> bool {
        for rank in 1..=8 {
            for file in 1..=8 {
                let from = Position::new(file, rank);
                if let Some((owner, kind)) = self.grid.get(from) {
                    if owner == attacker && self.validate(from, square, kind) == Outcome::Ok {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Is `square` attacked by the opponent of the side to move?
    #[inline]
    #[must_use]
    pub fn is_attacked(&self, square: Position) -> bool {
        self.is_attacked_by(square, self.side_to_move.opponent())
    }

    /// Is the side to move currently in check?
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.own_king_in_check()
    }

    /// Check against the king of the side to move. A board without that
    /// king (which well-formed play never produces) is never in check.
    pub(crate) fn own_king_in_check(&self) -> bool {
        match self.king_square(self.side_to_move) {
            Some(king) => self.is_attacked_by(king, self.side_to_move.opponent()),
            None => false,
        }
    }

    /// Scan the board for one side's king
    pub(crate) fn king_square(&self, side: Color) -> Option<Position> {
        for rank in 1..=8 {
            for file in 1..=8 {
                let square = Position::new(file, rank);
                if self.grid.get(square) == Some((side, PieceKind::King)) {
                    return Some(square);
                }
            }
        }
        None
    }
}
