//! The board store: an owned 8x8 grid of occupants.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, PieceKind, Position};

/// One cell of the board. `None` is an empty square; `Some` carries the
/// owner and piece kind, so a cell can never hold stale contents while
/// reporting itself empty.
pub type Occupant = Option<(Color, PieceKind)>;

/// An 8x8 mapping from [`Position`] to [`Occupant`].
///
/// Cells are read and written through explicit `get`/`set`; no references
/// into the grid escape, so callers never alias cells across calls.
/// Positions must be in bounds — the public game entry points check
/// user-supplied coordinates before reaching these accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct Grid {
    squares: [[Occupant; 8]; 8], // [rank - 1][file - 1]
}

impl Grid {
    /// All squares empty
    #[must_use]
    pub(crate) const fn empty() -> Self {
        Grid {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, position: Position) -> Occupant {
        debug_assert!(position.in_bounds(), "grid read at {position}");
        self.squares[(position.rank - 1) as usize][(position.file - 1) as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, position: Position, occupant: Occupant) {
        debug_assert!(position.in_bounds(), "grid write at {position}");
        self.squares[(position.rank - 1) as usize][(position.file - 1) as usize] = occupant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_reads_none() {
        let grid = Grid::empty();
        assert_eq!(grid.get(Position::new(1, 1)), None);
        assert_eq!(grid.get(Position::new(8, 8)), None);
    }

    #[test]
    fn test_set_then_get_single_cell() {
        let mut grid = Grid::empty();
        let e4 = Position::new(5, 4);
        grid.set(e4, Some((Color::White, PieceKind::Knight)));

        assert_eq!(grid.get(e4), Some((Color::White, PieceKind::Knight)));
        // neighbors untouched
        assert_eq!(grid.get(Position::new(5, 5)), None);
        assert_eq!(grid.get(Position::new(4, 4)), None);
    }

    #[test]
    fn test_set_none_clears_cell() {
        let mut grid = Grid::empty();
        let a1 = Position::new(1, 1);
        grid.set(a1, Some((Color::Black, PieceKind::Rook)));
        grid.set(a1, None);
        assert_eq!(grid.get(a1), None);
    }
}
