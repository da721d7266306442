//! Move segments and their geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// The shape of a move, derived from its coordinate delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKind {
    Diagonal,
    Horizontal,
    Vertical,
    KnightJump,
}

/// A move from a start square to a destination square.
///
/// A move carries no piece or promotion information; the board decides what
/// happens when it is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    start: Coord,
    dest: Coord,
}

impl Move {
    /// Create a move.
    #[inline]
    pub const fn new(start: Coord, dest: Coord) -> Move {
        Move { start, dest }
    }

    /// Return the start square.
    #[inline]
    pub const fn start(self) -> Coord {
        self.start
    }

    /// Return the destination square.
    #[inline]
    pub const fn dest(self) -> Coord {
        self.dest
    }

    /// Classify the move by its delta.
    ///
    /// Equal absolute deltas are tested first, so a zero-length move counts
    /// as diagonal. Any delta that is not a straight line is a knight jump.
    pub fn movement_kind(self) -> MovementKind {
        let d_row = self.dest.row() - self.start.row();
        let d_col = self.dest.col() - self.start.col();

        if d_row.abs() == d_col.abs() {
            MovementKind::Diagonal
        } else if d_row == 0 {
            MovementKind::Horizontal
        } else if d_col == 0 {
            MovementKind::Vertical
        } else {
            MovementKind::KnightJump
        }
    }

    /// Return the squares strictly between start and destination.
    ///
    /// Empty for knight jumps and adjacent moves.
    ///
    /// ```
    /// use tyro_core::{Coord, Move};
    ///
    /// let mv = Move::new(Coord::new(1, 1), Coord::new(4, 4));
    /// assert_eq!(mv.path(), vec![Coord::new(2, 2), Coord::new(3, 3)]);
    /// ```
    pub fn path(self) -> Vec<Coord> {
        let mut path = Vec::new();
        if self.movement_kind() == MovementKind::KnightJump {
            return path;
        }

        let step_row = (self.dest.row() - self.start.row()).signum();
        let step_col = (self.dest.col() - self.start.col()).signum();

        let mut current = self.start.offset(step_row, step_col);
        while current != self.dest {
            path.push(current);
            current = current.offset(step_row, step_col);
        }
        path
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{})", self.start, self.dest)
    }
}
