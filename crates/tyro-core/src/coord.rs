//! Board coordinates as (row, column) pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A square on the board, addressed by row and column.
///
/// Row 0 is White's back rank, column 0 is the `a` file. Components are
/// signed so that generators can step off the board and test the result with
/// [`is_on_board`](Coord::is_on_board) instead of guarding every offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: i8,
    col: i8,
}

impl Coord {
    /// Number of rows (and columns) on the board.
    pub const SIZE: i8 = 8;

    /// Create a coordinate. Off-board values are allowed.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Coord {
        Coord { row, col }
    }

    /// Return the row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Return the column.
    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Return `true` if both components lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < Self::SIZE && self.col >= 0 && self.col < Self::SIZE
    }

    /// Return the coordinate shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Coord {
        Coord::new(self.row + d_row, self.col + d_col)
    }

    /// Iterate over all 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Coord::new(row, col)))
    }

    /// Parse a square name such as `"e2"` (file letter, then `row + 1`).
    pub fn from_name(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }

        Some(Coord::new((rank - b'1') as i8, (file - b'a') as i8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({},{})", self.row, self.col)
        }
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({})", self)
    }
}
