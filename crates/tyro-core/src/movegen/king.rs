//! King candidate generation.

use crate::chess_move::Move;
use crate::coord::Coord;

/// The eight neighbouring offsets, in generation order.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 1),
    (1, 0),
];

/// Generate the on-board squares adjacent to `from`.
pub(crate) fn king_moves(from: Coord) -> Vec<Move> {
    KING_OFFSETS
        .iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|dest| dest.is_on_board())
        .map(|dest| Move::new(from, dest))
        .collect()
}
