//! Knight candidate generation.

use crate::chess_move::Move;
use crate::coord::Coord;

/// The eight L-shaped offsets, in generation order.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (1, 2),
    (2, 1),
];

/// Generate the on-board knight jumps from `from`.
pub(crate) fn knight_moves(from: Coord) -> Vec<Move> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|dest| dest.is_on_board())
        .map(|dest| Move::new(from, dest))
        .collect()
}
