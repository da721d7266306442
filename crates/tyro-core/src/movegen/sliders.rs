//! Rook, bishop and queen candidate generation.
//!
//! Rays are walked distance-major: every direction at distance 1, then every
//! direction at distance 2, and so on. Blocking is not considered here; the
//! board filters candidates whose path is occupied.

use crate::chess_move::Move;
use crate::coord::Coord;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 1),
    (1, 0),
];

/// Walk every ray in `directions` up to 7 squares from `from`.
fn ray_moves(from: Coord, directions: &[(i8, i8)]) -> Vec<Move> {
    let mut moves = Vec::new();
    for distance in 1..Coord::SIZE {
        for &(d_row, d_col) in directions {
            let dest = from.offset(d_row * distance, d_col * distance);
            if dest.is_on_board() {
                moves.push(Move::new(from, dest));
            }
        }
    }
    moves
}

pub(crate) fn rook_moves(from: Coord) -> Vec<Move> {
    ray_moves(from, &ROOK_DIRECTIONS)
}

pub(crate) fn bishop_moves(from: Coord) -> Vec<Move> {
    ray_moves(from, &BISHOP_DIRECTIONS)
}

pub(crate) fn queen_moves(from: Coord) -> Vec<Move> {
    ray_moves(from, &QUEEN_DIRECTIONS)
}
