//! Pawn candidate generation.
//!
//! Unlike the other kinds, a pawn's candidates depend on occupancy: it
//! captures only diagonally and pushes only onto empty squares. The board
//! scans the squares in front of the pawn into [`PawnSurroundings`] right
//! before generating its moves.

use crate::board::Board;
use crate::chess_move::Move;
use crate::coord::Coord;
use crate::team::Team;

/// Occupancy facts about the squares in front of a pawn.
///
/// "Left" and "right" are absolute column directions (column − 1 and
/// column + 1), not relative to the pawn's team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnSurroundings {
    /// An enemy piece stands diagonally forward on column − 1.
    pub take_left: bool,
    /// An enemy piece stands diagonally forward on column + 1.
    pub take_right: bool,
    /// Any piece stands directly ahead.
    pub piece_ahead: bool,
    /// Any piece stands two squares ahead.
    pub piece_two_ahead: bool,
}

impl PawnSurroundings {
    /// Scan the board around a pawn of `team` standing on `from`.
    ///
    /// Off-board squares count as empty.
    pub fn scan(board: &Board, from: Coord, team: Team) -> PawnSurroundings {
        let forward = team.forward();
        let is_enemy = |sq: Coord| board.piece_at(sq).is_some_and(|p| p.team() != team);

        PawnSurroundings {
            take_left: is_enemy(from.offset(forward, -1)),
            take_right: is_enemy(from.offset(forward, 1)),
            piece_ahead: board.piece_at(from.offset(forward, 0)).is_some(),
            piece_two_ahead: board.piece_at(from.offset(forward * 2, 0)).is_some(),
        }
    }
}

/// Generate the candidate moves of a pawn of `team` standing on `from`.
///
/// The double push only checks the square two ahead; the square it crosses
/// is covered by the board's clear-path filter.
pub(crate) fn pawn_moves(from: Coord, team: Team, around: PawnSurroundings) -> Vec<Move> {
    let forward = team.forward();
    let mut moves = Vec::with_capacity(4);
    let mut push = |dest: Coord| {
        if dest.is_on_board() {
            moves.push(Move::new(from, dest));
        }
    };

    if around.take_left {
        push(from.offset(forward, -1));
    }
    if around.take_right {
        push(from.offset(forward, 1));
    }
    if !around.piece_ahead {
        push(from.offset(forward, 0));
    }
    if !around.piece_two_ahead && from.row() == team.pawn_row() {
        push(from.offset(forward * 2, 0));
    }

    moves
}
