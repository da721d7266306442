//! Move generation: per-kind candidates and the board's filtering pipeline.
//!
//! Moves returned here are pseudo-legal. They are on the board, their path is
//! clear and they do not land on a friendly piece, but they may still leave
//! the mover's king attacked. That last check happens only when a move is
//! applied with [`Board::apply_move`].

mod king;
mod knights;
mod pawns;
pub(crate) mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::coord::Coord;
use crate::piece_kind::PieceKind;
use crate::team::Team;

pub(crate) use self::king::king_moves;
pub(crate) use self::knights::knight_moves;
pub use self::pawns::PawnSurroundings;
pub(crate) use self::pawns::pawn_moves;

impl Board {
    /// Return the pseudo-legal moves of the piece on `from`.
    ///
    /// Empty if the square is empty or off the board.
    pub fn legal_moves_from(&self, from: Coord) -> Vec<Move> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let around = if piece.kind() == PieceKind::Pawn {
            PawnSurroundings::scan(self, from, piece.team())
        } else {
            PawnSurroundings::default()
        };

        piece
            .pseudo_moves(from, around)
            .into_iter()
            .filter(|&mv| self.is_clear_path(mv) && self.is_valid_destination(mv))
            .collect()
    }

    /// Return the pseudo-legal moves of every piece of `team`.
    ///
    /// Pieces are visited in row-major order, so the result is deterministic.
    pub fn legal_moves(&self, team: Team) -> Vec<Move> {
        self.squares_of(team)
            .flat_map(|sq| self.legal_moves_from(sq))
            .collect()
    }

    /// Return `true` if a piece of `team` stands on the move's start square
    /// and the move is among that piece's pseudo-legal moves.
    pub fn is_valid_move(&self, mv: Move, team: Team) -> bool {
        match self.piece_at(mv.start()) {
            Some(piece) if piece.team() == team => self.legal_moves_from(mv.start()).contains(&mv),
            _ => false,
        }
    }

    /// Return the squares of `team` whose piece has at least one pseudo-legal move.
    pub fn movable_squares(&self, team: Team) -> Vec<Coord> {
        self.squares_of(team)
            .filter(|&sq| !self.legal_moves_from(sq).is_empty())
            .collect()
    }

    /// No piece stands between the move's start and destination.
    fn is_clear_path(&self, mv: Move) -> bool {
        mv.path().into_iter().all(|sq| self.piece_at(sq).is_none())
    }

    /// The destination is empty or holds an opposing piece.
    fn is_valid_destination(&self, mv: Move) -> bool {
        match (self.piece_at(mv.start()), self.piece_at(mv.dest())) {
            (Some(mover), Some(target)) => mover.team() != target.team(),
            _ => true,
        }
    }
}
