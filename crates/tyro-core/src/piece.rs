//! A piece on the board: a team plus a variant.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::movegen::{PawnSurroundings, king_moves, knight_moves, pawn_moves, sliders};
use crate::piece_kind::PieceKind;
use crate::team::Team;

/// A piece belonging to a team.
///
/// Pieces are immutable values; a promotion replaces the pawn with a new
/// queen rather than changing it in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Team::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Team::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Team::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Team::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Team::White);
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Team::White);

    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Team::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Team::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Team::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Team::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Team::Black);
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Team::Black);

    /// Create a piece from a kind and a team.
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Piece {
        Piece { team, kind }
    }

    /// Parse a diagram character: uppercase is White, lowercase is Black.
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some(Piece::new(kind, team))
    }

    /// Return the team.
    #[inline]
    pub const fn team(self) -> Team {
        self.team
    }

    /// Return the kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the diagram character (uppercase for White).
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.team {
            Team::White => base.to_ascii_uppercase(),
            Team::Black => base,
        }
    }

    /// Generate the on-board candidate moves for this piece standing on `from`.
    ///
    /// Candidates ignore occupancy except for pawns, whose captures and pushes
    /// depend on `surroundings`. Other kinds ignore that argument.
    pub fn pseudo_moves(self, from: Coord, surroundings: PawnSurroundings) -> Vec<Move> {
        match self.kind {
            PieceKind::King => king_moves(from),
            PieceKind::Queen => sliders::queen_moves(from),
            PieceKind::Rook => sliders::rook_moves(from),
            PieceKind::Bishop => sliders::bishop_moves(from),
            PieceKind::Knight => knight_moves(from),
            PieceKind::Pawn => pawn_moves(from, self.team, surroundings),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.team {
            Team::White => 'W',
            Team::Black => 'B',
        };
        write!(f, "{}{}", prefix, self.kind.symbol().to_ascii_uppercase())
    }
}
