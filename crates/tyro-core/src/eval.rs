//! Static material evaluation.

use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::team::Team;

/// Material weight of each kind, indexed by [`PieceKind::index()`].
///
/// | Piece  | weight |
/// |--------|--------|
/// | Pawn   |     10 |
/// | Knight |     30 |
/// | Bishop |     40 |
/// | Rook   |     60 |
/// | Queen  |    100 |
/// | King   |    950 |
pub const MATERIAL_WEIGHT: [i32; PieceKind::COUNT] = [
    10,  // Pawn
    30,  // Knight
    40,  // Bishop
    60,  // Rook
    100, // Queen
    950, // King
];

impl PieceKind {
    /// Return the material weight of this kind.
    #[inline]
    pub const fn weight(self) -> i32 {
        MATERIAL_WEIGHT[self.index()]
    }
}

impl Board {
    /// Material balance from `team`'s point of view.
    ///
    /// Own pieces count positively and opposing pieces negatively, with flat
    /// weights for both sides.
    pub fn evaluate(&self, team: Team) -> i32 {
        self.pieces()
            .map(|(_, piece)| {
                let weight = piece.kind().weight();
                if piece.team() == team { weight } else { -weight }
            })
            .sum()
    }
}
