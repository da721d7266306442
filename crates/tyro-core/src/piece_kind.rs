//! Piece variants.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six variants, ordered by material weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

/// Diagram letters in index order.
const SYMBOLS: [char; PieceKind::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];

const NAMES: [&str; PieceKind::COUNT] = ["pawn", "knight", "bishop", "rook", "queen", "king"];

impl PieceKind {
    pub const COUNT: usize = 6;

    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase diagram letter; the board uppercases it for White.
    #[inline]
    pub const fn symbol(self) -> char {
        SYMBOLS[self.index()]
    }

    /// Look up a kind by its diagram letter, ignoring case.
    pub fn from_symbol(c: char) -> Option<PieceKind> {
        let c = c.to_ascii_lowercase();
        PieceKind::ALL.into_iter().find(|kind| kind.symbol() == c)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NAMES[self.index()])
    }
}
