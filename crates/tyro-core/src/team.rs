//! The two sides of the game.

use std::fmt;
use std::ops::Not;

use serde::{Deserialize, Serialize};

/// One of the two teams: White or Black.
///
/// White's back rank is row 0 and its pawns advance toward row 7; Black
/// mirrors that from row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    /// Total number of teams.
    pub const COUNT: usize = 2;

    /// Both teams in index order.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing team.
    #[inline]
    pub const fn flip(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Row delta of a single pawn step for this team.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Row this team's pawns start on (and may double-step from).
    #[inline]
    pub const fn pawn_row(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// Row this team's back rank pieces start on.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }

    /// The farthest row from this team's side, where its pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.flip().back_row()
    }
}

impl Not for Team {
    type Output = Team;

    #[inline]
    fn not(self) -> Team {
        self.flip()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}
