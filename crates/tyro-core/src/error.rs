//! Error types for placement diagrams and board validation.

use crate::team::Team;

/// Errors that occur when parsing a placement diagram.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The diagram does not have exactly 8 `/`-separated ranks.
    #[error("expected 8 ranks in placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index in the diagram (0 = row 7).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the diagram.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A team does not have exactly one king.
    #[error("expected 1 king for {team}, found {count}")]
    InvalidKingCount {
        /// Which team has the wrong king count.
        team: Team,
        /// Number of kings found.
        count: usize,
    },
    /// The three undo stacks have different lengths.
    #[error("undo history stacks have different lengths")]
    InconsistentHistory,
    /// The team that just moved is still in check, so its king could be taken.
    #[error("{team} is in check but it is not their turn")]
    OpponentInCheck {
        /// The team that is not to move.
        team: Team,
    },
}
