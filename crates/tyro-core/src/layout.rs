//! Placement diagrams for [`Board`].
//!
//! A diagram is the piece-placement field of FEN: eight ranks separated by
//! `/`, the first describing row 7. Uppercase letters are White, lowercase
//! Black, digits are runs of empty squares. A parsed board has no history.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::coord::Coord;
use crate::error::LayoutError;
use crate::piece::Piece;

/// Diagram of the standard opening arrangement.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(diagram: &str) -> Result<Board, LayoutError> {
        let ranks: Vec<&str> = diagram.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            let row = 7 - rank_index as i8;
            let mut col: usize = 0;

            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(LayoutError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let piece = Piece::from_symbol(c).ok_or(LayoutError::InvalidPieceChar { character: c })?;
                if col >= 8 {
                    return Err(LayoutError::BadRankLength {
                        rank_index,
                        length: col + 1,
                    });
                }
                board.set(Coord::new(row, col as i8), Some(piece));
                col += 1;
            }

            if col != 8 {
                return Err(LayoutError::BadRankLength {
                    rank_index,
                    length: col,
                });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Coord::SIZE).rev() {
            let mut empty = 0;
            for col in 0..Coord::SIZE {
                match self.piece_at(Coord::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
