//! The board: an 8x8 grid of pieces plus the undo history used by search.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_move::Move;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::team::Team;

/// Back rank arrangement from column 0 to column 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game position plus the history needed to undo applied moves.
///
/// The board is a plain value: it can be cloned, compared and serialized,
/// undo history included.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed as `grid[row][col]`.
    grid: [[Option<Piece>; 8]; 8],
    /// Occupant of each applied move's destination before the move.
    pub(crate) captured: Vec<Option<Piece>>,
    /// Applied moves, most recent last.
    pub(crate) moves: Vec<Move>,
    /// Start square of each applied move that promoted a pawn.
    pub(crate) promotions: Vec<Option<Coord>>,
}

impl Board {
    /// Return a board with no pieces and no history.
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
            captured: Vec::new(),
            moves: Vec::new(),
            promotions: Vec::new(),
        }
    }

    /// Return the standard opening arrangement.
    ///
    /// White occupies rows 0 and 1, Black rows 7 and 6.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for team in Team::ALL {
            for (col, kind) in BACK_RANK.into_iter().enumerate() {
                board.set(Coord::new(team.back_row(), col as i8), Some(Piece::new(kind, team)));
                board.set(
                    Coord::new(team.pawn_row(), col as i8),
                    Some(Piece::new(PieceKind::Pawn, team)),
                );
            }
        }
        board
    }

    /// Return the piece on `sq`, or `None` if the square is empty or off the board.
    #[inline]
    pub fn piece_at(&self, sq: Coord) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Overwrite the contents of an on-board square.
    #[inline]
    pub(crate) fn set(&mut self, sq: Coord, piece: Option<Piece>) {
        debug_assert!(sq.is_on_board(), "set called with off-board {sq:?}");
        self.grid[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Iterate over the squares occupied by `team`, in row-major order.
    pub fn squares_of(&self, team: Team) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&sq| self.piece_at(sq).is_some_and(|p| p.team() == team))
    }

    /// Iterate over every occupied square and its piece, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Number of applied moves that have not been reversed yet.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.moves.len()
    }

    /// The most recent applied move that has not been reversed.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    /// Discard the undo history.
    ///
    /// Called between independent searches so history does not grow without
    /// bound. Moves applied before this call can no longer be reversed.
    pub fn clear_cache(&mut self) {
        self.captured.clear();
        self.moves.clear();
        self.promotions.clear();
    }

    /// Validate that each team has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for team in Team::ALL {
            let count = self
                .pieces()
                .filter(|&(_, p)| p == Piece::new(PieceKind::King, team))
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { team, count });
            }
        }

        let undo_lens = [self.captured.len(), self.moves.len(), self.promotions.len()];
        if undo_lens.iter().any(|&len| len != undo_lens[0]) {
            return Err(BoardError::InconsistentHistory);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\", history={})", self, self.history_len())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 7 on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (0..Coord::SIZE).rev() {
            write!(f, "{}  ", row + 1)?;
            for col in 0..Coord::SIZE {
                let c = board
                    .piece_at(Coord::new(row, col))
                    .map_or('.', Piece::symbol);
                if col < Coord::SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::coord::Coord;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::team::Team;

    fn sq(name: &str) -> Coord {
        Coord::from_name(name).unwrap()
    }

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::WHITE_KING));
        assert_eq!(board.piece_at(sq("d1")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(sq("a1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.piece_at(sq("b1")), Some(Piece::WHITE_KNIGHT));
        assert_eq!(board.piece_at(sq("c1")), Some(Piece::WHITE_BISHOP));
        assert_eq!(board.piece_at(sq("e2")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("e8")), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::BLACK_QUEEN));
        assert_eq!(board.piece_at(sq("h7")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("e4")), None);
    }

    #[test]
    fn off_board_is_empty() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Coord::new(-1, 0)), None);
        assert_eq!(board.piece_at(Coord::new(0, 8)), None);
    }

    #[test]
    fn sixteen_pieces_per_team() {
        let board = Board::starting_position();
        assert_eq!(board.squares_of(Team::White).count(), 16);
        assert_eq!(board.squares_of(Team::Black).count(), 16);
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn validate_rejects_missing_king() {
        let mut board = Board::starting_position();
        board.set(sq("e8"), None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount {
                team: Team::Black,
                count: 0
            })
        );
    }

    #[test]
    fn validate_rejects_two_kings() {
        let mut board = Board::starting_position();
        board.set(sq("e4"), Some(Piece::WHITE_KING));
        assert!(matches!(
            board.validate(),
            Err(BoardError::InvalidKingCount { team: Team::White, count: 2 })
        ));
    }

    #[test]
    fn json_keeps_undo_history() {
        let mut board: Board = "4k3/3n4/8/8/8/8/8/3RK3".parse().unwrap();
        let before = board.clone();
        assert!(board.apply_move(crate::chess_move::Move::new(sq("d1"), sq("d7"))));

        let json = serde_json::to_string(&board).unwrap();
        let mut restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, board);

        restored.reverse_last_move();
        assert_eq!(restored, before);
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let output = format!("{}", board.pretty());
        assert!(output.contains("8  r n b q k b n r"));
        assert!(output.contains("1  R N B Q K B N R"));
        assert!(output.contains("a b c d e f g h"));
    }
}
