//! Attack detection and end-of-game classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::chess_move::Move;
use crate::coord::Coord;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::team::Team;

/// Whether the side to move can still play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// At least one move keeps the king safe.
    InPlay,
    /// No safe move and the king is attacked.
    Checkmate,
    /// No safe move but the king is not attacked.
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InPlay => write!(f, "in play"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

impl Board {
    /// Return the square of `team`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `team` has no king. No legal move can capture a king, so
    /// this indicates a corrupted board.
    pub fn king_square(&self, team: Team) -> Coord {
        let king = Piece::new(PieceKind::King, team);
        self.pieces()
            .find_map(|(sq, piece)| (piece == king).then_some(sq))
            .expect("board must have a king for each team")
    }

    /// Return `true` if any piece of `by` has a pseudo-legal move onto `sq`.
    ///
    /// Uses only the generation pipeline, never [`apply_move`](Board::apply_move),
    /// so it cannot recurse into itself.
    pub fn is_attacked(&self, sq: Coord, by: Team) -> bool {
        self.squares_of(by)
            .any(|from| self.is_valid_move(Move::new(from, sq), by))
    }

    /// Return `true` if `team`'s king is attacked.
    pub fn is_checked(&self, team: Team) -> bool {
        self.is_attacked(self.king_square(team), team.flip())
    }

    /// Validate the board as a position with `to_move` to play.
    ///
    /// On top of [`validate`](Board::validate), the other team must not be in
    /// check: otherwise the mover could capture a king.
    pub fn validate_turn(&self, to_move: Team) -> Result<(), BoardError> {
        self.validate()?;
        let waiting = to_move.flip();
        if self.is_checked(waiting) {
            return Err(BoardError::OpponentInCheck { team: waiting });
        }
        Ok(())
    }

    /// Classify the position for `team` to move.
    ///
    /// Tries each pseudo-legal move until one is accepted by
    /// [`apply_move`](Board::apply_move); the board is left unchanged.
    pub fn game_status(&mut self, team: Team) -> GameStatus {
        for mv in self.legal_moves(team) {
            if self.try_apply(mv).is_some() {
                return GameStatus::InPlay;
            }
        }

        if self.is_checked(team) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }
}
