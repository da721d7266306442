//! Move execution via make/unmake on a single mutable board.
//!
//! Search never copies the board. It applies a move, recurses, and reverses
//! the move again, so the undo history must be drained in exact LIFO order.
//! [`AppliedMove`] ties each reversal to a scope so that early exits cannot
//! skip it.

use std::ops::{Deref, DerefMut};

use tracing::{trace, warn};

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply a move, returning `false` if it would leave the mover's king attacked.
    ///
    /// The move is not checked against the generation pipeline; callers use
    /// [`is_valid_move`](Board::is_valid_move) or take moves from
    /// [`legal_moves`](Board::legal_moves). A pawn reaching the far rank is
    /// replaced by a queen of its team.
    ///
    /// On `false` the move has already been reversed and the board and its
    /// history are exactly as before the call. An empty start square is also
    /// rejected without touching anything.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let start = mv.start();
        let dest = mv.dest();

        let Some(piece) = self.piece_at(start) else {
            warn!(%mv, "apply_move called with an empty start square");
            return false;
        };
        let team = piece.team();

        self.captured.push(self.piece_at(dest));
        self.moves.push(mv);

        self.set(dest, Some(piece));
        self.set(start, None);

        if piece.kind() == PieceKind::Pawn && dest.row() == team.promotion_row() {
            self.set(dest, Some(Piece::new(PieceKind::Queen, team)));
            self.promotions.push(Some(start));
        } else {
            self.promotions.push(None);
        }

        if self.is_checked(team) {
            trace!(%mv, %team, "move rejected, king left in check");
            self.reverse_last_move();
            return false;
        }

        true
    }

    /// Undo the most recent applied move that has not been reversed yet.
    ///
    /// Restores the captured piece and turns a promoted queen back into a pawn.
    ///
    /// # Panics
    ///
    /// Panics if there is no move to reverse. That only happens when apply and
    /// reverse calls are mismatched, which corrupts every later operation.
    pub fn reverse_last_move(&mut self) {
        let mv = self
            .moves
            .pop()
            .expect("reverse_last_move called with an empty undo history");
        let captured = self
            .captured
            .pop()
            .expect("undo history stacks out of sync: no captured entry");
        let promoted_from = self
            .promotions
            .pop()
            .expect("undo history stacks out of sync: no promotion entry");

        let start = mv.start();
        let dest = mv.dest();

        self.set(start, self.piece_at(dest));
        self.set(dest, captured);

        if let Some(sq) = promoted_from
            && let Some(queen) = self.piece_at(sq)
        {
            self.set(sq, Some(Piece::new(PieceKind::Pawn, queen.team())));
        }
    }

    /// Apply a move and return a guard that reverses it when dropped.
    ///
    /// Returns `None`, leaving the board unchanged, when
    /// [`apply_move`](Board::apply_move) rejects the move.
    pub fn try_apply(&mut self, mv: Move) -> Option<AppliedMove<'_>> {
        if self.apply_move(mv) {
            Some(AppliedMove { board: self })
        } else {
            None
        }
    }
}

/// A move that is currently applied to a board.
///
/// Dereferences to the board so the caller can keep searching below it. The
/// move is reversed when the guard goes out of scope, including on `break`,
/// `return` and unwinding.
#[must_use = "dropping the guard immediately reverses the move"]
pub struct AppliedMove<'a> {
    board: &'a mut Board,
}

impl AppliedMove<'_> {
    /// Keep the move on the board instead of reversing it on drop.
    ///
    /// The move stays in the undo history and can still be reversed manually.
    pub fn commit(self) {
        std::mem::forget(self);
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        self.board.reverse_last_move();
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::coord::Coord;
    use crate::piece::Piece;
    use crate::team::Team;

    fn sq(name: &str) -> Coord {
        Coord::from_name(name).unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    #[test]
    fn apply_then_reverse_restores_board() {
        let mut board = Board::starting_position();
        let before = board.clone();

        assert!(board.apply_move(mv("e2", "e4")));
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("e2")), None);
        assert_eq!(board.history_len(), 1);

        board.reverse_last_move();
        assert_eq!(board, before);
    }

    #[test]
    fn capture_is_restored() {
        // White rook d1 takes the black knight on d7.
        let mut board: Board = "4k3/3n4/8/8/8/8/8/3RK3".parse().unwrap();
        let before = board.clone();

        assert!(board.apply_move(mv("d1", "d7")));
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::WHITE_ROOK));
        assert_eq!(board.pieces().count(), 3);

        board.reverse_last_move();
        assert_eq!(board.piece_at(sq("d7")), Some(Piece::BLACK_KNIGHT));
        assert_eq!(board.piece_at(sq("d1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board, before);
    }

    #[test]
    fn every_starting_move_round_trips() {
        let mut board = Board::starting_position();
        let before = board.clone();
        for team in Team::ALL {
            for m in board.legal_moves(team) {
                assert!(board.apply_move(m), "{m} should be playable");
                board.reverse_last_move();
                assert_eq!(board, before, "{m} did not round-trip");
            }
        }
    }

    #[test]
    fn white_promotes_to_queen_and_back() {
        let mut board: Board = "4k3/P7/8/8/8/8/8/4K3".parse().unwrap();
        let before = board.clone();

        assert!(board.apply_move(mv("a7", "a8")));
        assert_eq!(board.piece_at(sq("a8")), Some(Piece::WHITE_QUEEN));
        assert_eq!(board.piece_at(sq("a7")), None);

        board.reverse_last_move();
        assert_eq!(board.piece_at(sq("a7")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("a8")), None);
        assert_eq!(board, before);
    }

    #[test]
    fn black_promotes_with_capture_and_back() {
        // Black pawn g2 takes the white rook on h1.
        let mut board: Board = "4k3/8/8/8/8/8/6p1/K6R".parse().unwrap();
        let before = board.clone();

        assert!(board.apply_move(mv("g2", "h1")));
        assert_eq!(board.piece_at(sq("h1")), Some(Piece::BLACK_QUEEN));

        board.reverse_last_move();
        assert_eq!(board.piece_at(sq("g2")), Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("h1")), Some(Piece::WHITE_ROOK));
        assert_eq!(board, before);
    }

    #[test]
    fn queen_moving_to_back_rank_does_not_promote() {
        let mut board: Board = "4k3/8/8/8/8/8/Q7/4K3".parse().unwrap();
        assert!(board.apply_move(mv("a2", "a8")));
        assert_eq!(board.piece_at(sq("a8")), Some(Piece::WHITE_QUEEN));
        board.reverse_last_move();
        assert_eq!(board.piece_at(sq("a2")), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn self_check_is_rejected_and_board_unchanged() {
        // White bishop e2 is pinned against the king by the rook on e8.
        let mut board: Board = "4r1k1/8/8/8/8/8/4B3/4K3".parse().unwrap();
        let before = board.clone();

        assert!(board.is_valid_move(mv("e2", "d3"), Team::White));
        assert!(!board.apply_move(mv("e2", "d3")));
        assert_eq!(board, before);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board: Board = "3rk3/8/8/8/8/8/8/4K3".parse().unwrap();
        assert!(!board.apply_move(mv("e1", "d1")));
        assert!(board.apply_move(mv("e1", "f1")));
    }

    #[test]
    fn empty_start_square_is_rejected() {
        let mut board = Board::starting_position();
        let before = board.clone();
        assert!(!board.apply_move(mv("e4", "e5")));
        assert_eq!(board, before);
    }

    #[test]
    fn nested_moves_unwind_in_order() {
        let mut board = Board::starting_position();
        let before = board.clone();

        assert!(board.apply_move(mv("e2", "e4")));
        assert!(board.apply_move(mv("d7", "d5")));
        assert!(board.apply_move(mv("e4", "d5")));
        assert_eq!(board.history_len(), 3);
        assert_eq!(board.last_move(), Some(mv("e4", "d5")));

        board.reverse_last_move();
        board.reverse_last_move();
        board.reverse_last_move();
        assert_eq!(board, before);
    }

    #[test]
    fn guard_reverses_on_drop() {
        let mut board = Board::starting_position();
        let before = board.clone();
        {
            let mut applied = board.try_apply(mv("g1", "f3")).unwrap();
            assert_eq!(applied.piece_at(sq("f3")), Some(Piece::WHITE_KNIGHT));
            let inner = applied.try_apply(mv("b8", "c6")).unwrap();
            assert_eq!(inner.history_len(), 2);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn guard_reverses_on_early_break() {
        let mut board = Board::starting_position();
        let before = board.clone();
        for m in board.legal_moves(Team::White) {
            let applied = board.try_apply(m).unwrap();
            if applied.history_len() == 1 {
                break;
            }
        }
        assert_eq!(board, before);
    }

    #[test]
    fn guard_is_none_for_rejected_move() {
        let mut board: Board = "4r1k1/8/8/8/8/8/4B3/4K3".parse().unwrap();
        assert!(board.try_apply(mv("e2", "d3")).is_none());
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn commit_keeps_the_move() {
        let mut board = Board::starting_position();
        board.try_apply(mv("e2", "e4")).unwrap().commit();
        assert_eq!(board.piece_at(sq("e4")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.history_len(), 1);
    }

    #[test]
    fn clear_cache_empties_history() {
        let mut board = Board::starting_position();
        assert!(board.apply_move(mv("e2", "e4")));
        board.reverse_last_move();
        assert!(board.apply_move(mv("d2", "d4")));
        board.clear_cache();
        assert_eq!(board.history_len(), 0);
        board.clear_cache();
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    #[should_panic(expected = "empty undo history")]
    fn reverse_after_clear_cache_panics() {
        let mut board = Board::starting_position();
        assert!(board.apply_move(mv("e2", "e4")));
        board.reverse_last_move();
        board.clear_cache();
        board.reverse_last_move();
    }
}
