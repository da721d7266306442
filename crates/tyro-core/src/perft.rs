//! Perft (performance test) for move generation and make/unmake verification.

use crate::board::Board;
use crate::team::Team;

/// Count the leaf nodes of the game tree of the given depth, `team` to move.
///
/// Depth 0 returns 1 (the current position). Only moves accepted by
/// [`Board::apply_move`] are counted. The board is restored before returning.
pub fn perft(board: &mut Board, team: Team, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in board.legal_moves(team) {
        if let Some(mut child) = board.try_apply(mv) {
            nodes += perft(&mut child, team.flip(), depth - 1);
        }
    }
    nodes
}
