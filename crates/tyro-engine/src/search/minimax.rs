//! Fixed-depth minimax with alpha-beta pruning over a single mutable board.

use tyro_core::{Board, Team};

/// Score bound above any reachable material balance.
pub const INF: i32 = 30_000;

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext {
    /// Depth at which positions are evaluated statically.
    pub max_depth: u8,
    /// The team the search maximizes for.
    pub team: Team,
    /// Positions visited, leaves included.
    pub nodes: u64,
}

/// Opponent to move: return the lowest score it can force, bounded by `beta`.
pub(super) fn min_value(
    board: &mut Board,
    depth: u8,
    alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;
    if depth >= ctx.max_depth {
        return board.evaluate(ctx.team);
    }

    for mv in board.legal_moves(ctx.team.flip()) {
        let Some(mut child) = board.try_apply(mv) else {
            continue;
        };
        beta = beta.min(max_value(&mut child, depth + 1, alpha, beta, ctx));
        drop(child);

        if alpha >= beta {
            break;
        }
    }

    beta
}

/// Searching team to move: return the highest score it can force, bounded by `alpha`.
pub(super) fn max_value(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;
    if depth >= ctx.max_depth {
        return board.evaluate(ctx.team);
    }

    for mv in board.legal_moves(ctx.team) {
        let Some(mut child) = board.try_apply(mv) else {
            continue;
        };
        alpha = alpha.max(min_value(&mut child, depth + 1, alpha, beta, ctx));
        drop(child);

        if alpha >= beta {
            break;
        }
    }

    alpha
}
