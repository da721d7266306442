//! Move selection by fixed-depth minimax with alpha-beta pruning.

mod minimax;

use tracing::debug;
use tyro_core::{Board, Move, Team};

use minimax::{SearchContext, min_value};

pub use minimax::INF;

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, or `None` if every move leaves the king in check.
    pub best_move: Option<Move>,
    /// Value of the best move from the searching team's point of view.
    /// `-INF` when there is no move.
    pub score: i32,
    /// Positions visited below the root.
    pub nodes: u64,
    /// Depth searched, in plies.
    pub depth: u8,
}

/// Fixed-depth searcher.
///
/// The searcher explores every line to exactly `depth` plies and scores the
/// leaves with [`Board::evaluate`]. There is no iterative deepening and no
/// time limit; a search always runs to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    depth: u8,
}

impl Searcher {
    /// Create a searcher for the given depth in plies (at least 1).
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
        }
    }

    /// Return the search depth in plies.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Pick a move for `team`, or `None` if it has no move that keeps its king safe.
    pub fn pick_move(&self, board: &mut Board, team: Team) -> Option<Move> {
        self.search(board, team).best_move
    }

    /// Search the position for `team` to move.
    ///
    /// Each root move is searched with a full window. When two moves score
    /// the same, the one generated later wins. The board is restored and its
    /// undo history cleared before returning.
    pub fn search(&self, board: &mut Board, team: Team) -> SearchResult {
        let mut ctx = SearchContext {
            max_depth: self.depth,
            team,
            nodes: 0,
        };

        let mut best_move = None;
        let mut best_score = -INF;

        for mv in board.legal_moves(team) {
            let Some(mut child) = board.try_apply(mv) else {
                continue;
            };
            let score = min_value(&mut child, 1, -INF, INF, &mut ctx);
            drop(child);

            if score >= best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        board.clear_cache();

        debug!(
            %team,
            depth = self.depth,
            nodes = ctx.nodes,
            score = best_score,
            best = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            nodes: ctx.nodes,
            depth: self.depth,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(4)
    }
}
