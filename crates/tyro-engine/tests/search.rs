//! Integration tests for the fixed-depth searcher.
//!
//! Pruned search is compared against a plain minimax written here over the
//! public board API, so the two can only agree if pruning never changes the
//! chosen move or its value.

use tyro_core::{Board, Coord, GameStatus, Move, Team};
use tyro_engine::{INF, Searcher};

const MIDDLEGAME: &str = "r3k2r/ppp2ppp/2n1bn2/3qp3/3P4/2N1BN2/PPP1QPPP/R3K2R";

const TACTICS: &str = "4k3/1p3p2/2n5/3q4/4P3/2N2B2/5PPP/3RK3";

fn mv(from: &str, to: &str) -> Move {
    Move::new(Coord::from_name(from).unwrap(), Coord::from_name(to).unwrap())
}

/// Exhaustive minimax with the same leaf evaluation, node counting and root
/// tie-break as the searcher.
fn exhaustive(board: &mut Board, team: Team, max_depth: u8) -> (Option<Move>, i32, u64) {
    fn value(board: &mut Board, team: Team, depth: u8, max_depth: u8, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth >= max_depth {
            return board.evaluate(team);
        }
        let maximizing = depth % 2 == 0;
        let mover = if maximizing { team } else { team.flip() };
        let mut best = if maximizing { -INF } else { INF };
        for m in board.legal_moves(mover) {
            if !board.apply_move(m) {
                continue;
            }
            let v = value(board, team, depth + 1, max_depth, nodes);
            board.reverse_last_move();
            best = if maximizing { best.max(v) } else { best.min(v) };
        }
        best
    }

    let mut nodes = 0;
    let mut best = (None, -INF);
    for m in board.legal_moves(team) {
        if !board.apply_move(m) {
            continue;
        }
        let v = value(board, team, 1, max_depth, &mut nodes);
        board.reverse_last_move();
        if v >= best.1 {
            best = (Some(m), v);
        }
    }
    (best.0, best.1, nodes)
}

fn assert_matches_exhaustive(layout: &str, team: Team, depth: u8) {
    let mut board: Board = layout.parse().unwrap();
    let (expected_move, expected_score, full_nodes) = exhaustive(&mut board, team, depth);
    let result = Searcher::new(depth).search(&mut board, team);

    assert_eq!(result.score, expected_score, "{layout} depth {depth}: score");
    assert_eq!(result.best_move, expected_move, "{layout} depth {depth}: move");
    assert!(
        result.nodes <= full_nodes,
        "pruned search visited {} nodes, exhaustive {}",
        result.nodes,
        full_nodes
    );
}

#[test]
fn pruning_agrees_with_exhaustive_minimax_depth_2() {
    assert_matches_exhaustive(MIDDLEGAME, Team::White, 2);
    assert_matches_exhaustive(MIDDLEGAME, Team::Black, 2);
    assert_matches_exhaustive(TACTICS, Team::White, 2);
}

#[test]
fn pruning_agrees_with_exhaustive_minimax_depth_3() {
    assert_matches_exhaustive(TACTICS, Team::White, 3);
    assert_matches_exhaustive(TACTICS, Team::Black, 3);
}

#[test]
fn pruning_saves_work_from_start() {
    let mut board = Board::starting_position();
    let (_, _, full_nodes) = exhaustive(&mut board, Team::White, 3);
    let result = Searcher::new(3).search(&mut board, Team::White);
    assert!(result.nodes < full_nodes);
}

#[test]
fn engine_avoids_losing_its_queen() {
    // The white queen on d4 is attacked by the pawn on e5.
    let mut board: Board = "4k3/8/8/4p3/3Q4/8/8/4K3".parse().unwrap();
    let best = Searcher::new(2).pick_move(&mut board, Team::White).unwrap();
    assert_eq!(best.start(), Coord::from_name("d4").unwrap());
    assert!(board.apply_move(best));
    assert!(board.piece_at(best.dest()).is_some());
}

#[test]
fn self_play_keeps_board_consistent() {
    let mut board = Board::starting_position();
    let searcher = Searcher::new(2);
    let mut team = Team::White;

    for _ in 0..12 {
        if board.game_status(team) != GameStatus::InPlay {
            break;
        }
        let best = searcher.pick_move(&mut board, team).unwrap();
        assert!(board.is_valid_move(best, team), "{best} is not legal for {team}");
        assert!(board.apply_move(best));
        board.validate().unwrap();
        team = team.flip();
    }
}

#[test]
fn mate_in_one_for_black() {
    // Fool's mate: Qh4 is the only mating move.
    let mut board = Board::starting_position();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
        assert!(board.apply_move(mv(from, to)));
    }
    let result = Searcher::new(2).search(&mut board, Team::Black);
    assert_eq!(result.best_move, Some(mv("d8", "h4")));
    assert_eq!(result.score, INF);
}
