//! Sources of moves: the engine, a console user, or a fixed script.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use tracing::{debug, info, warn};
use tyro_core::{Board, Move, Team};
use tyro_engine::Searcher;

use crate::command::{Command, parse_command};
use crate::error::CliError;

/// What a player wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    Move(Move),
    Save(PathBuf),
    Load(PathBuf),
    Quit,
}

/// Something that decides a team's turns.
///
/// Calls block until the source has decided. The board may be searched but
/// must be left as it was found.
pub trait MoveSource {
    fn next_move(&mut self, board: &mut Board, team: Team) -> Result<Turn, CliError>;
}

/// A source shared by both teams, e.g. one console for two people.
impl<M: MoveSource> MoveSource for Rc<RefCell<M>> {
    fn next_move(&mut self, board: &mut Board, team: Team) -> Result<Turn, CliError> {
        self.borrow_mut().next_move(board, team)
    }
}

/// Plays the move chosen by a fixed-depth search.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    searcher: Searcher,
}

impl EnginePlayer {
    pub fn new(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(depth),
        }
    }
}

impl MoveSource for EnginePlayer {
    fn next_move(&mut self, board: &mut Board, team: Team) -> Result<Turn, CliError> {
        let result = self.searcher.search(board, team);
        match result.best_move {
            Some(mv) => {
                info!(%team, %mv, score = result.score, nodes = result.nodes, "engine move");
                Ok(Turn::Move(mv))
            }
            None => {
                warn!(%team, "engine has no move");
                Ok(Turn::Quit)
            }
        }
    }
}

/// Reads commands line by line, typically from stdin, and writes prompts to `out`.
///
/// `board` reprints the position and malformed input is reported; both ask
/// again. End of input counts as `quit`.
pub struct ConsolePlayer<R, W> {
    input: R,
    out: W,
    save_path: PathBuf,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Create a console player; `save_path` is used by `save` and `load` without a path.
    pub fn new(input: R, out: W, save_path: PathBuf) -> Self {
        Self {
            input,
            out,
            save_path,
        }
    }

    /// Consume the player and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> MoveSource for ConsolePlayer<R, W> {
    fn next_move(&mut self, board: &mut Board, team: Team) -> Result<Turn, CliError> {
        let mut line = String::new();
        loop {
            writeln!(self.out, "{team} to move:")?;
            self.out.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("console input closed");
                return Ok(Turn::Quit);
            }
            if line.trim().is_empty() {
                continue;
            }

            match parse_command(&line) {
                Ok(Command::Move(mv)) => return Ok(Turn::Move(mv)),
                Ok(Command::Save(path)) => {
                    return Ok(Turn::Save(path.unwrap_or_else(|| self.save_path.clone())));
                }
                Ok(Command::Load(path)) => {
                    return Ok(Turn::Load(path.unwrap_or_else(|| self.save_path.clone())));
                }
                Ok(Command::Quit) => return Ok(Turn::Quit),
                Ok(Command::Show) => writeln!(self.out, "{}", board.pretty())?,
                Err(e) => {
                    warn!(error = %e, "bad console input");
                    writeln!(self.out, "{e}")?;
                }
            }
        }
    }
}

/// Replays a fixed list of turns, then quits.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    turns: VecDeque<Turn>,
}

impl ScriptedPlayer {
    pub fn new(turns: impl IntoIterator<Item = Turn>) -> Self {
        Self {
            turns: turns.into_iter().collect(),
        }
    }

    /// Script that plays the given moves in order.
    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Self {
        Self::new(moves.into_iter().map(Turn::Move))
    }

    /// Number of turns not yet played.
    pub fn remaining(&self) -> usize {
        self.turns.len()
    }
}

impl MoveSource for ScriptedPlayer {
    fn next_move(&mut self, _board: &mut Board, _team: Team) -> Result<Turn, CliError> {
        Ok(self.turns.pop_front().unwrap_or(Turn::Quit))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use tyro_core::Coord;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(Coord::from_name(from).unwrap(), Coord::from_name(to).unwrap())
    }

    #[test]
    fn console_reads_moves_and_commands() {
        let input = Cursor::new("\nboard\nnonsense here ok\ne2 e4\nsave\nload other.json\nquit\n");
        let mut player = ConsolePlayer::new(input, Vec::new(), PathBuf::from("default.json"));
        let mut board = Board::starting_position();

        let mut next = || player.next_move(&mut board, Team::White).unwrap();
        assert_eq!(next(), Turn::Move(mv("e2", "e4")));
        assert_eq!(next(), Turn::Save(PathBuf::from("default.json")));
        assert_eq!(next(), Turn::Load(PathBuf::from("other.json")));
        assert_eq!(next(), Turn::Quit);
        assert_eq!(next(), Turn::Quit);
    }

    #[test]
    fn console_output_goes_to_its_sink() {
        let input = Cursor::new("board\ne2\ne2 e4\n");
        let mut player = ConsolePlayer::new(input, Vec::new(), PathBuf::from("default.json"));
        let mut board = Board::starting_position();
        assert_eq!(
            player.next_move(&mut board, Team::White).unwrap(),
            Turn::Move(mv("e2", "e4"))
        );

        let out = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(out.matches("White to move:").count(), 3);
        assert!(out.contains("1  R N B Q K B N R"));
        assert!(out.contains("malformed command: e2"));
    }

    #[test]
    fn scripted_player_quits_when_exhausted() {
        let mut player = ScriptedPlayer::from_moves([mv("e2", "e4")]);
        let mut board = Board::starting_position();
        assert_eq!(player.remaining(), 1);
        assert_eq!(
            player.next_move(&mut board, Team::White).unwrap(),
            Turn::Move(mv("e2", "e4"))
        );
        assert_eq!(player.next_move(&mut board, Team::White).unwrap(), Turn::Quit);
    }

    #[test]
    fn shared_source_serves_both_teams() {
        let shared = Rc::new(RefCell::new(ScriptedPlayer::from_moves([
            mv("e2", "e4"),
            mv("e7", "e5"),
        ])));
        let mut white = Rc::clone(&shared);
        let mut black = Rc::clone(&shared);
        let mut board = Board::starting_position();
        assert_eq!(
            white.next_move(&mut board, Team::White).unwrap(),
            Turn::Move(mv("e2", "e4"))
        );
        assert_eq!(
            black.next_move(&mut board, Team::Black).unwrap(),
            Turn::Move(mv("e7", "e5"))
        );
        assert_eq!(shared.borrow().remaining(), 0);
    }

    #[test]
    fn engine_player_leaves_board_untouched() {
        let mut board = Board::starting_position();
        let mut player = EnginePlayer::new(2);
        let turn = player.next_move(&mut board, Team::Black).unwrap();
        assert!(matches!(turn, Turn::Move(m) if board.is_valid_move(m, Team::Black)));
        assert_eq!(board, Board::starting_position());
    }
}
