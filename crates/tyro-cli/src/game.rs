//! The turn loop between two move sources.

use std::fmt;
use std::io::Write;

use tracing::{info, warn};
use tyro_core::{Board, GameStatus, Team};

use crate::error::CliError;
use crate::player::{MoveSource, Turn};
use crate::snapshot::Snapshot;

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Team },
    Stalemate,
    /// A player quit, or its input ran out.
    Abandoned,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            Outcome::Stalemate => write!(f, "stalemate"),
            Outcome::Abandoned => write!(f, "game abandoned"),
        }
    }
}

/// A game in progress: the board, the team to move and one source per team.
///
/// Boards and messages are written to `out`.
pub struct Game<W> {
    board: Board,
    to_move: Team,
    players: [Box<dyn MoveSource>; Team::COUNT],
    out: W,
}

impl<W: Write> Game<W> {
    /// Start a game from the opening position with White to move.
    pub fn new(white: Box<dyn MoveSource>, black: Box<dyn MoveSource>, out: W) -> Self {
        Self::from_snapshot(
            Snapshot::new(Board::starting_position(), Team::White),
            white,
            black,
            out,
        )
    }

    /// Resume a game from a snapshot.
    pub fn from_snapshot(
        snapshot: Snapshot,
        white: Box<dyn MoveSource>,
        black: Box<dyn MoveSource>,
        out: W,
    ) -> Self {
        Self {
            board: snapshot.board,
            to_move: snapshot.to_move,
            players: [white, black],
            out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Team {
        self.to_move
    }

    /// Consume the game and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Play turns until the game ends.
    ///
    /// Rejected moves and failed saves or loads are reported and the same
    /// team is asked again. Only I/O errors on the console end the loop early.
    pub fn run(&mut self) -> Result<Outcome, CliError> {
        writeln!(self.out, "{}", self.board.pretty())?;

        loop {
            let team = self.to_move;
            match self.board.game_status(team) {
                GameStatus::Checkmate => return self.finish(Outcome::Checkmate { winner: !team }),
                GameStatus::Stalemate => return self.finish(Outcome::Stalemate),
                GameStatus::InPlay => {}
            }

            let turn = self.players[team.index()].next_move(&mut self.board, team)?;
            match turn {
                Turn::Move(mv) => {
                    if !self.board.is_valid_move(mv, team) {
                        self.report(format_args!("invalid move: {mv}"))?;
                        continue;
                    }
                    if !self.board.apply_move(mv) {
                        self.report(format_args!("{mv} would leave king in check"))?;
                        continue;
                    }
                    // Played moves are never taken back, so the undo history is not kept.
                    self.board.clear_cache();
                    info!(%team, %mv, "move played");
                    writeln!(self.out, "{team} plays {mv}")?;
                    writeln!(self.out, "{}", self.board.pretty())?;
                    self.to_move = !team;
                }
                Turn::Save(path) => {
                    match Snapshot::new(self.board.clone(), team).save(&path) {
                        Ok(()) => writeln!(self.out, "saved to {}", path.display())?,
                        Err(e) => self.report(format_args!("save failed: {e}"))?,
                    }
                }
                Turn::Load(path) => match Snapshot::load(&path) {
                    Ok(snapshot) => {
                        self.board = snapshot.board;
                        self.to_move = snapshot.to_move;
                        writeln!(self.out, "loaded {}", path.display())?;
                        writeln!(self.out, "{}", self.board.pretty())?;
                    }
                    Err(e) => self.report(format_args!("load failed: {e}"))?,
                },
                Turn::Quit => return self.finish(Outcome::Abandoned),
            }
        }
    }

    fn report(&mut self, message: fmt::Arguments<'_>) -> Result<(), CliError> {
        warn!(team = %self.to_move, "{message}");
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<Outcome, CliError> {
        info!(%outcome, "game over");
        writeln!(self.out, "{outcome}")?;
        Ok(outcome)
    }
}
