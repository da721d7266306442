//! Console command parsing.

use std::path::PathBuf;

use tyro_core::{Coord, Move};

use crate::error::CliError;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<from> <to>` -- move the piece on `from` to `to`.
    Move(Move),
    /// `save [path]` -- write a snapshot, to the configured path if none is given.
    Save(Option<PathBuf>),
    /// `load [path]` -- restore a snapshot, from the configured path if none is given.
    Load(Option<PathBuf>),
    /// `board` -- print the board again.
    Show,
    /// `quit` -- abandon the game.
    Quit,
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["quit"] => Ok(Command::Quit),
        ["board"] => Ok(Command::Show),
        ["save"] => Ok(Command::Save(None)),
        ["save", path] => Ok(Command::Save(Some(PathBuf::from(path)))),
        ["load"] => Ok(Command::Load(None)),
        ["load", path] => Ok(Command::Load(Some(PathBuf::from(path)))),
        [from, to] => {
            let start = parse_square(from)?;
            let dest = parse_square(to)?;
            Ok(Command::Move(Move::new(start, dest)))
        }
        _ => Err(CliError::MalformedCommand {
            input: line.trim().to_string(),
        }),
    }
}

/// Parse a square name such as `e2`.
pub fn parse_square(name: &str) -> Result<Coord, CliError> {
    Coord::from_name(name).ok_or_else(|| CliError::InvalidSquare {
        name: name.to_string(),
    })
}
