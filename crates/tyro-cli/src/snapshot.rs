//! Saving and restoring a game as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;
use tyro_core::{Board, Team};

use crate::error::CliError;

/// A saved game: the board, undo history included, and the team to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub to_move: Team,
}

impl Snapshot {
    pub fn new(board: Board, to_move: Team) -> Self {
        Self { board, to_move }
    }

    /// Encode the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a snapshot and validate its board for the team to move.
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        snapshot.board.validate_turn(snapshot.to_move)?;
        Ok(snapshot)
    }

    /// Write the snapshot to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), to_move = %self.to_move, "game saved");
        Ok(())
    }

    /// Read and validate a snapshot from `path`.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let json = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&json)?;
        info!(path = %path.display(), to_move = %snapshot.to_move, "game loaded");
        Ok(snapshot)
    }
}
