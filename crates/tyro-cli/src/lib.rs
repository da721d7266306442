//! Console front end for tyro: configuration, move sources, the turn loop
//! and saved games.

pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod snapshot;

pub use command::{Command, parse_command};
pub use config::GameConfig;
pub use error::CliError;
pub use game::{Game, Outcome};
pub use player::{ConsolePlayer, EnginePlayer, MoveSource, ScriptedPlayer, Turn};
pub use snapshot::Snapshot;
