//! Game configuration from command-line arguments.

use std::path::PathBuf;

use tyro_core::Team;

use crate::error::CliError;

/// Settings for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Search depth in plies for the engine.
    pub depth: u8,
    /// Team played by the engine, or `None` for two console players.
    pub engine_team: Option<Team>,
    /// Default snapshot file for `save` and `load`.
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            depth: 4,
            engine_team: Some(Team::White),
            save_path: PathBuf::from("tyro-save.json"),
        }
    }
}

impl GameConfig {
    /// Build a configuration from arguments, program name excluded.
    ///
    /// Recognizes `--depth N`, `--engine white|black|none` and `--save PATH`.
    /// Anything else is rejected.
    pub fn from_args<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let value = match flag.as_str() {
                "--depth" | "--engine" | "--save" => {
                    args.next().ok_or_else(|| CliError::InvalidConfig {
                        flag: flag.clone(),
                        value: String::new(),
                    })?
                }
                _ => {
                    return Err(CliError::InvalidConfig {
                        flag: "argument".to_string(),
                        value: flag,
                    });
                }
            };

            match flag.as_str() {
                "--depth" => config.depth = parse_depth(&value)?,
                "--engine" => config.engine_team = parse_engine(&value)?,
                _ => config.save_path = PathBuf::from(value),
            }
        }

        Ok(config)
    }
}

fn parse_depth(value: &str) -> Result<u8, CliError> {
    match value.parse::<u8>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::InvalidConfig {
            flag: "--depth".to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_engine(value: &str) -> Result<Option<Team>, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "white" => Ok(Some(Team::White)),
        "black" => Ok(Some(Team::Black)),
        "none" => Ok(None),
        _ => Err(CliError::InvalidConfig {
            flag: "--engine".to_string(),
            value: value.to_string(),
        }),
    }
}
