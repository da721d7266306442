//! Front-end errors.

use tyro_core::BoardError;

/// Errors raised while reading commands, configuring or persisting a game.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A square name is not a file letter `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square: {name}")]
    InvalidSquare {
        /// The text that failed to parse.
        name: String,
    },

    /// Console input did not match any known command.
    #[error("malformed command: {input}")]
    MalformedCommand {
        /// The offending input line.
        input: String,
    },

    /// A command-line argument is missing its value or has a bad one.
    #[error("invalid value for {flag}: {value}")]
    InvalidConfig {
        /// The flag being parsed.
        flag: String,
        /// The value that was rejected.
        value: String,
    },

    /// An I/O error occurred while reading input or a snapshot file.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot format error: {source}")]
    Snapshot {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// A snapshot decoded but describes an unusable board.
    #[error("snapshot holds an invalid board: {source}")]
    InvalidSnapshot {
        /// Why the board was rejected.
        #[from]
        source: BoardError,
    },
}
