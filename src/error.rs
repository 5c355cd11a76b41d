//! Error types for the evoxo crate

use thiserror::Error;

/// Main error type for the evoxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("strategy returned occupied square {index} for position '{position}'")]
    SquareOccupied { index: usize, position: String },

    #[error("move index {index} is out of bounds (must be 0-8) for position '{position}'")]
    InvalidMoveIndex { index: usize, position: String },

    #[error("table strategy has no entry for position '{position}'")]
    UndefinedPosition { position: String },

    #[error(
        "table strategy stores occupied square {index} for position '{position}' (table was built incorrectly)"
    )]
    TableMoveOccupied { index: usize, position: String },

    #[error("no blank square to play on board '{position}'")]
    BoardFull { position: String },

    #[error("board string too short: expected {expected} squares, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at square {index} in '{context}'")]
    InvalidSquareCharacter {
        character: char,
        index: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("duplicate entry for position '{position}' in strategy file")]
    DuplicateStrategyEntry { position: String },

    #[error("unsupported strategy file version {version} (expected {expected})")]
    UnsupportedVersion { version: u32, expected: u32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
