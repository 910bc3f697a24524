//! Error types for the ttt crate

use thiserror::Error;

use crate::grid::Grid;

/// Main error type for the ttt crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal moves available")]
    EmptyMoveSet,

    #[error("grid {grid} could not be found in saved states")]
    StateNotFound { grid: Grid },

    #[error("agent has no current state; call update_grid first")]
    NoCurrentState,

    #[error("invalid cell value {value} (expected 0, 1 or 2)")]
    InvalidCell { value: u8 },

    #[error("invalid move: position {position} is occupied or off the board")]
    InvalidMove { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid sequence key '{key}' (expected a non-negative integer)")]
    InvalidSequenceKey { key: String },

    #[error("value array has {got} entries but the state has {expected} transitions")]
    ValueLengthMismatch { expected: usize, got: usize },

    #[error("invalid move policy '{input}'. Expected one of: {expected}")]
    ParseMovePolicy { input: String, expected: String },

    #[error("input channel closed before a legal move was entered")]
    InputClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
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
