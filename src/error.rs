//! Error types for the qslide crate

use thiserror::Error;

use crate::identifiers::StateKey;

/// Main error type for the qslide crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("reward reported for unknown state '{key}'")]
    UnknownState { key: StateKey },

    #[error("invalid action id {id} (expected 0-3)")]
    InvalidAction { id: u8 },

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("value store unavailable: failed to {operation}: {source}")]
    Store {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("episode log unavailable: failed to {operation}: {source}")]
    EpisodeLog {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to {operation}: {message}")]
    Serialization { operation: String, message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
