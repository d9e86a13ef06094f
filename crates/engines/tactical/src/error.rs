//! Error types for move selection and engine configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by [`crate::Selector::select_move`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The host asked for a move in a finished game.
    #[error("position has no legal moves")]
    NoLegalMoves,

    /// Every legal move was scored, yet none was recorded as maximal
    /// (only possible when the evaluator returns NaN).
    #[error("no candidate move received a comparable score")]
    EmptyCandidateSet,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
}
