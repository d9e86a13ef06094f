//! Error types for position setup and move-token parsing.

use thiserror::Error;

/// Reasons a FEN string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 fields, found {found}")]
    MissingFields { found: usize },

    #[error("expected 8 ranks in board section, found {found}")]
    RankCount { found: usize },

    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: usize },

    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),

    #[error("invalid side to move '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling character '{0}'")]
    InvalidCastling(char),

    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),

    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
}

/// Reasons a coordinate move token (`e2e4`, `e7e8q`) or `position` command is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    #[error("move token '{0}' must be 4 or 5 characters")]
    TokenLength(String),

    #[error("invalid square in move token '{0}'")]
    InvalidSquare(String),

    #[error("invalid promotion piece in move token '{0}'")]
    InvalidPromotion(String),

    #[error("move '{0}' is not legal in this position")]
    IllegalMove(String),

    #[error("position command must start with 'startpos' or 'fen'")]
    MissingPosition,

    #[error(transparent)]
    Fen(#[from] FenError),
}
