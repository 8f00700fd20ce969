//! Error types for chess_rules

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("illegal move: {notation}")]
    IllegalMove { notation: String },

    #[error("no move to undo")]
    EmptyHistoryUndo,

    #[error("invalid position: {0}")]
    InvalidPosition(String),

    #[error("invalid square: {0}")]
    InvalidSquare(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
