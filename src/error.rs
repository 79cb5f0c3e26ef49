use thiserror::Error;

use crate::board::Action;

/// Errors raised by the board model, the search, and input parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move: cell {0:?} is not empty")]
    Occupied(Action),

    #[error("Illegal move: cell {0:?} is off the board")]
    OutOfBounds(Action),

    #[error("No legal actions available")]
    NoLegalActions,

    #[error("Game is already over")]
    GameOver,

    #[error("Invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("Invalid difficulty: {0:?}")]
    InvalidDifficulty(String),

    #[error("Invalid mark: {0:?}")]
    InvalidMark(String),
}

/// Convenience Result type for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
