//! Error types for the game engine.
//!
//! Illegal moves are rejected with a typed error instead of being silently
//! dropped. Callers that want click-style "ignore bad input" behavior use
//! [`Session::try_play_human`](crate::session::Session::try_play_human).

use thiserror::Error;

use crate::core::Mark;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    /// Index is not in `0..9`.
    #[error("cell index is out of bounds")]
    OutOfBounds,
    /// Cell already holds a mark.
    #[error("cell is already taken by {0}")]
    Occupied(Mark),
    /// The game has already been won or drawn.
    #[error("the game is already over")]
    GameOver,
}

/// Errors produced by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A move was attempted that the rules do not allow.
    #[error("illegal move at cell {index}: {reason}")]
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },

    /// A mark tried to move out of turn.
    #[error("it is {expected}'s turn")]
    WrongTurn { expected: Mark },

    /// An internal precondition was broken by the caller.
    ///
    /// These indicate a defect in calling code and should never reach a user.
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    /// Difficulty name did not match any tier.
    #[error("unknown difficulty `{0}`")]
    UnknownDifficulty(String),

    /// Board text could not be parsed.
    #[error("invalid board `{0}`")]
    InvalidBoard(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A saved game is not consistent with its own move history.
    #[error("invalid game: {0}")]
    InvalidGame(String),
}

impl EngineError {
    /// Shorthand for an [`EngineError::IllegalMove`].
    #[must_use]
    pub fn illegal(index: usize, reason: IllegalMoveReason) -> Self {
        Self::IllegalMove { index, reason }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
