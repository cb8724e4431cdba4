//! Win/draw detection and move legality.
//!
//! Status is always derived from the board. Nothing here stores state;
//! [`Game`](super::Game) wraps these functions with turn tracking.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Mark, WinningLine, CELL_COUNT, WINNING_LINES};
use crate::error::{EngineError, IllegalMoveReason, Result};

/// Status of a game, derived from its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still possible.
    InProgress,
    /// `mark` owns all three cells of `line`.
    Won { mark: Mark, line: WinningLine },
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Winning mark, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Winning line, if any.
    #[must_use]
    pub const fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won { mark, line } => write!(f, "{} wins on {:?}", mark, line.cells()),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// First line (in table order) owned by a single mark.
#[must_use]
pub fn find_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    WINNING_LINES
        .iter()
        .find_map(|&line| board.line_owner(line).map(|mark| (mark, line)))
}

/// Compute the status of `board`.
///
/// A winning line takes precedence over a full board, so a board filled by
/// its winning move reports `Won`, not `Draw`.
#[must_use]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((mark, line)) = find_winner(board) {
        GameStatus::Won { mark, line }
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Check that a mark may be placed at `index`, without touching the board.
pub fn check_move(board: &Board, index: usize) -> Result<()> {
    if index >= CELL_COUNT {
        return Err(EngineError::illegal(index, IllegalMoveReason::OutOfBounds));
    }
    if evaluate(board).is_terminal() {
        return Err(EngineError::illegal(index, IllegalMoveReason::GameOver));
    }
    if let Some(owner) = board.mark_at(index) {
        return Err(EngineError::illegal(index, IllegalMoveReason::Occupied(owner)));
    }
    Ok(())
}

/// Place `mark` at `index` and return the new status.
///
/// The move must target an empty cell on a board that is still in progress.
/// Illegal moves are rejected and leave `board` unchanged. Turn order is not
/// checked here.
pub fn apply_move(board: &mut Board, index: usize, mark: Mark) -> Result<GameStatus> {
    check_move(board, index)?;
    board.place(index, mark);
    Ok(evaluate(board))
}
