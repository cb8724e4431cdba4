//! Game state machine: board, side to move, status, and history.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::core::{Board, Mark, MoveList, CELL_COUNT, HUMAN_MARK};
use crate::error::{EngineError, Result};

use super::engine::{apply_move, GameStatus};

/// A single game of tic-tac-toe.
///
/// Status moves from `InProgress` to `Won` or `Draw` exactly once; after
/// that every move is rejected until [`Game::reset`].
///
/// Status is not serialized. Loading replays the saved history and rejects
/// a record whose board or side to move disagrees with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameRecord", try_from = "GameRecord")]
pub struct Game {
    board: Board,
    status: GameStatus,
    to_move: Mark,
    first: Mark,
    history: SmallVec<[usize; CELL_COUNT]>,
}

/// Saved form of a [`Game`].
#[derive(Serialize, Deserialize)]
struct GameRecord {
    board: Board,
    to_move: Mark,
    first: Mark,
    history: SmallVec<[usize; CELL_COUNT]>,
}

impl From<Game> for GameRecord {
    fn from(game: Game) -> Self {
        Self {
            board: game.board,
            to_move: game.to_move,
            first: game.first,
            history: game.history,
        }
    }
}

impl TryFrom<GameRecord> for Game {
    type Error = EngineError;

    fn try_from(record: GameRecord) -> std::result::Result<Self, Self::Error> {
        let mut game = Game::starting_with(record.first);
        for &index in &record.history {
            game.apply_move(index)
                .map_err(|err| EngineError::InvalidGame(format!("history does not replay: {err}")))?;
        }
        if game.board != record.board {
            return Err(EngineError::InvalidGame("board does not match history".into()));
        }
        if game.to_move != record.to_move {
            return Err(EngineError::InvalidGame(format!(
                "{} to move does not match history",
                record.to_move
            )));
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// New game with the human (`X`) to move.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_with(HUMAN_MARK)
    }

    /// New game with `first` to move.
    #[must_use]
    pub fn starting_with(first: Mark) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress,
            to_move: first,
            first,
            history: SmallVec::new(),
        }
    }

    /// Clear the board and give the first move back to whoever opened.
    pub fn reset(&mut self) {
        *self = Self::starting_with(self.first);
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Mark whose turn it is. After the game ends this stays on the mark
    /// that made the final move.
    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Mark that opened this game.
    #[must_use]
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Cell indices in the order they were played.
    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Empty cells, or nothing once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        if self.is_over() {
            MoveList::new()
        } else {
            self.board.empty_cells()
        }
    }

    /// Place the side-to-move's mark at `index`.
    ///
    /// On success the turn passes to the other mark unless the move ended
    /// the game. Illegal moves leave the game untouched.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameStatus> {
        let mark = self.to_move;
        let status = apply_move(&mut self.board, index, mark)?;

        self.history.push(index);
        self.status = status;

        if status.is_terminal() {
            debug!(%status, moves = self.history.len(), "game finished");
        } else {
            self.to_move = mark.opponent();
        }
        Ok(status)
    }
}
