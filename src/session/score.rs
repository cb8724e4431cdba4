//! Running win/loss/draw tally across games.

use serde::{Deserialize, Serialize};

use crate::core::{Mark, HUMAN_MARK};
use crate::rules::GameStatus;

/// Win, loss and draw counters for a human-vs-engine session.
///
/// Serializes with the keys `player`, `ai` and `draw` so a stored tally
/// stays readable by a front end that already uses that layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    #[serde(rename = "player")]
    pub player_wins: u32,
    #[serde(rename = "ai")]
    pub engine_wins: u32,
    #[serde(rename = "draw")]
    pub draws: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. Returns `false` (and counts nothing) while
    /// the status is still in progress.
    pub fn record(&mut self, status: &GameStatus) -> bool {
        match status {
            GameStatus::InProgress => return false,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Won { mark, .. } if *mark == HUMAN_MARK => self.player_wins += 1,
            GameStatus::Won { .. } => self.engine_wins += 1,
        }
        true
    }

    /// Wins credited to `mark`.
    #[must_use]
    pub fn wins(&self, mark: Mark) -> u32 {
        if mark == HUMAN_MARK {
            self.player_wins
        } else {
            self.engine_wins
        }
    }

    /// Games counted so far.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player_wins + self.engine_wins + self.draws
    }

    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
