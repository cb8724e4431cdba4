//! Human-vs-engine session: one game at a time plus a running tally.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{Difficulty, EngineConfig, GameRng, GameRngState, Mark, ENGINE_MARK, HUMAN_MARK};
use crate::error::{EngineError, Result};
use crate::rules::{Game, GameStatus};
use crate::search::MovePolicy;

use super::score::ScoreTally;

/// What happened during one human turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Cell the human played.
    pub human_move: usize,
    /// Cell the engine answered with, if the game was still going.
    pub engine_move: Option<usize>,
    /// Status after both moves.
    pub status: GameStatus,
}

/// A sequence of games between a human (`X`) and the engine (`O`).
///
/// The session owns the current [`Game`], the [`ScoreTally`] and the
/// seeded RNG. The tally changes only when a game reaches a terminal
/// status, and only once per game.
#[derive(Debug)]
pub struct Session {
    config: EngineConfig,
    game: Game,
    tally: ScoreTally,
    rng: GameRng,
    policy: Box<dyn MovePolicy>,
}

impl Session {
    /// Fresh session: empty board, zeroed tally, human to move.
    ///
    /// Fails with [`EngineError::InvalidConfig`] if `config` is out of range.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Resume with a saved tally and RNG position.
    pub fn resume(
        config: EngineConfig,
        tally: ScoreTally,
        rng_state: &GameRngState,
    ) -> Result<Self> {
        let mut session = Self::with_rng(config, GameRng::from_state(rng_state))?;
        session.tally = tally;
        Ok(session)
    }

    fn with_rng(config: EngineConfig, rng: GameRng) -> Result<Self> {
        let policy = config.difficulty.policy(&config)?;
        Ok(Self {
            config,
            game: Game::new(),
            tally: ScoreTally::default(),
            rng,
            policy,
        })
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current RNG position, for [`Session::resume`].
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Play the human's move and, if the game goes on, the engine's reply.
    #[instrument(skip(self), fields(difficulty = %self.config.difficulty))]
    pub fn play_human(&mut self, index: usize) -> Result<TurnOutcome> {
        if !self.game.is_over() && self.game.to_move() != HUMAN_MARK {
            return Err(EngineError::WrongTurn {
                expected: self.game.to_move(),
            });
        }

        let mut status = self.game.apply_move(index)?;
        let mut engine_move = None;

        if status.is_terminal() {
            self.finish(status);
        } else {
            let reply = self.engine_move()?;
            engine_move = Some(reply);
            status = self.game.status();
        }

        Ok(TurnOutcome {
            human_move: index,
            engine_move,
            status,
        })
    }

    /// Like [`Session::play_human`], but illegal input is ignored instead
    /// of reported, the way a board UI ignores clicks on taken cells.
    pub fn try_play_human(&mut self, index: usize) -> Option<TurnOutcome> {
        match self.play_human(index) {
            Ok(outcome) => Some(outcome),
            Err(err) => {
                debug!(index, %err, "ignoring move");
                None
            }
        }
    }

    /// Let the engine play on its own turn. Returns the chosen cell.
    pub fn engine_move(&mut self) -> Result<usize> {
        if self.game.is_over() {
            return Err(EngineError::InvariantViolation(
                "engine asked to move after the game ended",
            ));
        }
        if self.game.to_move() != ENGINE_MARK {
            return Err(EngineError::WrongTurn {
                expected: self.game.to_move(),
            });
        }

        let index = self
            .policy
            .choose(self.game.board(), ENGINE_MARK, &mut self.rng)
            .ok_or(EngineError::InvariantViolation(
                "engine asked to move on a board with no empty cells",
            ))?;
        debug!(index, "engine move");

        let status = self.game.apply_move(index)?;
        if status.is_terminal() {
            self.finish(status);
        }
        Ok(index)
    }

    /// Start a new game with the human to move. The tally is kept.
    pub fn restart(&mut self) {
        self.restart_with(HUMAN_MARK);
    }

    /// Start a new game with `first` to move. When the engine opens, call
    /// [`Session::engine_move`] before the human plays.
    pub fn restart_with(&mut self, first: Mark) {
        self.game = Game::starting_with(first);
        debug!(%first, "new game");
    }

    /// Zero the tally and start a new game.
    pub fn reset_scores(&mut self) {
        self.tally.reset();
        info!("scores reset");
        self.restart();
    }

    /// Switch tier and start a new game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
        // Validated when the session was built; difficulty has no range.
        self.policy = difficulty.build_policy(&self.config);
        info!(%difficulty, "difficulty changed");
        self.restart();
    }

    fn finish(&mut self, status: GameStatus) {
        self.tally.record(&status);
        info!(
            %status,
            player = self.tally.player_wins,
            ai = self.tally.engine_wins,
            draw = self.tally.draws,
            "game over"
        );
    }
}
