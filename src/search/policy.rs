//! Move-selection policies, one per difficulty tier.
//!
//! Policies are trait-based so tiers can be mixed or replaced:
//! - `RandomPolicy`: uniform over empty cells (`Easy`)
//! - `MinimaxPolicy`: exact search (`Impossible`)
//! - `BlendPolicy`: optimal with fixed probability, random otherwise (`Medium`)

use crate::core::{Board, Difficulty, EngineConfig, GameRng, Mark};
use crate::error::Result;

use super::minimax::MinimaxSearch;

/// Policy for choosing a cell to play.
pub trait MovePolicy: Send + Sync + std::fmt::Debug {
    /// Choose an empty cell for `mark`.
    ///
    /// Returns `None` if the board has no empty cell.
    fn choose(&self, board: &Board, mark: Mark, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose(&self, board: &Board, _mark: Mark, rng: &mut GameRng) -> Option<usize> {
        let moves = board.empty_cells();
        rng.choose(&moves).copied()
    }
}

/// Exact minimax policy. Ignores the RNG.
#[derive(Clone, Debug)]
pub struct MinimaxPolicy {
    pub alpha_beta: bool,
}

impl Default for MinimaxPolicy {
    fn default() -> Self {
        Self { alpha_beta: true }
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose(&self, board: &Board, mark: Mark, _rng: &mut GameRng) -> Option<usize> {
        MinimaxSearch::with_alpha_beta(self.alpha_beta)
            .search(board, mark)
            .map(|r| r.index)
    }
}

/// Plays the optimal move with probability `optimal_probability`,
/// otherwise a uniformly random one.
#[derive(Clone, Debug)]
pub struct BlendPolicy {
    pub optimal_probability: f64,
    pub optimal: MinimaxPolicy,
}

impl BlendPolicy {
    /// # Panics
    ///
    /// Panics if `optimal_probability` is outside `[0, 1]`.
    #[must_use]
    pub fn new(optimal_probability: f64, optimal: MinimaxPolicy) -> Self {
        assert!(
            (0.0..=1.0).contains(&optimal_probability),
            "Probability must be within [0, 1]"
        );
        Self {
            optimal_probability,
            optimal,
        }
    }
}

impl MovePolicy for BlendPolicy {
    fn choose(&self, board: &Board, mark: Mark, rng: &mut GameRng) -> Option<usize> {
        if rng.gen_bool(self.optimal_probability) {
            self.optimal.choose(board, mark, rng)
        } else {
            RandomPolicy.choose(board, mark, rng)
        }
    }
}

impl Difficulty {
    /// Build the policy for this tier after validating `config`.
    pub fn policy(self, config: &EngineConfig) -> Result<Box<dyn MovePolicy>> {
        config.validate()?;
        Ok(self.build_policy(config))
    }

    /// Build the policy for this tier. `config` must already be valid.
    pub(crate) fn build_policy(self, config: &EngineConfig) -> Box<dyn MovePolicy> {
        let optimal = MinimaxPolicy {
            alpha_beta: config.alpha_beta,
        };
        match self {
            Difficulty::Easy => Box::new(RandomPolicy),
            Difficulty::Medium => Box::new(BlendPolicy::new(
                config.medium_optimal_probability,
                optimal,
            )),
            Difficulty::Impossible => Box::new(optimal),
        }
    }
}
