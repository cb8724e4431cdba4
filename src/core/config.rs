//! Engine configuration: difficulty tiers and search tuning.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// Probability that the `Medium` tier plays the minimax-optimal move
/// instead of a uniformly random one.
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.6;

/// Engine strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Optimal move with probability [`MEDIUM_OPTIMAL_PROBABILITY`], random otherwise.
    #[default]
    Medium,
    /// Exact minimax. Never loses.
    Impossible,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Impossible];

    /// Lowercase name used in configuration and parsing.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "impossible" => Ok(Difficulty::Impossible),
            _ => Err(EngineError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Engine configuration.
///
/// Deserialization runs [`EngineConfig::validate`], so a loaded config is
/// always in range. Configs built field by field are checked again when a
/// policy is built from them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEngineConfig")]
pub struct EngineConfig {
    /// Strength tier used for engine moves.
    pub difficulty: Difficulty,

    /// Seed for the move-selection RNG.
    /// Same seed and same human moves produce the same game.
    pub seed: u64,

    /// Chance that `Medium` plays the optimal move.
    pub medium_optimal_probability: f64,

    /// Use alpha-beta pruning. Results are identical to plain minimax;
    /// only the number of visited nodes changes.
    pub alpha_beta: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: 42,
            medium_optimal_probability: MEDIUM_OPTIMAL_PROBABILITY,
            alpha_beta: true,
        }
    }
}

/// Unchecked wire form of [`EngineConfig`].
#[derive(Deserialize)]
struct RawEngineConfig {
    difficulty: Difficulty,
    seed: u64,
    medium_optimal_probability: f64,
    alpha_beta: bool,
}

impl TryFrom<RawEngineConfig> for EngineConfig {
    type Error = EngineError;

    fn try_from(raw: RawEngineConfig) -> Result<Self, Self::Error> {
        let config = Self {
            difficulty: raw.difficulty,
            seed: raw.seed,
            medium_optimal_probability: raw.medium_optimal_probability,
            alpha_beta: raw.alpha_beta,
        };
        config.validate()?;
        Ok(config)
    }
}

impl EngineConfig {
    /// Check that every field is in range.
    ///
    /// NaN probabilities are rejected along with values outside `[0, 1]`.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(0.0..=1.0).contains(&self.medium_optimal_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "medium_optimal_probability must be within [0, 1], got {}",
                self.medium_optimal_probability
            )));
        }
        Ok(())
    }

    /// Set the difficulty tier.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the `Medium` optimal-move probability.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is outside `[0, 1]`.
    #[must_use]
    pub fn with_medium_optimal_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be within [0, 1]"
        );
        self.medium_optimal_probability = probability;
        self
    }

    /// Enable or disable alpha-beta pruning.
    #[must_use]
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}
