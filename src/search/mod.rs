//! Engine move selection.
//!
//! ## Overview
//!
//! The engine plays `O` and searches with minimax, `O` maximizing and `X`
//! minimizing. Difficulty tiers dilute the search with random moves:
//!
//! | Tier | Policy |
//! |---|---|
//! | `Easy` | uniform random over empty cells |
//! | `Medium` | optimal with probability 0.6, random otherwise |
//! | `Impossible` | always optimal |
//!
//! ## Usage
//!
//! ```rust
//! use tictac_engine::core::{Board, Difficulty, GameRng};
//! use tictac_engine::search::select_move;
//!
//! let board: Board = "XX./OO./..X".parse().unwrap();
//! let mut rng = GameRng::new(42);
//!
//! // The engine takes the win on the middle row.
//! assert_eq!(select_move(&board, Difficulty::Impossible, &mut rng), 5);
//! ```

pub mod minimax;
pub mod policy;
pub mod stats;

pub use minimax::{best_move, best_move_for, terminal_score, MinimaxSearch, SearchResult, WIN_SCORE};
pub use policy::{BlendPolicy, MinimaxPolicy, MovePolicy, RandomPolicy};
pub use stats::SearchStats;

use tracing::{debug, instrument};

use crate::core::{Board, Difficulty, EngineConfig, GameRng, ENGINE_MARK};
use crate::error::{EngineError, Result};

const NO_EMPTY_CELLS: &str = "select_move called on a board with no empty cells";

/// Choose the engine's move with the default configuration.
///
/// # Panics
///
/// Panics if `board` has no empty cell. Callers only ask for a move while
/// the game is in progress, so this signals a bug in the caller.
pub fn select_move(board: &Board, difficulty: Difficulty, rng: &mut GameRng) -> usize {
    match try_select_move(board, difficulty, rng) {
        Ok(index) => index,
        Err(_) => panic!("{NO_EMPTY_CELLS}"),
    }
}

/// Checked form of [`select_move`].
pub fn try_select_move(board: &Board, difficulty: Difficulty, rng: &mut GameRng) -> Result<usize> {
    let config = EngineConfig::default().with_difficulty(difficulty);
    select_move_with(board, &config, rng)
}

/// Choose the engine's move using every setting in `config`.
///
/// Returns [`EngineError::InvalidConfig`] for an out-of-range config and
/// [`EngineError::InvariantViolation`] when the board is full.
#[instrument(skip(board, rng), fields(difficulty = %config.difficulty))]
pub fn select_move_with(board: &Board, config: &EngineConfig, rng: &mut GameRng) -> Result<usize> {
    let index = config
        .difficulty
        .policy(config)?
        .choose(board, ENGINE_MARK, rng)
        .ok_or(EngineError::InvariantViolation(NO_EMPTY_CELLS))?;

    debug!(index, "engine selected move");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_move_returns_empty_cell() {
        let board: Board = "XOX/.O./X..".parse().unwrap();
        let mut rng = GameRng::new(11);
        for difficulty in Difficulty::ALL {
            for _ in 0..10 {
                let index = select_move(&board, difficulty, &mut rng);
                assert!(board.is_empty_at(index));
            }
        }
    }

    #[test]
    fn test_try_select_move_on_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        let mut rng = GameRng::new(0);
        assert_eq!(
            try_select_move(&board, Difficulty::Easy, &mut rng),
            Err(EngineError::InvariantViolation(NO_EMPTY_CELLS))
        );
    }

    #[test]
    #[should_panic(expected = "select_move called on a board with no empty cells")]
    fn test_select_move_panics_on_full_board() {
        let board: Board = "XOX/OXO/OXO".parse().unwrap();
        select_move(&board, Difficulty::Impossible, &mut GameRng::new(0));
    }

    #[test]
    fn test_exhaustive_and_pruned_configs_agree() {
        let board: Board = "X../.../...".parse().unwrap();
        let pruned = EngineConfig::default().with_difficulty(Difficulty::Impossible);
        let exhaustive = pruned.clone().with_alpha_beta(false);
        let mut rng = GameRng::new(0);

        assert_eq!(
            select_move_with(&board, &pruned, &mut rng).unwrap(),
            select_move_with(&board, &exhaustive, &mut rng).unwrap()
        );
    }

    #[test]
    fn test_select_move_with_invalid_config() {
        let config = EngineConfig {
            medium_optimal_probability: f64::NAN,
            ..EngineConfig::default()
        };
        let mut rng = GameRng::new(0);
        assert!(matches!(
            select_move_with(&Board::new(), &config, &mut rng),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
