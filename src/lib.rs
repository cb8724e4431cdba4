//! # tictac-engine
//!
//! A tic-tac-toe engine: board state machine, win/draw detection, and a
//! minimax opponent with three difficulty tiers.
//!
//! ## Design Principles
//!
//! 1. **Derived status**: game status is always computed from the board,
//!    never tracked separately.
//!
//! 2. **Explicit rejection**: illegal moves return a typed error and leave
//!    state untouched. The session layer offers a permissive variant that
//!    ignores them instead.
//!
//! 3. **Seeded randomness**: every random choice draws from a seeded
//!    `GameRng`, so games are reproducible.
//!
//! ## Modules
//!
//! - `core`: marks, board, winning lines, RNG, configuration
//! - `rules`: `evaluate`, `apply_move`, and the `Game` state machine
//! - `search`: minimax, difficulty policies, `select_move`
//! - `session`: human-vs-engine loop with a score tally
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use tictac_engine::core::{Difficulty, EngineConfig};
//! use tictac_engine::rules::GameStatus;
//! use tictac_engine::session::Session;
//!
//! let config = EngineConfig::default().with_difficulty(Difficulty::Impossible);
//! let mut session = Session::new(config).unwrap();
//!
//! let outcome = session.play_human(0).unwrap();
//! assert_eq!(outcome.engine_move, Some(4));
//! assert_eq!(outcome.status, GameStatus::InProgress);
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Difficulty, EngineConfig, GameRng, GameRngState, Mark, WinningLine,
    ENGINE_MARK, HUMAN_MARK, WINNING_LINES,
};

pub use crate::error::{EngineError, IllegalMoveReason, Result};

pub use crate::rules::{apply_move, evaluate, Game, GameStatus};

pub use crate::search::{
    select_move, select_move_with, try_select_move, BlendPolicy, MinimaxPolicy, MinimaxSearch,
    MovePolicy, RandomPolicy, SearchResult, SearchStats,
};

pub use crate::session::{ScoreTally, Session, TurnOutcome};
