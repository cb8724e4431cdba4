//! Core engine types: marks, board, winning lines, RNG, configuration.

pub mod board;
pub mod config;
pub mod mark;
pub mod rng;

pub use board::{Board, MoveList, WinningLine, CELL_COUNT, WINNING_LINES};
pub use config::{Difficulty, EngineConfig, MEDIUM_OPTIMAL_PROBABILITY};
pub use mark::{Cell, Mark, ENGINE_MARK, HUMAN_MARK};
pub use rng::{GameRng, GameRngState};
