//! Game rules.
//!
//! - `engine`: pure functions over a [`Board`](crate::core::Board):
//!   `evaluate`, `apply_move`, `check_move`
//! - `game`: the [`Game`] state machine with turn order and history

pub mod engine;
pub mod game;

pub use engine::{apply_move, check_move, evaluate, find_winner, GameStatus};
pub use game::Game;
