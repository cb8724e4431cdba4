//! Game sessions: turn handling, engine replies, and score keeping.
//!
//! A [`Session`] plays the loop a front end drives: the human picks a
//! cell, the engine answers at once, and a finished game bumps the
//! [`ScoreTally`]. Timing, rendering and storage are left to the caller.

pub mod play;
pub mod score;

pub use play::{Session, TurnOutcome};
pub use score::ScoreTally;
