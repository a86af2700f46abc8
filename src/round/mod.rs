//! Gameplay: the per-match state machine.
//!
//! - `RoundState`: current item, attempts, scores, turn
//! - `RoundEngine`: applies guesses and external events to the state
//! - `GuessOutcome`: what a guess or timeout did

pub mod engine;
pub mod state;

pub use engine::RoundEngine;
pub use state::{
    points_for_attempt, GuessOutcome, RoundState, FIRST_ATTEMPT_POINTS, LATE_ATTEMPT_POINTS,
    MAX_ATTEMPTS, SECOND_ATTEMPT_POINTS,
};
