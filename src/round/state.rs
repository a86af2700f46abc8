//! Round state and guess outcomes.
//!
//! `RoundState` is the mutable part of a match. It is owned by exactly one
//! `RoundEngine` and only changes through the engine's operations; callers
//! get read access or a cloned snapshot.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerMap, PlayerSlot};

/// Number of wrong guesses allowed before the item is given up.
pub const MAX_ATTEMPTS: u8 = 2;

/// Points for a correct guess on the first attempt.
pub const FIRST_ATTEMPT_POINTS: u32 = 10;
/// Points for a correct guess on the second attempt.
pub const SECOND_ATTEMPT_POINTS: u32 = 5;
/// Points for a correct guess on the third attempt.
pub const LATE_ATTEMPT_POINTS: u32 = 2;

/// Points awarded for a correct guess after `attempt` wrong guesses.
///
/// ```
/// use image_guesser::round::points_for_attempt;
///
/// assert_eq!(points_for_attempt(0), 10);
/// assert_eq!(points_for_attempt(1), 5);
/// assert_eq!(points_for_attempt(2), 2);
/// ```
#[must_use]
pub const fn points_for_attempt(attempt: u8) -> u32 {
    match attempt {
        0 => FIRST_ATTEMPT_POINTS,
        1 => SECOND_ATTEMPT_POINTS,
        _ => LATE_ATTEMPT_POINTS,
    }
}

/// Progress through one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Index of the item being guessed. Equals the item count once finished.
    pub current_index: usize,
    /// Wrong guesses made on the current item (0..=2).
    pub attempt_count: u8,
    /// Accumulated points per active slot.
    pub scores: PlayerMap<u32>,
    /// Slot whose guess is being evaluated.
    pub current_turn: PlayerSlot,
    /// Set after a wrong guess until an external unlock arrives.
    pub guess_locked: bool,
    pub finished: bool,
}

impl RoundState {
    pub(crate) fn new(player_count: usize) -> Self {
        Self {
            current_index: 0,
            attempt_count: 0,
            scores: PlayerMap::with_default(player_count),
            current_turn: PlayerSlot::One,
            guess_locked: false,
            finished: false,
        }
    }

    /// Wrong guesses still allowed on the current item.
    #[must_use]
    pub fn attempts_remaining(&self) -> u8 {
        MAX_ATTEMPTS.saturating_sub(self.attempt_count)
    }
}

/// Result of a guess or a timeout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The guess matched; `points` went to the guessing slot.
    Correct { points: u32, match_finished: bool },
    /// Wrong, the same item stays up. Guessing is locked until unlocked.
    Incorrect { attempts_remaining: u8 },
    /// No attempts left (or time ran out). The answer is revealed and the
    /// match moved on with no points for this item.
    Exhausted { answer: String, match_finished: bool },
}

impl GuessOutcome {
    /// True if this outcome ended the match.
    #[must_use]
    pub fn match_finished(&self) -> bool {
        match self {
            GuessOutcome::Correct { match_finished, .. }
            | GuessOutcome::Exhausted { match_finished, .. } => *match_finished,
            GuessOutcome::Incorrect { .. } => false,
        }
    }

    /// Points awarded by this outcome.
    #[must_use]
    pub fn points(&self) -> u32 {
        match self {
            GuessOutcome::Correct { points, .. } => *points,
            _ => 0,
        }
    }
}
