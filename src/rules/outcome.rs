//! Classifying final scores into per-player outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerMap, PlayerSlot};

/// A player's result at match end, used to update lifetime counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
    /// Single-player match: no opponent to compare against.
    None,
}

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// Single-player match with its score.
    Solo(u32),
    /// The slot with the strictly higher score.
    Winner(PlayerSlot),
    /// Both players scored the same.
    Tie,
}

impl MatchResult {
    /// Compare final scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let one = scores[PlayerSlot::One];
        match scores.get(PlayerSlot::Two) {
            None => MatchResult::Solo(one),
            Some(&two) if one > two => MatchResult::Winner(PlayerSlot::One),
            Some(&two) if two > one => MatchResult::Winner(PlayerSlot::Two),
            Some(_) => MatchResult::Tie,
        }
    }

    /// Check if a slot won.
    #[must_use]
    pub fn is_winner(&self, slot: PlayerSlot) -> bool {
        matches!(self, MatchResult::Winner(s) if *s == slot)
    }

    /// The outcome recorded for `slot`.
    #[must_use]
    pub fn outcome_for(&self, slot: PlayerSlot) -> Outcome {
        match self {
            MatchResult::Solo(_) => Outcome::None,
            MatchResult::Tie => Outcome::Tie,
            MatchResult::Winner(winner) if *winner == slot => Outcome::Win,
            MatchResult::Winner(_) => Outcome::Loss,
        }
    }
}
