//! Per-player lifetime statistics.

use serde::{Deserialize, Serialize};

use crate::rules::Outcome;

/// One leaderboard row, keyed by exact player name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRecord {
    pub player_name: String,
    pub total_points: u32,
    pub games_played: u32,
    pub best_score: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl LeaderboardRecord {
    /// A row with every counter at zero.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            total_points: 0,
            games_played: 0,
            best_score: 0,
            wins: 0,
            losses: 0,
            ties: 0,
        }
    }

    /// Fold one completed match into the row.
    pub fn apply(&mut self, points: u32, outcome: Outcome) {
        self.total_points = self.total_points.saturating_add(points);
        self.games_played = self.games_played.saturating_add(1);
        self.best_score = self.best_score.max(points);

        let counter = match outcome {
            Outcome::Win => &mut self.wins,
            Outcome::Loss => &mut self.losses,
            Outcome::Tie => &mut self.ties,
            Outcome::None => return,
        };
        *counter = counter.saturating_add(1);
    }
}
