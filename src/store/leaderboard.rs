//! Leaderboard views: single-key sorting and top players.
//!
//! The store returns rows unordered; these helpers order them for display.
//! Every sort uses exactly one key, with player name as the tie-break so the
//! order is always deterministic.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::record::LeaderboardRecord;
use crate::error::Error;

/// Column to sort by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    Player,
    TotalPoints,
    Wins,
    Losses,
    Ties,
    GamesPlayed,
    BestScore,
}

impl SortKey {
    /// Column label shown in the leaderboard header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Player => "Player",
            SortKey::TotalPoints => "Total",
            SortKey::Wins => "Wins",
            SortKey::Losses => "Losses",
            SortKey::Ties => "Ties",
            SortKey::GamesPlayed => "Games",
            SortKey::BestScore => "Best",
        }
    }

    fn compare(self, a: &LeaderboardRecord, b: &LeaderboardRecord) -> Ordering {
        match self {
            SortKey::Player => a.player_name.cmp(&b.player_name),
            SortKey::TotalPoints => a.total_points.cmp(&b.total_points),
            SortKey::Wins => a.wins.cmp(&b.wins),
            SortKey::Losses => a.losses.cmp(&b.losses),
            SortKey::Ties => a.ties.cmp(&b.ties),
            SortKey::GamesPlayed => a.games_played.cmp(&b.games_played),
            SortKey::BestScore => a.best_score.cmp(&b.best_score),
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SortKey::Player,
            SortKey::TotalPoints,
            SortKey::Wins,
            SortKey::Losses,
            SortKey::Ties,
            SortKey::GamesPlayed,
            SortKey::BestScore,
        ]
        .into_iter()
        .find(|key| key.label() == s)
        .ok_or_else(|| Error::config(format!("unknown leaderboard column '{}'", s)))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Current sort of a leaderboard table.
///
/// Selecting the active column flips the order; selecting another column
/// switches to it in ascending order.
///
/// ```
/// use image_guesser::store::{SortKey, SortOrder, SortState};
///
/// let mut sort = SortState::default();
/// sort.select(SortKey::Wins);
/// assert_eq!(sort, SortState { key: SortKey::Wins, order: SortOrder::Ascending });
/// sort.select(SortKey::Wins);
/// assert_eq!(sort.order, SortOrder::Descending);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            key: SortKey::Player,
            order: SortOrder::Descending,
        }
    }
}

impl SortState {
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.reversed();
        } else {
            self.key = key;
            self.order = SortOrder::Ascending;
        }
    }

    /// Apply this sort to `records`.
    #[must_use]
    pub fn apply(&self, records: &[LeaderboardRecord]) -> Vec<LeaderboardRecord> {
        sorted(records, self.key, self.order)
    }
}

/// Sort by one key; equal keys are ordered by player name ascending.
#[must_use]
pub fn sorted(records: &[LeaderboardRecord], key: SortKey, order: SortOrder) -> Vec<LeaderboardRecord> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let primary = match order {
            SortOrder::Ascending => key.compare(a, b),
            SortOrder::Descending => key.compare(b, a),
        };
        primary.then_with(|| a.player_name.cmp(&b.player_name))
    });
    out
}

/// The `n` players with the most total points.
#[must_use]
pub fn top_players(records: &[LeaderboardRecord], n: usize) -> Vec<LeaderboardRecord> {
    let mut out = sorted(records, SortKey::TotalPoints, SortOrder::Descending);
    out.truncate(n);
    out
}
