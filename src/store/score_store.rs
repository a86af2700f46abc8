//! Durable per-player statistics.
//!
//! `ScoreStore` owns its backend for its whole lifetime: the table is loaded
//! once on open and written back once per upsert call. Writes take `&mut self`,
//! so a store has a single writer.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use super::backend::{FileBackend, MemoryBackend, StorageBackend};
use super::record::LeaderboardRecord;
use crate::error::Result;
use crate::rules::Outcome;

/// Leaderboard table keyed by exact (case-sensitive) player name.
///
/// ## Example
///
/// ```
/// use image_guesser::rules::Outcome;
/// use image_guesser::store::ScoreStore;
///
/// let mut store = ScoreStore::in_memory();
/// store.record_outcome("Alice", 15, Outcome::None).unwrap();
///
/// let alice = store.get("Alice").unwrap();
/// assert_eq!(alice.best_score, 15);
/// assert!(store.get("alice").is_none());
/// ```
#[derive(Debug)]
pub struct ScoreStore<B: StorageBackend> {
    backend: B,
    records: Vec<LeaderboardRecord>,
    index: FxHashMap<String, usize>,
}

impl<B: StorageBackend> ScoreStore<B> {
    /// Load the table from `backend`.
    pub fn open(mut backend: B) -> Result<Self> {
        let records = backend.load()?;
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.player_name.clone(), i))
            .collect();

        info!(players = records.len(), "score store opened");
        Ok(Self {
            backend,
            records,
            index,
        })
    }

    /// Fold one match result into `player_name`'s row, creating it if needed,
    /// then persist.
    ///
    /// Not idempotent: recording the same match twice counts it twice.
    /// If the write fails the row is left as it was and the error returned.
    pub fn record_outcome(&mut self, player_name: &str, points: u32, outcome: Outcome) -> Result<()> {
        self.record_outcomes(&[(player_name, points, outcome)])
    }

    /// Fold several results into the table and persist them with one write.
    ///
    /// Either every row is updated or none is: on a failed write all touched
    /// rows are restored and rows created by this call are removed.
    pub fn record_outcomes(&mut self, results: &[(&str, u32, Outcome)]) -> Result<()> {
        let inserted_from = self.records.len();
        let mut previous: Vec<(usize, LeaderboardRecord)> = Vec::new();

        for &(player_name, points, outcome) in results {
            let existing = self.index.get(player_name).copied();
            let position = match existing {
                Some(i) => {
                    if i < inserted_from && previous.iter().all(|(p, _)| *p != i) {
                        previous.push((i, self.records[i].clone()));
                    }
                    i
                }
                None => {
                    self.records.push(LeaderboardRecord::new(player_name));
                    self.index.insert(player_name.to_string(), self.records.len() - 1);
                    self.records.len() - 1
                }
            };
            self.records[position].apply(points, outcome);
        }

        if let Err(e) = self.backend.save(&self.records) {
            warn!(players = results.len(), error = %e, "failed to persist leaderboard");
            for removed in self.records.drain(inserted_from..) {
                self.index.remove(&removed.player_name);
            }
            for (position, record) in previous {
                self.records[position] = record;
            }
            return Err(e.into());
        }

        for &(player_name, points, outcome) in results {
            if let Some(record) = self.get(player_name) {
                info!(
                    player = player_name,
                    points,
                    ?outcome,
                    total = record.total_points,
                    games = record.games_played,
                    "recorded match"
                );
            }
        }
        Ok(())
    }

    /// Every row in stored order. Sorting is up to the caller.
    #[must_use]
    pub fn list_leaderboard(&self) -> &[LeaderboardRecord] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, player_name: &str) -> Option<&LeaderboardRecord> {
        self.index.get(player_name).map(|&i| &self.records[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl ScoreStore<FileBackend> {
    /// Open (or create on first write) a file-backed store.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(FileBackend::new(path))
    }
}

impl ScoreStore<MemoryBackend> {
    /// An empty store that does not persist.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: MemoryBackend::new(),
            records: Vec::new(),
            index: FxHashMap::default(),
        }
    }
}
