//! Storage backends for the score store.
//!
//! A backend loads and saves the whole leaderboard table. `FileBackend`
//! keeps it in one bincode file; `MemoryBackend` keeps it in process.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::record::LeaderboardRecord;
use crate::error::StorageError;

/// Version of the on-disk table layout. Files with another version are
/// discarded and recreated empty.
pub const SCHEMA_VERSION: u32 = 2;

/// Loads and saves the leaderboard table.
pub trait StorageBackend {
    /// Read the full table. A store that was never written is empty.
    fn load(&mut self) -> Result<Vec<LeaderboardRecord>, StorageError>;

    /// Replace the full table. One attempt, no retries.
    fn save(&mut self, records: &[LeaderboardRecord]) -> Result<(), StorageError>;
}

#[derive(Serialize, Deserialize)]
struct StoredTable {
    version: u32,
    records: Vec<LeaderboardRecord>,
}

#[derive(Serialize)]
struct StoredTableRef<'a> {
    version: u32,
    records: &'a [LeaderboardRecord],
}

/// Table persisted in a single file.
#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageBackend for FileBackend {
    fn load(&mut self) -> Result<Vec<LeaderboardRecord>, StorageError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        // The version leads the file, so it decodes on its own.
        let version: u32 = bincode::deserialize(&bytes)?;
        if version != SCHEMA_VERSION {
            warn!(
                path = %self.path.display(),
                found = version,
                expected = SCHEMA_VERSION,
                "leaderboard schema changed; starting from an empty table"
            );
            return Ok(Vec::new());
        }

        let table: StoredTable = bincode::deserialize(&bytes)?;
        Ok(table.records)
    }

    fn save(&mut self, records: &[LeaderboardRecord]) -> Result<(), StorageError> {
        let bytes = bincode::serialize(&StoredTableRef {
            version: SCHEMA_VERSION,
            records,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.temp_path();
        let written = fs::write(&temp, bytes).and_then(|()| fs::rename(&temp, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Table kept in memory. Nothing survives the process.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    records: Vec<LeaderboardRecord>,
    fail_writes: bool,
    fail_after: Option<usize>,
    saves: usize,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing table.
    #[must_use]
    pub fn with_records(records: Vec<LeaderboardRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Make every following `save` fail with `StorageError::Rejected`.
    /// Passing `false` also clears any `fail_after` limit.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
        if !fail {
            self.fail_after = None;
        }
    }

    /// Accept saves until `saves` have succeeded, then reject the rest.
    pub fn fail_after(&mut self, saves: usize) {
        self.fail_after = Some(saves);
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// The last saved table.
    #[must_use]
    pub fn records(&self) -> &[LeaderboardRecord] {
        &self.records
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&mut self) -> Result<Vec<LeaderboardRecord>, StorageError> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[LeaderboardRecord]) -> Result<(), StorageError> {
        if self.fail_writes || self.fail_after.map_or(false, |n| self.saves >= n) {
            return Err(StorageError::Rejected);
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
