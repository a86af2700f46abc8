//! File-backed score store tests.

use std::fs;
use std::path::PathBuf;

use image_guesser::rules::Outcome;
use image_guesser::store::{top_players, LeaderboardRecord, ScoreStore, SCHEMA_VERSION};
use image_guesser::{Error, StorageError};

/// A fresh path under the system temp dir, removed on drop.
struct TempStore {
    path: PathBuf,
}

impl TempStore {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir()
            .join(format!("image-guesser-{}", std::process::id()))
            .join(format!("{}.bin", name));
        let _ = fs::remove_file(&path);
        Self { path }
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_missing_file_opens_empty() {
    init_tracing();
    let tmp = TempStore::new("missing");
    let store = ScoreStore::open_file(&tmp.path).unwrap();
    assert!(store.is_empty());
    assert!(!tmp.path.exists());
}

#[test]
fn test_rows_survive_reopen() {
    init_tracing();
    let tmp = TempStore::new("reopen");

    {
        let mut store = ScoreStore::open_file(&tmp.path).unwrap();
        store.record_outcome("Alice", 15, Outcome::None).unwrap();
        store.record_outcome("Bob", 30, Outcome::Win).unwrap();
    }

    let mut store = ScoreStore::open_file(&tmp.path).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("Bob").unwrap().wins, 1);

    store.record_outcome("Alice", 25, Outcome::Loss).unwrap();
    drop(store);

    let store = ScoreStore::open_file(&tmp.path).unwrap();
    let alice = store.get("Alice").unwrap();
    assert_eq!(alice.total_points, 40);
    assert_eq!(alice.games_played, 2);
    assert_eq!(alice.best_score, 25);
    assert_eq!(alice.losses, 1);

    let names: Vec<_> = store.list_leaderboard().iter().map(|r| r.player_name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[test]
fn test_best_score_only_rises() {
    let tmp = TempStore::new("best");
    let mut store = ScoreStore::open_file(&tmp.path).unwrap();

    store.record_outcome("Alice", 20, Outcome::None).unwrap();
    store.record_outcome("Alice", 10, Outcome::None).unwrap();
    assert_eq!(store.get("Alice").unwrap().best_score, 20);

    store.record_outcome("Alice", 35, Outcome::None).unwrap();
    let alice = store.get("Alice").unwrap();
    assert_eq!(alice.best_score, 35);
    assert_eq!(alice.total_points, 65);
    assert_eq!(alice.games_played, 3);
}

#[test]
fn test_schema_mismatch_starts_empty() {
    init_tracing();
    let tmp = TempStore::new("schema");
    fs::create_dir_all(tmp.path.parent().unwrap()).unwrap();

    let old: (u32, Vec<LeaderboardRecord>) = (SCHEMA_VERSION - 1, vec![LeaderboardRecord::new("Old")]);
    fs::write(&tmp.path, bincode::serialize(&old).unwrap()).unwrap();

    let mut store = ScoreStore::open_file(&tmp.path).unwrap();
    assert!(store.is_empty());

    store.record_outcome("New", 10, Outcome::None).unwrap();
    let store = ScoreStore::open_file(&tmp.path).unwrap();
    assert!(store.get("Old").is_none());
    assert_eq!(store.get("New").unwrap().total_points, 10);
}

#[test]
fn test_corrupt_file_is_storage_error() {
    let tmp = TempStore::new("corrupt");
    fs::create_dir_all(tmp.path.parent().unwrap()).unwrap();
    fs::write(&tmp.path, [0xFF]).unwrap();

    let err = ScoreStore::open_file(&tmp.path).unwrap_err();
    assert!(matches!(err, Error::Storage(StorageError::Codec(_))));
}

#[test]
fn test_unwritable_location_is_storage_error() {
    let blocker = TempStore::new("blocker");
    let _ = fs::remove_dir_all(&blocker.path);

    let mut store = ScoreStore::open_file(blocker.path.join("scores.bin")).unwrap();
    assert!(store.is_empty());

    // A regular file where the store expects its directory.
    fs::create_dir_all(blocker.path.parent().unwrap()).unwrap();
    fs::write(&blocker.path, b"not a directory").unwrap();

    let err = store.record_outcome("Alice", 10, Outcome::None).unwrap_err();
    assert!(matches!(err, Error::Storage(StorageError::Io(_))));
    assert!(store.is_empty());
}

#[test]
fn test_top_players_from_store() {
    let mut store = ScoreStore::in_memory();
    for (name, points) in [("A", 10), ("B", 50), ("C", 30), ("D", 40)] {
        store.record_outcome(name, points, Outcome::None).unwrap();
    }

    let top: Vec<_> = top_players(store.list_leaderboard(), 3)
        .into_iter()
        .map(|r| r.player_name)
        .collect();
    assert_eq!(top, vec!["B", "D", "C"]);
}
