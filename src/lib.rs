//! # image-guesser
//!
//! Game core for a casual image-guessing game: players pick one- or
//! two-player mode and a category, guess what each image shows, and their
//! points are kept in a local leaderboard.
//!
//! ## Flow
//!
//! 1. Build a `MatchConfig` (players, category, image count, timer).
//! 2. Draw items from the `Catalog` and start a `RoundEngine`.
//! 3. Feed it guesses, unlock events and timeouts until it finishes.
//! 4. Build a `MatchReport` and record it into a `ScoreStore`.
//!
//! ```
//! use image_guesser::{Catalog, GameRng, MatchConfig, MatchReport, RoundEngine, ScoreStore};
//! use image_guesser::catalog::Category;
//!
//! let config = MatchConfig::builder("Alice").category(Category::Animals).build().unwrap();
//! let items = Catalog::builtin()
//!     .draw(config.category(), config.image_count(), &mut GameRng::new(1))
//!     .unwrap();
//! let mut engine = RoundEngine::from_config(&config, items).unwrap();
//!
//! while let Some(item) = engine.current_item() {
//!     let answer = item.answer.clone();
//!     engine.submit_guess(&answer).unwrap();
//! }
//!
//! let mut store = ScoreStore::in_memory();
//! MatchReport::from_engine(&engine, &config).unwrap().record(&mut store).unwrap();
//! assert_eq!(store.get("Alice").unwrap().total_points, 20);
//! ```
//!
//! ## Modules
//!
//! - `core`: player slots, per-slot maps, RNG, match configuration
//! - `catalog`: categories, items and shuffled draws
//! - `round`: the per-match scoring and turn state machine
//! - `rules`: win/loss/tie classification and the match report
//! - `store`: leaderboard persistence and display sorting
//!
//! The library logs through `tracing` and installs no subscriber.

pub mod core;
pub mod catalog;
pub mod round;
pub mod rules;
pub mod store;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameRng, MatchConfig, MatchConfigBuilder, PlayerMap, PlayerMode, PlayerSlot};

pub use crate::catalog::{Catalog, Category, ImageRef, Item};

pub use crate::round::{GuessOutcome, RoundEngine, RoundState};

pub use crate::rules::{MatchReport, MatchResult, Outcome, PlayerResult};

pub use crate::store::{
    FileBackend, LeaderboardRecord, MemoryBackend, ScoreStore, SortKey, SortOrder, SortState,
    StorageBackend,
};

pub use crate::error::{Error, Result, StorageError};
