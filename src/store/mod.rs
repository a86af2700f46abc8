//! Local leaderboard persistence.
//!
//! - `LeaderboardRecord`: one row of lifetime statistics
//! - `StorageBackend`: load/save of the whole table (`FileBackend`, `MemoryBackend`)
//! - `ScoreStore`: the upsert logic on top of a backend
//! - `leaderboard`: sorting and top-N views for display

pub mod backend;
pub mod leaderboard;
pub mod record;
pub mod score_store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend, SCHEMA_VERSION};
pub use leaderboard::{sorted, top_players, SortKey, SortOrder, SortState};
pub use record::LeaderboardRecord;
pub use score_store::ScoreStore;
