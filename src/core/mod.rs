//! Core types: player slots, per-slot storage, RNG, match configuration.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{PlayerMap, PlayerMode, PlayerSlot};
pub use rng::GameRng;
pub use config::{MatchConfig, MatchConfigBuilder};
