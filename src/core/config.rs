//! Match configuration.
//!
//! A `MatchConfig` is built once per match by the UI flow and handed to the
//! engine and the result report. Use `MatchConfigBuilder` to construct one;
//! `build()` validates every field.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{PlayerMode, PlayerSlot};
use crate::catalog::Category;
use crate::error::{Error, Result};

/// Smallest number of images per match.
pub const MIN_IMAGE_COUNT: usize = 2;
/// Largest number of images per match.
pub const MAX_IMAGE_COUNT: usize = 30;
/// Image count used when none is chosen.
pub const DEFAULT_IMAGE_COUNT: usize = 2;

/// Shortest per-image timer, in seconds.
pub const MIN_TIMER_SECS: u32 = 10;
/// Longest per-image timer, in seconds.
pub const MAX_TIMER_SECS: u32 = 50;
/// Timer duration offered by `MatchConfigBuilder::timer`.
pub const DEFAULT_TIMER_SECS: u32 = 30;

/// Validated settings for one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    player_one: String,
    player_two: Option<String>,
    category: Category,
    image_count: usize,
    timer_secs: Option<u32>,
    seed: Option<u64>,
}

impl MatchConfig {
    /// Start building a config for a match led by `player_one`.
    pub fn builder(player_one: impl Into<String>) -> MatchConfigBuilder {
        MatchConfigBuilder::new(player_one)
    }

    #[must_use]
    pub fn mode(&self) -> PlayerMode {
        if self.player_two.is_some() {
            PlayerMode::Multi
        } else {
            PlayerMode::Single
        }
    }

    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.mode().is_multiplayer()
    }

    /// Display name for an active slot.
    #[must_use]
    pub fn player_name(&self, slot: PlayerSlot) -> Option<&str> {
        match slot {
            PlayerSlot::One => Some(&self.player_one),
            PlayerSlot::Two => self.player_two.as_deref(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Per-image timer, if enabled.
    #[must_use]
    pub fn timer(&self) -> Option<Duration> {
        self.timer_secs.map(|secs| Duration::from_secs(u64::from(secs)))
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Re-check a config that did not come from the builder (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        validate_name("player one", &self.player_one)?;
        if let Some(two) = &self.player_two {
            validate_name("player two", two)?;
            if two == &self.player_one {
                return Err(Error::config("player names must differ"));
            }
        }

        if !(MIN_IMAGE_COUNT..=MAX_IMAGE_COUNT).contains(&self.image_count) {
            return Err(Error::config(format!(
                "image count must be between {} and {}, got {}",
                MIN_IMAGE_COUNT, MAX_IMAGE_COUNT, self.image_count
            )));
        }
        if self.image_count % 2 != 0 {
            return Err(Error::config(format!(
                "image count must be even, got {}",
                self.image_count
            )));
        }

        if let Some(secs) = self.timer_secs {
            if !(MIN_TIMER_SECS..=MAX_TIMER_SECS).contains(&secs) {
                return Err(Error::config(format!(
                    "timer must be between {} and {} seconds, got {}",
                    MIN_TIMER_SECS, MAX_TIMER_SECS, secs
                )));
            }
        }

        Ok(())
    }
}

fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::config(format!("{} name must not be empty", field)));
    }
    Ok(())
}

/// Builder for `MatchConfig`.
#[derive(Clone, Debug)]
pub struct MatchConfigBuilder {
    player_one: String,
    player_two: Option<String>,
    category: Category,
    image_count: usize,
    timer_secs: Option<u32>,
    seed: Option<u64>,
}

impl MatchConfigBuilder {
    pub fn new(player_one: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: None,
            category: Category::Random,
            image_count: DEFAULT_IMAGE_COUNT,
            timer_secs: None,
            seed: None,
        }
    }

    /// Add a second player, switching the match to multiplayer.
    pub fn opponent(mut self, name: impl Into<String>) -> Self {
        self.player_two = Some(name.into());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn image_count(mut self, count: usize) -> Self {
        self.image_count = count;
        self
    }

    /// Enable the per-image timer with the default duration.
    pub fn timer(self) -> Self {
        self.timer_secs(DEFAULT_TIMER_SECS)
    }

    pub fn timer_secs(mut self, secs: u32) -> Self {
        self.timer_secs = Some(secs);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Trim names and validate every field.
    pub fn build(self) -> Result<MatchConfig> {
        let config = MatchConfig {
            player_one: self.player_one.trim().to_string(),
            player_two: self.player_two.map(|n| n.trim().to_string()),
            category: self.category,
            image_count: self.image_count,
            timer_secs: self.timer_secs,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
