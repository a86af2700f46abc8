//! Player slots and per-slot data storage.
//!
//! ## PlayerSlot
//!
//! A match has one or two active slots, fixed when it starts.
//! Single-player matches only ever use `PlayerSlot::One`.
//!
//! ## PlayerMap
//!
//! Per-slot storage backed by a `SmallVec` sized for two players,
//! indexable by `PlayerSlot`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// Identifies player 1 or player 2 within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Get the 0-based index of this slot.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }

    /// The opposing slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// Iterate over the active slots of a match with `player_count` players.
    ///
    /// ```
    /// use image_guesser::core::PlayerSlot;
    ///
    /// let slots: Vec<_> = PlayerSlot::all(2).collect();
    /// assert_eq!(slots, vec![PlayerSlot::One, PlayerSlot::Two]);
    /// assert_eq!(PlayerSlot::all(1).count(), 1);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerSlot> {
        [PlayerSlot::One, PlayerSlot::Two]
            .into_iter()
            .take(player_count)
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Single- or two-player mode, fixed at match start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerMode {
    #[default]
    Single,
    Multi,
}

impl PlayerMode {
    #[must_use]
    pub const fn player_count(self) -> usize {
        match self {
            PlayerMode::Single => 1,
            PlayerMode::Multi => 2,
        }
    }

    #[must_use]
    pub const fn is_multiplayer(self) -> bool {
        matches!(self, PlayerMode::Multi)
    }
}

/// Per-slot data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use image_guesser::core::{PlayerMap, PlayerSlot};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_default(2);
/// scores[PlayerSlot::Two] += 5;
/// assert_eq!(scores[PlayerSlot::One], 0);
/// assert_eq!(scores[PlayerSlot::Two], 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: SmallVec<[T; 2]>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerSlot) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 2, "At most 2 players supported");

        let data = PlayerSlot::all(player_count).map(factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    /// Get the number of active slots.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a slot's data, or `None` if the slot is not active.
    #[must_use]
    pub fn get(&self, slot: PlayerSlot) -> Option<&T> {
        self.data.get(slot.index())
    }

    /// Iterate over (PlayerSlot, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &T)> {
        PlayerSlot::all(self.data.len()).zip(self.data.iter())
    }

    /// Iterate over the active slots.
    pub fn slots(&self) -> impl Iterator<Item = PlayerSlot> {
        PlayerSlot::all(self.data.len())
    }
}

impl<T> Index<PlayerSlot> for PlayerMap<T> {
    type Output = T;

    fn index(&self, slot: PlayerSlot) -> &Self::Output {
        &self.data[slot.index()]
    }
}

impl<T> IndexMut<PlayerSlot> for PlayerMap<T> {
    fn index_mut(&mut self, slot: PlayerSlot) -> &mut Self::Output {
        &mut self.data[slot.index()]
    }
}
