//! Items and categories.
//!
//! An `Item` pairs an opaque image reference with the answer players must
//! type. Items are immutable once loaded.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Opaque reference to an image resource (e.g. `"animal_fox"`).
///
/// The engine never interprets it; the UI resolves it to something drawable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One image + answer pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub image: ImageRef,
    pub answer: String,
}

impl Item {
    pub fn new(image: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            image: ImageRef::new(image),
            answer: answer.into(),
        }
    }

    /// Case-insensitive comparison against the answer.
    ///
    /// ```
    /// use image_guesser::catalog::Item;
    ///
    /// let fox = Item::new("animal_fox", "Fox");
    /// assert!(fox.matches("FOX"));
    /// assert!(!fox.matches("fox "));
    /// ```
    #[must_use]
    pub fn matches(&self, guess: &str) -> bool {
        guess.to_lowercase() == self.answer.to_lowercase()
    }
}

/// Item category. `Random` draws from the union of the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Animals,
    Logos,
    Fruits,
    Random,
}

impl Category {
    /// Categories that own items directly.
    pub const CONCRETE: [Category; 3] = [Category::Animals, Category::Logos, Category::Fruits];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Animals => "Animals",
            Category::Logos => "Logos",
            Category::Fruits => "Fruits",
            Category::Random => "Random",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Animals" => Ok(Category::Animals),
            "Logos" => Ok(Category::Logos),
            "Fruits" => Ok(Category::Fruits),
            "Random" => Ok(Category::Random),
            other => Err(Error::config(format!("unknown category '{}'", other))),
        }
    }
}
