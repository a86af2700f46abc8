//! Category catalog and item draws.
//!
//! The `Catalog` holds every item grouped by category and supplies the
//! shuffled, deduplicated sequence a match is played over.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use super::item::{Category, Item};
use crate::core::GameRng;
use crate::error::{Error, Result};

/// Items grouped by category.
///
/// ## Example
///
/// ```
/// use image_guesser::catalog::{Catalog, Category};
/// use image_guesser::core::GameRng;
///
/// let catalog = Catalog::builtin();
/// let mut rng = GameRng::new(1);
///
/// let items = catalog.draw(Category::Animals, 2, &mut rng).unwrap();
/// assert_eq!(items.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pools: FxHashMap<Category, Vec<Item>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        for (image, answer) in [
            ("animal_fox", "Fox"),
            ("animal_flamingo", "Flamingo"),
            ("animal_bear", "Bear"),
        ] {
            catalog.register(Category::Animals, Item::new(image, answer));
        }

        for (image, answer) in [
            ("logo_apple", "Apple"),
            ("logo_nike", "Nike"),
            ("logo_adidas", "Adidas"),
        ] {
            catalog.register(Category::Logos, Item::new(image, answer));
        }

        for (image, answer) in [
            ("fruit_apple", "Apple"),
            ("fruit_strawberries", "Strawberry"),
            ("fruit_bananas", "Banana"),
        ] {
            catalog.register(Category::Fruits, Item::new(image, answer));
        }

        catalog
    }

    /// Add an item to a category.
    ///
    /// Panics if `category` is `Random`; that pool is derived.
    pub fn register(&mut self, category: Category, item: Item) {
        assert!(
            category != Category::Random,
            "Random is the union of all categories and cannot own items"
        );
        self.pools.entry(category).or_default().push(item);
    }

    /// Items of a category in registration order.
    ///
    /// `Random` yields every concrete category's items in turn.
    #[must_use]
    pub fn pool(&self, category: Category) -> Vec<&Item> {
        match category {
            Category::Random => Category::CONCRETE
                .iter()
                .filter_map(|c| self.pools.get(c))
                .flatten()
                .collect(),
            other => self
                .pools
                .get(&other)
                .map(|items| items.iter().collect())
                .unwrap_or_default(),
        }
    }

    /// Number of items registered across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draw up to `count` distinct items from a category.
    ///
    /// The pool is shuffled, duplicates (same image) are dropped keeping the
    /// first occurrence, and the result is truncated to `count`.
    pub fn draw(&self, category: Category, count: usize, rng: &mut GameRng) -> Result<Vec<Item>> {
        if count == 0 {
            return Err(Error::config("requested image count must be at least 1"));
        }

        let mut pool = self.pool(category);
        if pool.is_empty() {
            return Err(Error::config(format!("category {} has no items", category)));
        }

        rng.shuffle(&mut pool);

        let mut seen = FxHashSet::default();
        let items: Vec<Item> = pool
            .into_iter()
            .filter(|item| seen.insert(&item.image))
            .take(count)
            .cloned()
            .collect();

        debug!(%category, requested = count, drawn = items.len(), seed = rng.seed(), "drew items");
        Ok(items)
    }
}
