//! Item catalog: categories, items and shuffled draws.

pub mod item;
pub mod registry;

pub use item::{Category, ImageRef, Item};
pub use registry::Catalog;
