//! Honeybee Core
//!
//! Foundational types shared by every honeybee crate:
//!
//! - **Catalog model**: immutable, id-indexed lists of fonts, gradients,
//!   animation demos, color swatches, and component examples
//! - **Query matching**: category + case-insensitive substring filtering that
//!   preserves catalog order
//! - **Geometry**: points, rects, and offsets for pointer math
//!
//! # Example
//!
//! ```rust
//! use honeybee_core::{filter, Catalog, CategoryFilter, Gradient, GradientCategory};
//!
//! let catalog = Catalog::new([
//!     Gradient {
//!         id: "aurora",
//!         name: "Aurora",
//!         description: "flowing lights",
//!         category: GradientCategory::Aurora,
//!         usage: "Hero sections",
//!         css: "background: linear-gradient(125deg, #0f0c29, #302b63);",
//!     },
//! ])
//! .unwrap();
//!
//! let visible = filter(&catalog, CategoryFilter::All, "AUR");
//! assert_eq!(visible.len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod items;

pub use catalog::{Catalog, CatalogEntry, Category};
pub use error::{CatalogError, Result};
pub use filter::{filter, matches, CategoryFilter, FilterState, ALL_SLUG};
pub use geometry::{Point, Rect, Size, Vec2};
pub use items::{
    AnimationCategory, AnimationDemo, CatalogItem, CatalogKind, ColorSwatch, ComponentCategory,
    ComponentExample, Font, FontCategory, Gradient, GradientCategory, ItemCategory, Palette, Rgb,
};
