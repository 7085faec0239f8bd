//! Static catalogs
//!
//! A [`Catalog`] is an immutable, ordered list of entries created once at
//! startup. Ids are unique within a catalog; the gallery relies on this to key
//! enter/exit transitions, so construction rejects duplicates.

use crate::error::{CatalogError, Result};
use rustc_hash::FxHashMap;
use std::fmt::Debug;

/// A closed set of categories a catalog's entries are grouped by
pub trait Category: Copy + Eq + Debug + 'static {
    /// Every category, in display order
    const ALL: &'static [Self];

    /// Stable identifier used in filters and on the command line
    fn slug(&self) -> &'static str;

    /// Human readable label
    fn label(&self) -> &'static str;

    /// Look a category up by slug (case-insensitive)
    fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(slug))
    }
}

/// One record in a catalog
pub trait CatalogEntry {
    type Category: Category;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn category(&self) -> Self::Category;
}

/// An immutable, id-indexed list of catalog entries
#[derive(Debug, Clone)]
pub struct Catalog<T: CatalogEntry> {
    items: Vec<T>,
    index: FxHashMap<String, usize>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(items: impl IntoIterator<Item = T>) -> Result<Self> {
        let items: Vec<T> = items.into_iter().collect();
        let mut index = FxHashMap::default();
        index.reserve(items.len());

        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id().to_string(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id().to_string()));
            }
        }

        tracing::trace!(entries = items.len(), "catalog built");
        Ok(Self { items, index })
    }

    /// All entries in original order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Position of an entry in the original order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of entries per category, in [`Category::ALL`] order
    pub fn category_counts(&self) -> Vec<(T::Category, usize)> {
        T::Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .items
                    .iter()
                    .filter(|item| item.category() == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

impl<'a, T: CatalogEntry> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_catalog_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            entry("a", "Aurora", "flowing lights", Kind::Aurora),
            entry("a", "Mesh", "soft blend", Kind::Mesh),
        ]);
        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId("a".into()));
    }

    #[test]
    fn test_catalog_lookup_and_counts() {
        let catalog = Catalog::new(vec![
            entry("1", "Aurora", "flowing lights", Kind::Aurora),
            entry("2", "Mesh", "soft blend", Kind::Mesh),
            entry("3", "Mesh Two", "another blend", Kind::Mesh),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("2").map(|e| e.name), Some("Mesh"));
        assert_eq!(catalog.position("3"), Some(2));
        assert!(catalog.get("missing").is_none());
        assert_eq!(
            catalog.category_counts(),
            vec![(Kind::Aurora, 1), (Kind::Mesh, 2)]
        );
    }

    #[test]
    fn test_category_from_slug() {
        assert_eq!(Kind::from_slug("MESH"), Some(Kind::Mesh));
        assert_eq!(Kind::from_slug("neon"), None);
    }
}
