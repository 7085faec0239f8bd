//! Query matching over catalogs
//!
//! An entry is visible when its category passes the [`CategoryFilter`] and the
//! search query is a case-insensitive substring of its name or description.
//! Matching is a pure linear scan: catalogs hold tens of entries, so there is
//! no index to keep in sync.

use crate::catalog::{Category, CatalogEntry};
use crate::error::{CatalogError, Result};

/// Slug of the sentinel that matches every category
pub const ALL_SLUG: &str = "all";

/// Category half of a filter: everything, or one category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: Category> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SLUG,
            CategoryFilter::Only(c) => c.slug(),
        }
    }

    /// Parse `"all"` or a category slug
    pub fn from_slug(slug: &str) -> Result<Self> {
        if slug.eq_ignore_ascii_case(ALL_SLUG) {
            return Ok(CategoryFilter::All);
        }
        C::from_slug(slug)
            .map(CategoryFilter::Only)
            .ok_or_else(|| CatalogError::UnknownCategory(slug.to_string()))
    }
}

/// The user-controlled filter inputs of a gallery
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState<C> {
    pub category: CategoryFilter<C>,
    pub query: String,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            query: String::new(),
        }
    }
}

impl<C: Category> FilterState<C> {
    pub fn new(category: CategoryFilter<C>, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn matches<T: CatalogEntry<Category = C>>(&self, item: &T) -> bool {
        matches(item, self.category, &self.query.to_lowercase())
    }

    /// Apply this filter to a list of entries
    pub fn apply<'a, T, I>(&self, items: I) -> Vec<&'a T>
    where
        T: CatalogEntry<Category = C> + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        filter(items, self.category, &self.query)
    }
}

/// Check one entry against a category filter and an already-lowercased query
pub fn matches<T: CatalogEntry>(
    item: &T,
    category: CategoryFilter<T::Category>,
    lowered_query: &str,
) -> bool {
    if !category.matches(item.category()) {
        return false;
    }
    lowered_query.is_empty()
        || item.name().to_lowercase().contains(lowered_query)
        || item.description().to_lowercase().contains(lowered_query)
}

/// Return the entries matching `category` and `query`, in their original order
pub fn filter<'a, T, I>(items: I, category: CategoryFilter<T::Category>, query: &str) -> Vec<&'a T>
where
    T: CatalogEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let lowered = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches(*item, category, &lowered))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_support::*;
    use crate::catalog::Catalog;

    fn sample() -> Vec<Entry> {
        vec![
            entry("1", "Aurora", "flowing lights", Kind::Aurora),
            entry("2", "Mesh", "soft blend", Kind::Mesh),
        ]
    }

    fn ids(items: &[&Entry]) -> Vec<&'static str> {
        items.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_example_scenario() {
        let catalog = sample();
        assert_eq!(ids(&filter(&catalog, CategoryFilter::All, "aur")), vec!["1"]);
        assert_eq!(
            ids(&filter(&catalog, CategoryFilter::Only(Kind::Mesh), "")),
            vec!["2"]
        );
        assert!(filter(&catalog, CategoryFilter::All, "zzz").is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_and_searches_description() {
        let catalog = sample();
        assert_eq!(ids(&filter(&catalog, CategoryFilter::All, "AURORA")), vec!["1"]);
        assert_eq!(ids(&filter(&catalog, CategoryFilter::All, "Blend")), vec!["2"]);
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = sample();
        let all = filter(&catalog, CategoryFilter::All, "");
        assert_eq!(all.len(), catalog.len());
        for (kept, original) in all.iter().zip(catalog.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn test_filter_is_ordered_subsequence_and_idempotent() {
        let catalog = Catalog::new(vec![
            entry("a", "Aurora Borealis", "northern lights", Kind::Aurora),
            entry("b", "Purple Mesh", "soft blend of purple", Kind::Mesh),
            entry("c", "Neon Aurora", "electric glow", Kind::Aurora),
            entry("d", "Liquid", "organic blob with light", Kind::Mesh),
            entry("e", "Midnight", "deep blend", Kind::Aurora),
        ])
        .unwrap();

        let queries = ["", "l", "LIGHT", "blend", "aurora", "nothing here", " "];
        let categories = [
            CategoryFilter::All,
            CategoryFilter::Only(Kind::Aurora),
            CategoryFilter::Only(Kind::Mesh),
        ];

        for category in categories {
            for query in queries {
                let once = filter(&catalog, category, query);

                let positions: Vec<usize> = once
                    .iter()
                    .map(|e| catalog.position(e.id).unwrap())
                    .collect();
                assert!(positions.windows(2).all(|w| w[0] < w[1]));

                let lowered = query.to_lowercase();
                for item in &once {
                    assert!(category.matches(item.kind));
                    assert!(
                        item.name.to_lowercase().contains(&lowered)
                            || item.description.to_lowercase().contains(&lowered)
                    );
                }

                let twice = filter(once.iter().copied(), category, query);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_category_filter_slugs() {
        assert_eq!(
            CategoryFilter::<Kind>::from_slug("all").unwrap(),
            CategoryFilter::All
        );
        assert_eq!(
            CategoryFilter::<Kind>::from_slug("Aurora").unwrap(),
            CategoryFilter::Only(Kind::Aurora)
        );
        assert_eq!(
            CategoryFilter::<Kind>::from_slug("neon").unwrap_err(),
            CatalogError::UnknownCategory("neon".into())
        );
        assert_eq!(CategoryFilter::Only(Kind::Mesh).slug(), "mesh");
    }

    #[test]
    fn test_filter_state_apply() {
        let catalog = sample();
        let state = FilterState::new(CategoryFilter::Only(Kind::Aurora), "LIGHTS");
        assert!(state.matches(&catalog[0]));
        assert!(!state.matches(&catalog[1]));
        assert_eq!(ids(&state.apply(&catalog)), vec!["1"]);
    }
}
