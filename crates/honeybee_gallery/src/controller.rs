//! Gallery controller
//!
//! Owns the filter inputs of one gallery section together with the catalog it
//! filters. Every filter change recomputes the visible set synchronously and
//! reports which ids entered or left it, so the renderer can run presence
//! transitions keyed by id.

use honeybee_animation::{Easing, Tween};
use honeybee_core::{
    matches, Catalog, CatalogEntry, Category, CategoryFilter, FilterState, ALL_SLUG,
};

/// Length of the enter/exit fade, in milliseconds
pub const PRESENCE_DURATION_MS: f64 = 300.0;

/// Extra delay per visible index for entering items, in milliseconds
pub const PRESENCE_STAGGER_MS: f64 = 30.0;

/// Scale of an item that is fully hidden
pub const PRESENCE_HIDDEN_SCALE: f32 = 0.9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenceKind {
    Enter,
    Exit,
}

/// Fade and scale of one item entering or leaving the visible set
#[derive(Clone, Debug, PartialEq)]
pub struct PresenceTransition {
    pub id: String,
    pub kind: PresenceKind,
    pub opacity: Tween,
    pub scale: Tween,
}

impl PresenceTransition {
    /// `index` is the item's position in the visible set it enters or leaves
    fn new(id: &str, kind: PresenceKind, index: usize) -> Self {
        let (from, to) = match kind {
            PresenceKind::Enter => (0.0, 1.0),
            PresenceKind::Exit => (1.0, 0.0),
        };
        let delay = match kind {
            PresenceKind::Enter => index as f64 * PRESENCE_STAGGER_MS,
            PresenceKind::Exit => 0.0,
        };
        let tween = |from: f32, to: f32| {
            Tween::new(from, to, PRESENCE_DURATION_MS)
                .with_delay(delay)
                .with_easing(Easing::EaseOut)
        };
        let hidden = PRESENCE_HIDDEN_SCALE;
        Self {
            id: id.to_string(),
            kind,
            opacity: tween(from, to),
            scale: tween(hidden + (1.0 - hidden) * from, hidden + (1.0 - hidden) * to),
        }
    }

    /// When the transition has fully played out, relative to its start
    pub fn end_ms(&self) -> f64 {
        self.opacity.end_ms().max(self.scale.end_ms())
    }
}

/// Result of a filter change
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleChange {
    pub entered: Vec<PresenceTransition>,
    pub exited: Vec<PresenceTransition>,
}

impl VisibleChange {
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

/// A filter chip: a category (or "all") with its item count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryChip<C> {
    pub filter: CategoryFilter<C>,
    pub label: &'static str,
    pub count: usize,
}

impl<C: Category> CategoryChip<C> {
    pub fn slug(&self) -> &'static str {
        self.filter.slug()
    }
}

/// Whether a detail view is open, and for which item
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailFocus {
    #[default]
    Closed,
    Open {
        id: String,
    },
}

/// Filter, visible set, and detail focus of one gallery
#[derive(Debug, Clone)]
pub struct GalleryController<T: CatalogEntry> {
    catalog: Catalog<T>,
    filter: FilterState<T::Category>,
    /// Positions into `catalog`, ascending
    visible: Vec<usize>,
    focus: DetailFocus,
    all_label: &'static str,
}

impl<T: CatalogEntry> GalleryController<T> {
    /// Start with the "all" filter and an empty query
    pub fn new(catalog: Catalog<T>) -> Self {
        let visible = (0..catalog.len()).collect();
        Self {
            catalog,
            filter: FilterState::default(),
            visible,
            focus: DetailFocus::Closed,
            all_label: "All",
        }
    }

    /// Label of the "all" chip
    pub fn with_all_label(mut self, label: &'static str) -> Self {
        self.all_label = label;
        self
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState<T::Category> {
        &self.filter
    }

    pub fn set_category(&mut self, category: CategoryFilter<T::Category>) -> VisibleChange {
        self.filter.category = category;
        self.refresh()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> VisibleChange {
        self.filter.query = query.into();
        self.refresh()
    }

    pub fn set_filter(&mut self, filter: FilterState<T::Category>) -> VisibleChange {
        self.filter = filter;
        self.refresh()
    }

    fn refresh(&mut self) -> VisibleChange {
        let items = self.catalog.items();
        let lowered = self.filter.query.to_lowercase();
        let next: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| matches(*item, self.filter.category, &lowered))
            .map(|(position, _)| position)
            .collect();

        let mut change = VisibleChange::default();
        for (index, &position) in self.visible.iter().enumerate() {
            if next.binary_search(&position).is_err() {
                change.exited.push(PresenceTransition::new(
                    items[position].id(),
                    PresenceKind::Exit,
                    index,
                ));
            }
        }
        for (index, &position) in next.iter().enumerate() {
            if self.visible.binary_search(&position).is_err() {
                change.entered.push(PresenceTransition::new(
                    items[position].id(),
                    PresenceKind::Enter,
                    index,
                ));
            }
        }

        tracing::debug!(
            category = self.filter.category.slug(),
            query = %self.filter.query,
            visible = next.len(),
            entered = change.entered.len(),
            exited = change.exited.len(),
            "gallery filter changed"
        );
        self.visible = next;
        change
    }

    /// Visible entries, in catalog order
    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(|&i| &self.catalog.items()[i])
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible().map(|item| item.id()).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Nothing matches: the section shows its empty state
    pub fn is_empty_state(&self) -> bool {
        self.visible.is_empty()
    }

    /// Chips for "all" and every category, with catalog-wide counts
    pub fn category_chips(&self) -> Vec<CategoryChip<T::Category>> {
        let mut chips = Vec::with_capacity(T::Category::ALL.len() + 1);
        chips.push(CategoryChip {
            filter: CategoryFilter::All,
            label: self.all_label,
            count: self.catalog.len(),
        });
        chips.extend(
            self.catalog
                .category_counts()
                .into_iter()
                .map(|(category, count)| CategoryChip {
                    filter: CategoryFilter::Only(category),
                    label: category.label(),
                    count,
                }),
        );
        chips
    }

    /// Count for a chip slug (`"all"` or a category slug)
    pub fn count_for(&self, slug: &str) -> Option<usize> {
        if slug.eq_ignore_ascii_case(ALL_SLUG) {
            return Some(self.catalog.len());
        }
        self.category_chips()
            .into_iter()
            .find(|chip| chip.slug().eq_ignore_ascii_case(slug))
            .map(|chip| chip.count)
    }

    // =========================================================================
    // Detail focus
    // =========================================================================

    /// Open the detail view for `id`; an unknown id leaves the view closed
    pub fn select(&mut self, id: &str) -> bool {
        if self.catalog.contains(id) {
            self.focus = DetailFocus::Open { id: id.to_string() };
            true
        } else {
            tracing::debug!(id, "detail focus on unknown id, closing");
            self.focus = DetailFocus::Closed;
            false
        }
    }

    pub fn close_detail(&mut self) {
        self.focus = DetailFocus::Closed;
    }

    pub fn focus(&self) -> &DetailFocus {
        &self.focus
    }

    /// The focused entry; a focus that no longer resolves is closed
    pub fn detail(&mut self) -> Option<&T> {
        let position = match &self.focus {
            DetailFocus::Closed => return None,
            DetailFocus::Open { id } => self.catalog.position(id),
        };
        match position {
            Some(position) => self.catalog.items().get(position),
            None => {
                self.focus = DetailFocus::Closed;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeybee_core::{Gradient, GradientCategory};

    fn gradient(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: GradientCategory,
    ) -> Gradient {
        Gradient {
            id,
            name,
            description,
            category,
            usage: "",
            css: "",
        }
    }

    fn controller() -> GalleryController<Gradient> {
        GalleryController::new(
            Catalog::new([
                gradient("aurora", "Aurora", "flowing lights", GradientCategory::Aurora),
                gradient("mesh", "Mesh", "soft blend", GradientCategory::Mesh),
                gradient("neon", "Neon Aurora", "electric lights", GradientCategory::Neon),
            ])
            .unwrap(),
        )
    }

    fn ids(transitions: &[PresenceTransition]) -> Vec<&str> {
        transitions.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_starts_with_everything_visible() {
        let gallery = controller();
        assert_eq!(gallery.visible_ids(), vec!["aurora", "mesh", "neon"]);
        assert!(!gallery.is_empty_state());
    }

    #[test]
    fn test_filter_change_reports_enter_and_exit() {
        let mut gallery = controller();

        let change = gallery.set_query("lights");
        assert_eq!(ids(&change.exited), vec!["mesh"]);
        assert!(change.entered.is_empty());
        assert_eq!(gallery.visible_ids(), vec!["aurora", "neon"]);

        let change = gallery.set_category(CategoryFilter::Only(GradientCategory::Mesh));
        assert_eq!(ids(&change.exited), vec!["aurora", "neon"]);
        assert!(gallery.is_empty_state());

        let change = gallery.set_filter(FilterState::default());
        assert_eq!(ids(&change.entered), vec!["aurora", "mesh", "neon"]);
        // Entering items are staggered by their visible index
        let delays: Vec<f64> = change.entered.iter().map(|t| t.opacity.delay_ms).collect();
        assert_eq!(delays, vec![0.0, 30.0, 60.0]);
    }

    #[test]
    fn test_unchanged_filter_reports_nothing() {
        let mut gallery = controller();
        gallery.set_query("aur");
        assert!(gallery.set_query("AUR").is_empty());
    }

    #[test]
    fn test_presence_transition_values() {
        let enter = PresenceTransition::new("x", PresenceKind::Enter, 2);
        assert_eq!(enter.opacity.sample(0.0), 0.0);
        assert!((enter.scale.sample(0.0) - 0.9).abs() < 1e-6);
        assert_eq!(enter.opacity.sample(enter.end_ms()), 1.0);
        assert_eq!(enter.scale.sample(enter.end_ms()), 1.0);
        assert!((enter.end_ms() - 360.0).abs() < 1e-9);

        let exit = PresenceTransition::new("x", PresenceKind::Exit, 2);
        assert_eq!(exit.opacity.sample(0.0), 1.0);
        assert!((exit.scale.sample(300.0) - 0.9).abs() < 1e-6);
        assert_eq!(exit.end_ms(), 300.0);
    }

    #[test]
    fn test_category_chips_include_all() {
        let gallery = controller().with_all_label("All Gradients");
        let chips = gallery.category_chips();
        assert_eq!(chips[0].slug(), "all");
        assert_eq!(chips[0].label, "All Gradients");
        assert_eq!(chips[0].count, 3);
        assert_eq!(chips.len(), 1 + GradientCategory::ALL.len());
        assert_eq!(gallery.count_for("aurora"), Some(1));
        assert_eq!(gallery.count_for("glass"), Some(0));
        assert_eq!(gallery.count_for("ALL"), Some(3));
        assert_eq!(gallery.count_for("sparkle"), None);
    }

    #[test]
    fn test_detail_focus_is_independent_of_filter() {
        let mut gallery = controller();
        assert!(gallery.select("mesh"));
        gallery.set_query("zzz");
        assert!(gallery.is_empty_state());
        assert_eq!(gallery.detail().map(|g| g.id), Some("mesh"));

        gallery.close_detail();
        assert_eq!(gallery.focus(), &DetailFocus::Closed);
        assert!(gallery.detail().is_none());
    }

    #[test]
    fn test_unresolvable_focus_closes() {
        let mut gallery = controller();
        gallery.select("aurora");
        assert!(!gallery.select("deleted"));
        assert_eq!(gallery.focus(), &DetailFocus::Closed);

        gallery.focus = DetailFocus::Open { id: "stale".into() };
        assert!(gallery.detail().is_none());
        assert_eq!(gallery.focus(), &DetailFocus::Closed);
    }
}
