//! Font showcase section
//!
//! A [`GalleryController`] over the font catalog that keeps the document's
//! stylesheets in step with what is on screen: whenever the visible set
//! changes, every visible font is requested through the page registry.

use crate::clipboard::{Clipboard, CopyFeedback};
use crate::controller::{GalleryController, VisibleChange};
use crate::snippet::{copy_key, render, SnippetKind};
use crate::stylesheet::{request_page_stylesheet, Document};
use honeybee_animation::SchedulerHandle;
use honeybee_core::{Catalog, CatalogItem, CategoryFilter, Font, FontCategory};

pub struct FontGallery<D: Document> {
    controller: GalleryController<Font>,
    document: D,
    feedback: CopyFeedback,
}

impl<D: Document> FontGallery<D> {
    pub fn mount(catalog: Catalog<Font>, document: D, handle: &SchedulerHandle) -> Self {
        let mut gallery = Self {
            controller: GalleryController::new(catalog).with_all_label("All Fonts"),
            document,
            feedback: CopyFeedback::new(handle),
        };
        gallery.load_visible();
        gallery
    }

    fn load_visible(&mut self) -> usize {
        let mut loaded = 0;
        for font in self.controller.visible() {
            if request_page_stylesheet(font, &mut self.document) {
                loaded += 1;
            }
        }
        if loaded > 0 {
            tracing::debug!(loaded, "font stylesheets requested");
        }
        loaded
    }

    pub fn set_category(&mut self, category: CategoryFilter<FontCategory>) -> VisibleChange {
        let change = self.controller.set_category(category);
        self.load_visible();
        change
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> VisibleChange {
        let change = self.controller.set_query(query);
        self.load_visible();
        change
    }

    pub fn controller(&self) -> &GalleryController<Font> {
        &self.controller
    }

    /// Open or close the detail modal
    pub fn select(&mut self, id: &str) -> bool {
        self.controller.select(id)
    }

    pub fn close_detail(&mut self) {
        self.controller.close_detail();
    }

    pub fn detail(&mut self) -> Option<&Font> {
        self.controller.detail()
    }

    /// Copy a snippet of font `id`; unknown ids and denied clipboards both
    /// leave the indicator off
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, id: &str, kind: SnippetKind) -> bool {
        let Some(font) = self.controller.catalog().get(id).copied() else {
            return false;
        };
        let item = CatalogItem::Font(font);
        match render(&item, kind) {
            Ok(text) => self.feedback.copy(clipboard, &copy_key(&item, kind), &text),
            Err(err) => {
                tracing::debug!(id, error = %err, "nothing to copy");
                false
            }
        }
    }

    pub fn is_copied(&self, id: &str, kind: SnippetKind) -> bool {
        self.feedback.is_copied(&format!("{id}-{}", kind.slug()))
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::FONTS;
    use crate::clipboard::MemoryClipboard;
    use crate::stylesheet::HeadLinks;
    use honeybee_animation::AnimationScheduler;

    fn catalog() -> Catalog<Font> {
        Catalog::new(FONTS.iter().copied()).unwrap()
    }

    #[test]
    fn test_mount_loads_every_visible_font_once() {
        let scheduler = AnimationScheduler::new();
        let mut gallery = FontGallery::mount(catalog(), HeadLinks::new(), &scheduler.handle());
        assert_eq!(gallery.document().links().len(), 50);

        // Narrowing and widening the filter requests nothing new
        gallery.set_category(CategoryFilter::Only(FontCategory::Monospace));
        gallery.set_query("");
        gallery.set_category(CategoryFilter::All);
        assert_eq!(gallery.document().links().len(), 50);
    }

    #[test]
    fn test_second_mount_shares_the_page_registry() {
        let scheduler = AnimationScheduler::new();
        let first = FontGallery::mount(catalog(), HeadLinks::new(), &scheduler.handle());
        let second = FontGallery::mount(catalog(), HeadLinks::new(), &scheduler.handle());
        assert_eq!(first.document().links().len(), 50);
        assert!(second.document().links().is_empty());
    }

    #[test]
    fn test_filtered_mount_loads_lazily() {
        let scheduler = AnimationScheduler::new();
        let mut gallery = FontGallery::mount(
            Catalog::new(FONTS.iter().copied().filter(|f| f.category == FontCategory::Serif))
                .unwrap(),
            HeadLinks::new(),
            &scheduler.handle(),
        );
        assert_eq!(gallery.document().links().len(), 10);

        // Matches names and descriptions alike
        let change = gallery.set_query("garamond");
        assert_eq!(change.exited.len(), 7);
        assert_eq!(
            gallery.controller().visible_ids(),
            vec!["cormorant-garamond", "crimson-text", "eb-garamond"]
        );
    }

    #[test]
    fn test_copy_feedback_per_snippet() {
        let scheduler = AnimationScheduler::new();
        let mut gallery = FontGallery::mount(catalog(), HeadLinks::new(), &scheduler.handle());
        let mut clipboard = MemoryClipboard::new();

        assert!(gallery.copy(&mut clipboard, "lora", SnippetKind::Css));
        assert_eq!(clipboard.contents(), Some("font-family: 'Lora', serif;"));
        assert!(gallery.is_copied("lora", SnippetKind::Css));
        assert!(!gallery.is_copied("lora", SnippetKind::Import));

        assert!(gallery.copy(&mut clipboard, "lora", SnippetKind::Import));
        assert!(!gallery.is_copied("lora", SnippetKind::Css));

        scheduler.advance(2000.0);
        assert!(!gallery.is_copied("lora", SnippetKind::Import));

        assert!(!gallery.copy(&mut clipboard, "comic-sans", SnippetKind::Css));
        assert!(!gallery.copy(&mut clipboard, "lora", SnippetKind::Hex));
        assert!(!gallery.copy(&mut MemoryClipboard::denied(), "lora", SnippetKind::Css));
    }
}
