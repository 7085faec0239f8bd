//! Built-in catalogs
//!
//! The showcase data lives in `'static` tables; [`Catalogs::load`] indexes
//! them once at startup.

mod animations;
mod colors;
mod components;
mod fonts;
mod gradients;

pub use animations::ANIMATIONS;
pub use colors::COLORS;
pub use components::COMPONENTS;
pub use fonts::FONTS;
pub use gradients::GRADIENTS;

use crate::error::{GalleryError, Result};
use honeybee_core::{
    AnimationDemo, Catalog, CatalogEntry, CatalogItem, CatalogKind, ColorSwatch, ComponentExample,
    Font, Gradient,
};

/// Every showcase catalog, indexed by id
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub fonts: Catalog<Font>,
    pub gradients: Catalog<Gradient>,
    pub animations: Catalog<AnimationDemo>,
    pub colors: Catalog<ColorSwatch>,
    pub components: Catalog<ComponentExample>,
}

impl Catalogs {
    pub fn load() -> Result<Self> {
        let catalogs = Self {
            fonts: Catalog::new(FONTS.iter().copied())?,
            gradients: Catalog::new(GRADIENTS.iter().copied())?,
            animations: Catalog::new(ANIMATIONS.iter().copied())?,
            colors: Catalog::new(COLORS.iter().copied())?,
            components: Catalog::new(COMPONENTS.iter().copied())?,
        };
        tracing::debug!(
            fonts = catalogs.fonts.len(),
            gradients = catalogs.gradients.len(),
            animations = catalogs.animations.len(),
            colors = catalogs.colors.len(),
            components = catalogs.components.len(),
            "catalogs loaded"
        );
        Ok(catalogs)
    }

    /// All entries of one catalog, in original order
    pub fn items(&self, kind: CatalogKind) -> Vec<CatalogItem> {
        match kind {
            CatalogKind::Fonts => collect(&self.fonts),
            CatalogKind::Gradients => collect(&self.gradients),
            CatalogKind::Animations => collect(&self.animations),
            CatalogKind::Colors => collect(&self.colors),
            CatalogKind::Components => collect(&self.components),
        }
    }

    pub fn get(&self, kind: CatalogKind, id: &str) -> Option<CatalogItem> {
        match kind {
            CatalogKind::Fonts => self.fonts.get(id).copied().map(Into::into),
            CatalogKind::Gradients => self.gradients.get(id).copied().map(Into::into),
            CatalogKind::Animations => self.animations.get(id).copied().map(Into::into),
            CatalogKind::Colors => self.colors.get(id).copied().map(Into::into),
            CatalogKind::Components => self.components.get(id).copied().map(Into::into),
        }
    }

    /// Like [`Catalogs::get`], but a miss is an error naming the catalog
    pub fn require(&self, kind: CatalogKind, id: &str) -> Result<CatalogItem> {
        self.get(kind, id).ok_or_else(|| GalleryError::UnknownItem {
            catalog: kind.slug(),
            id: id.to_string(),
        })
    }

    /// Look an id up in every catalog, in [`CatalogKind::ALL`] order
    pub fn find(&self, id: &str) -> Option<CatalogItem> {
        CatalogKind::ALL
            .iter()
            .find_map(|&kind| self.get(kind, id))
    }

    pub fn len(&self, kind: CatalogKind) -> usize {
        match kind {
            CatalogKind::Fonts => self.fonts.len(),
            CatalogKind::Gradients => self.gradients.len(),
            CatalogKind::Animations => self.animations.len(),
            CatalogKind::Colors => self.colors.len(),
            CatalogKind::Components => self.components.len(),
        }
    }
}

fn collect<T>(catalog: &Catalog<T>) -> Vec<CatalogItem>
where
    T: CatalogEntry + Copy + Into<CatalogItem>,
{
    catalog.items().iter().map(|&item| item.into()).collect()
}

/// Parse a catalog name from the command line or an API path
pub fn parse_kind(name: &str) -> Result<CatalogKind> {
    CatalogKind::from_slug(name).ok_or_else(|| GalleryError::UnknownCatalog(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeybee_core::{
        AnimationCategory, Category, ComponentCategory, FontCategory, GradientCategory, Palette,
    };

    #[test]
    fn test_builtin_catalogs_have_unique_ids() {
        let catalogs = Catalogs::load().unwrap();
        assert_eq!(catalogs.len(CatalogKind::Fonts), 50);
        assert_eq!(catalogs.len(CatalogKind::Gradients), 12);
        assert_eq!(catalogs.len(CatalogKind::Animations), 12);
        assert_eq!(catalogs.len(CatalogKind::Colors), 32);
        assert_eq!(catalogs.len(CatalogKind::Components), 8);
    }

    #[test]
    fn test_every_category_is_populated() {
        let catalogs = Catalogs::load().unwrap();
        let font_counts = catalogs.fonts.category_counts();
        assert_eq!(
            font_counts,
            vec![
                (FontCategory::Serif, 10),
                (FontCategory::SansSerif, 15),
                (FontCategory::Display, 10),
                (FontCategory::Monospace, 5),
                (FontCategory::Handwriting, 10),
            ]
        );
        assert!(catalogs
            .gradients
            .category_counts()
            .iter()
            .all(|&(_, n)| n == 2));
        assert_eq!(
            catalogs.animations.category_counts().len(),
            AnimationCategory::ALL.len()
        );
        assert!(catalogs
            .colors
            .category_counts()
            .iter()
            .all(|&(_, n)| n == 8));
        assert_eq!(
            catalogs.components.category_counts(),
            vec![
                (ComponentCategory::Actions, 2),
                (ComponentCategory::Layout, 2),
                (ComponentCategory::Forms, 1),
                (ComponentCategory::Feedback, 2),
                (ComponentCategory::Navigation, 1),
            ]
        );
        assert!(GradientCategory::ALL.len() == 6 && Palette::ALL.len() == 4);
    }

    #[test]
    fn test_every_swatch_parses() {
        for swatch in COLORS {
            assert!(swatch.rgb().is_ok(), "{} has a bad hex", swatch.id);
        }
    }

    #[test]
    fn test_lookup_across_catalogs() {
        let catalogs = Catalogs::load().unwrap();
        let item = catalogs.find("stripe-magnetic").unwrap();
        assert_eq!(item.kind(), CatalogKind::Animations);
        assert_eq!(item.name(), "Stripe Magnetic Button");

        assert!(catalogs.get(CatalogKind::Fonts, "stripe-magnetic").is_none());
        let err = catalogs.require(CatalogKind::Fonts, "nope").unwrap_err();
        assert_eq!(err.to_string(), "no fonts entry with id 'nope'");

        let item = catalogs.find("modal-dialog").unwrap();
        assert_eq!(item.kind(), CatalogKind::Components);
        assert_eq!(item.name(), "Modal/Dialog");

        assert_eq!(parse_kind("Colors").unwrap(), CatalogKind::Colors);
        assert!(matches!(
            parse_kind("icons"),
            Err(GalleryError::UnknownCatalog(name)) if name == "icons"
        ));
    }
}
