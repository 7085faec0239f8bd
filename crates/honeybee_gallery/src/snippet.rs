//! Copyable snippets
//!
//! Fonts offer an `@import` rule, a `<link>` tag and a `font-family`
//! declaration; every other catalog has exactly one snippet. Copy keys name
//! the entry and, for fonts, the snippet kind, so the "Copied" indicator can
//! tell the buttons of one card apart.

use crate::error::{GalleryError, Result};
use crate::stylesheet::{css_snippet, import_snippet, link_snippet};
use honeybee_core::{CatalogEntry, CatalogItem, CatalogKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    Import,
    Link,
    Css,
    Code,
    Hex,
}

impl SnippetKind {
    pub const ALL: &'static [SnippetKind] = &[
        SnippetKind::Import,
        SnippetKind::Link,
        SnippetKind::Css,
        SnippetKind::Code,
        SnippetKind::Hex,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            SnippetKind::Import => "import",
            SnippetKind::Link => "link",
            SnippetKind::Css => "css",
            SnippetKind::Code => "code",
            SnippetKind::Hex => "hex",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| GalleryError::UnknownSnippet(slug.to_string()))
    }

    /// The snippet a plain "copy" action uses for this catalog
    pub fn default_for(kind: CatalogKind) -> Self {
        match kind {
            CatalogKind::Fonts => SnippetKind::Import,
            CatalogKind::Gradients => SnippetKind::Css,
            CatalogKind::Animations | CatalogKind::Components => SnippetKind::Code,
            CatalogKind::Colors => SnippetKind::Hex,
        }
    }
}

/// Render one snippet of `item`
pub fn render(item: &CatalogItem, kind: SnippetKind) -> Result<String> {
    let text = match (item, kind) {
        (CatalogItem::Font(font), SnippetKind::Import) => import_snippet(font),
        (CatalogItem::Font(font), SnippetKind::Link) => link_snippet(font),
        (CatalogItem::Font(font), SnippetKind::Css) => css_snippet(font),
        (CatalogItem::Gradient(_), SnippetKind::Css)
        | (CatalogItem::Animation(_), SnippetKind::Code)
        | (CatalogItem::Component(_), SnippetKind::Code)
        | (CatalogItem::Color(_), SnippetKind::Hex) => item.snippet().to_string(),
        _ => {
            return Err(GalleryError::UnsupportedSnippet {
                catalog: item.kind().slug(),
                kind: kind.slug(),
            })
        }
    };
    Ok(text)
}

/// Key the "Copied" indicator is shown under
pub fn copy_key(item: &CatalogItem, kind: SnippetKind) -> String {
    match item {
        CatalogItem::Font(font) => format!("{}-{}", font.id, kind.slug()),
        _ => item.id().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::Catalogs;

    #[test]
    fn test_font_snippets_and_keys() {
        let catalogs = Catalogs::load().unwrap();
        let inter = catalogs.require(CatalogKind::Fonts, "inter").unwrap();

        assert_eq!(
            render(&inter, SnippetKind::Css).unwrap(),
            "font-family: 'Inter', sans-serif;"
        );
        assert!(render(&inter, SnippetKind::Import)
            .unwrap()
            .starts_with("@import url('https://fonts.googleapis.com/css2?family=Inter:wght@100,200"));
        assert_eq!(copy_key(&inter, SnippetKind::Import), "inter-import");
        assert_eq!(copy_key(&inter, SnippetKind::Css), "inter-css");
    }

    #[test]
    fn test_single_snippet_catalogs() {
        let catalogs = Catalogs::load().unwrap();
        let swatch = catalogs.require(CatalogKind::Colors, "stripe-purple").unwrap();
        assert_eq!(render(&swatch, SnippetKind::Hex).unwrap(), "#635BFF");
        assert_eq!(copy_key(&swatch, SnippetKind::Hex), "stripe-purple");

        let demo = catalogs.require(CatalogKind::Animations, "apple-button").unwrap();
        assert!(render(&demo, SnippetKind::Code)
            .unwrap()
            .starts_with("<motion.button"));

        let cards = catalogs.require(CatalogKind::Components, "cards").unwrap();
        assert_eq!(SnippetKind::default_for(cards.kind()), SnippetKind::Code);
        assert!(render(&cards, SnippetKind::Code)
            .unwrap()
            .contains("Card Title"));
        assert_eq!(copy_key(&cards, SnippetKind::Code), "cards");
        assert!(render(&cards, SnippetKind::Css).is_err());
    }

    #[test]
    fn test_mismatched_kind_is_an_error() {
        let catalogs = Catalogs::load().unwrap();
        let swatch = catalogs.require(CatalogKind::Colors, "vercel-blue").unwrap();
        let err = render(&swatch, SnippetKind::Import).unwrap_err();
        assert_eq!(err.to_string(), "colors entries have no 'import' snippet");
        assert!(SnippetKind::from_slug("svg").is_err());
        assert_eq!(SnippetKind::from_slug("CSS").unwrap(), SnippetKind::Css);
    }

    #[test]
    fn test_default_kind_always_renders() {
        let catalogs = Catalogs::load().unwrap();
        for &kind in CatalogKind::ALL {
            for item in catalogs.items(kind) {
                assert!(render(&item, SnippetKind::default_for(kind)).is_ok());
            }
        }
    }
}
