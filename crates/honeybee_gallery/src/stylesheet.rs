//! Font stylesheet injection
//!
//! Fonts are loaded on demand by appending a `<link rel="stylesheet">` to the
//! document head. Each font id is requested at most once per page; the page
//! registry lives for the lifetime of the UI thread and is never cleared.

use honeybee_core::Font;
use rustc_hash::FxHashSet;
use std::cell::RefCell;

/// Default stylesheet endpoint
pub const GOOGLE_FONTS_CSS: &str = "https://fonts.googleapis.com/css2";

/// Stylesheet URL for `family` at the given weights
///
/// Runs of whitespace in the family name become a single `+`.
pub fn stylesheet_url(base: &str, family: &str, weights: &[u16]) -> String {
    let family = family.split_whitespace().collect::<Vec<_>>().join("+");
    let weights = weights
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{base}?family={family}:wght@{weights}&display=swap")
}

pub fn font_url(font: &Font) -> String {
    stylesheet_url(GOOGLE_FONTS_CSS, font.family, font.weights)
}

/// CSS `@import` rule
pub fn import_snippet(font: &Font) -> String {
    format!("@import url('{}');", font_url(font))
}

/// HTML `<link>` tag
pub fn link_snippet(font: &Font) -> String {
    format!(r#"<link href="{}" rel="stylesheet">"#, font_url(font))
}

/// `font-family` declaration with the generic fallback
pub fn css_snippet(font: &Font) -> String {
    format!(
        "font-family: '{}', {};",
        font.family,
        font.category.generic_family()
    )
}

/// The document whose head receives stylesheet links
pub trait Document {
    fn append_stylesheet(&mut self, href: &str);
}

/// A document that records appended links in order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeadLinks {
    links: Vec<String>,
}

impl HeadLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }
}

impl Document for HeadLinks {
    fn append_stylesheet(&mut self, href: &str) {
        self.links.push(href.to_string());
    }
}

/// Font ids whose stylesheet has already been requested
#[derive(Debug, Clone)]
pub struct FontStylesheets {
    base: String,
    requested: FxHashSet<String>,
}

impl Default for FontStylesheets {
    fn default() -> Self {
        Self::with_base(GOOGLE_FONTS_CSS)
    }
}

impl FontStylesheets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            requested: FxHashSet::default(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url(&self, font: &Font) -> String {
        stylesheet_url(&self.base, font.family, font.weights)
    }

    /// Append the font's stylesheet unless it was requested before; returns
    /// whether a link was inserted
    pub fn request(&mut self, font: &Font, document: &mut dyn Document) -> bool {
        if self.requested.contains(font.id) {
            return false;
        }
        let href = self.url(font);
        document.append_stylesheet(&href);
        self.requested.insert(font.id.to_string());
        tracing::debug!(font = font.id, %href, "font stylesheet injected");
        true
    }

    pub fn is_requested(&self, id: &str) -> bool {
        self.requested.contains(id)
    }

    pub fn len(&self) -> usize {
        self.requested.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }
}

thread_local! {
    static PAGE_STYLESHEETS: RefCell<FontStylesheets> = RefCell::new(FontStylesheets::default());
}

/// Request a font through the page-wide registry
pub fn request_page_stylesheet(font: &Font, document: &mut dyn Document) -> bool {
    PAGE_STYLESHEETS.with(|page| page.borrow_mut().request(font, document))
}

/// Whether the page-wide registry has seen this font id
pub fn is_page_stylesheet_requested(id: &str) -> bool {
    PAGE_STYLESHEETS.with(|page| page.borrow().is_requested(id))
}
