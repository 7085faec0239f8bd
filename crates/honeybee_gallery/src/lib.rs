//! Honeybee Gallery
//!
//! The showcase sections built on top of the core catalog model:
//!
//! - **Catalogs**: fonts, gradients, animation demos, brand palettes, and
//!   component examples
//! - **Typography**: font pairings per role and the reference type scale
//! - **Guidelines**: guideline cards and the copyable design prompt
//! - **Gallery controller**: filter state, visible-set diffs with presence
//!   transitions, category chips, and the detail view
//! - **Font gallery**: stylesheet injection for whatever is on screen
//! - **Clipboard**: copy actions with a transient "Copied" indicator
//! - **Navigation**: section anchors, compact header, mobile menu, theme
//! - **Agent access**: JSON endpoint descriptors rendered from the catalogs
//!
//! # Example
//!
//! ```rust
//! use honeybee_core::{CategoryFilter, GradientCategory};
//! use honeybee_gallery::{Catalogs, GalleryController};
//!
//! let catalogs = Catalogs::load().unwrap();
//! let mut gallery = GalleryController::new(catalogs.gradients.clone());
//!
//! let change = gallery.set_category(CategoryFilter::Only(GradientCategory::Neon));
//! assert!(!change.exited.is_empty());
//! assert!(gallery.visible().all(|g| g.category == GradientCategory::Neon));
//! ```

pub mod agent;
pub mod catalogs;
pub mod clipboard;
pub mod controller;
pub mod error;
pub mod font_gallery;
pub mod guidelines;
pub mod nav;
pub mod snippet;
pub mod stylesheet;
pub mod typography;

pub use agent::{AgentAccess, Endpoint, Route, DEFAULT_API_BASE, ENDPOINTS};
pub use catalogs::{parse_kind, Catalogs};
pub use clipboard::{Clipboard, CopyFeedback, MemoryClipboard, COPY_FEEDBACK_MS};
pub use controller::{
    CategoryChip, DetailFocus, GalleryController, PresenceKind, PresenceTransition, VisibleChange,
};
pub use error::{GalleryError, Result};
pub use font_gallery::FontGallery;
pub use guidelines::{find_guideline, Guideline, DESIGN_PROMPT, GUIDELINES, PROMPT_COPY_KEY};
pub use nav::{HeaderMode, MenuState, NavItem, Navigation, Theme, NAV_ITEMS};
pub use snippet::{copy_key, render as render_snippet, SnippetKind};
pub use stylesheet::{
    css_snippet, import_snippet, link_snippet, request_page_stylesheet, stylesheet_url, Document,
    FontStylesheets, HeadLinks, GOOGLE_FONTS_CSS,
};
pub use typography::{
    find_pairing, FaceSpec, FontPairing, PairingRole, TypeStep, PAIRINGS, TYPE_SCALE,
};
