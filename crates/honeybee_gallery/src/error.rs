//! Error types for honeybee_gallery

use honeybee_core::CatalogError;
use thiserror::Error;

/// Errors raised by gallery lookups and external effects
#[derive(Error, Debug)]
pub enum GalleryError {
    /// A catalog name did not match any built-in catalog
    #[error("unknown catalog '{0}'")]
    UnknownCatalog(String),

    /// No entry with this id exists in the catalog
    #[error("no {catalog} entry with id '{id}'")]
    UnknownItem { catalog: &'static str, id: String },

    /// The catalog has no snippet of this kind
    #[error("{catalog} entries have no '{kind}' snippet")]
    UnsupportedSnippet {
        catalog: &'static str,
        kind: &'static str,
    },

    /// A snippet kind name was not recognised
    #[error("unknown snippet kind '{0}'")]
    UnknownSnippet(String),

    /// No endpoint is published at this path
    #[error("no endpoint at '{0}'")]
    UnknownEndpoint(String),

    /// The system clipboard refused the write or is unavailable
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to render response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for gallery operations
pub type Result<T> = std::result::Result<T, GalleryError>;
