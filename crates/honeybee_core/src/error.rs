//! Error types for honeybee_core

use thiserror::Error;

/// Errors raised while building or querying catalogs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries in one catalog share an id
    #[error("duplicate catalog id '{0}'")]
    DuplicateId(String),

    /// A category slug did not name any known category
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    /// A color value was not a `#RRGGBB` hex string
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
