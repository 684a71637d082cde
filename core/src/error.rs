//! Error types shared by the catalog and configuration layers.

use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::Catalog) from caller-provided records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A record carried an empty key, which cannot be used as an element id.
    #[error("category at position {position} has an empty key")]
    EmptyKey {
        /// Position of the offending record in the input sequence.
        position: usize,
    },
    /// Two records share the same key.
    #[error("duplicate category key `{key}`")]
    DuplicateKey {
        /// The key that appeared more than once.
        key: String,
    },
}

/// Errors raised while reading a [`WidgetConfig`](crate::WidgetConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The options document was not valid JSON or had mistyped fields.
    #[error("invalid widget options: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level error for the core crate.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`CatalogError`].
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
}
