use std::io;

use catsearch::{CatalogError, ConfigError};
use thiserror::Error;

/// Errors that can occur while building or running a [`TuiApp`](crate::TuiApp).
#[derive(Debug, Error)]
pub enum TuiError {
    /// Low level terminal I/O failure.
    #[error("terminal I/O error: {0}")]
    Io(String),
    /// The options document could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A custom catalog was rejected.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<io::Error> for TuiError {
    fn from(value: io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
