#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser host for the `catsearch` widget.
//!
//! [`WebSearchBuilder`] resolves the configured selectors in the current
//! document, renders one `<li>` per category into every matching results
//! container and registers a `keyup` listener on the search input. From
//! JavaScript the same widget is created with `new WebSearch(options)`.
//!
//! Selectors that match nothing are logged and left inert instead of failing.

mod app;
mod dom;
mod error;
pub mod logging;

pub use app::{DomSearchWidget, WebSearch, WebSearchBuilder};
pub use dom::{DomDocument, DomInput, DomResults, SearchField};
pub use error::WebError;

use wasm_bindgen::prelude::*;

/// Routes `tracing` output to the browser console, at `debug` when `verbose`
/// is set and `info` otherwise.
#[wasm_bindgen(js_name = installLogging)]
pub fn install_logging(verbose: bool) {
    let level = if verbose {
        tracing::level_filters::LevelFilter::DEBUG
    } else {
        tracing::level_filters::LevelFilter::INFO
    };
    logging::install(level);
}
