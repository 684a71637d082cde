#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

#[doc(inline)]
pub use catsearch_core::*;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```rust
    //! use catsearch::prelude::*;
    //!
    //! let mut widget = SearchWidget::new(
    //!     WidgetConfig::default(),
    //!     MemoryInput::default(),
    //!     MemoryResults::new(),
    //! )
    //! .unwrap();
    //! widget.search("loc").unwrap();
    //! assert_eq!(widget.results().visible_keys().collect::<Vec<_>>(), ["loc"]);
    //! ```
    pub use catsearch_core::{
        Catalog, CategoryRecord, FilterOutcome, Fragment, MemoryInput, MemoryResults,
        QuerySource, ResultsSurface, SearchWidget, WidgetConfig,
    };
}
