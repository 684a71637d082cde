#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Core types for the `catsearch` widget.
//!
//! A [`SearchWidget`] owns a fixed [`Catalog`] of [`CategoryRecord`]s, renders one
//! list item per record into a host-provided [`ResultsSurface`], and on every
//! input change shows the items whose display name contains the query, ignoring
//! case. Hosts (the browser and terminal backends) implement [`QuerySource`] and
//! [`ResultsSurface`] for their own element types; [`memory`] provides an
//! in-process implementation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod markup;
pub mod memory;
pub mod record;
pub mod surface;
pub mod widget;


pub use catalog::Catalog;
pub use config::WidgetConfig;
pub use error::{CatalogError, ConfigError, Error};
pub use filter::{Decision, FilterOutcome};
pub use markup::Fragment;
pub use memory::{MemoryInput, MemoryResults};
pub use record::CategoryRecord;
pub use surface::{QuerySource, ResultsSurface};
pub use widget::SearchWidget;
