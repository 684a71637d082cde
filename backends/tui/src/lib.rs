#![allow(clippy::multiple_crate_versions)]

//! Terminal host for the `catsearch` widget.
//!
//! The prompt and the list live in memory ([`catsearch::MemoryInput`] and
//! [`catsearch::MemoryResults`]); every key press that edits the prompt
//! refilters the list and the whole screen is redrawn.

pub use crate::app::{Control, TerminalSearchWidget, TuiApp, TuiAppBuilder};
pub use crate::renderer::{PROMPT, RenderFrame, RenderLine, RenderSegment, Renderer};
pub use crate::terminal::Terminal;

mod app;
pub mod batch;
mod error;
pub mod options;
mod renderer;
mod terminal;

pub use error::TuiError;
