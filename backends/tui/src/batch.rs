//! Non-interactive filtering: print the matches for one query and exit.

use std::io::Write;

use catsearch::{Catalog, FilterOutcome, MemoryInput, MemoryResults, SearchWidget, WidgetConfig};

use crate::error::TuiError;

/// How matching categories are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `"{key} {display name}"` line per category.
    #[default]
    Labels,
    /// The list item markup of each category.
    Html,
}

/// Filters `catalog` with `query` and writes the visible categories to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_matches(
    out: &mut impl Write,
    config: WidgetConfig,
    catalog: Catalog,
    query: &str,
    format: OutputFormat,
) -> Result<FilterOutcome, TuiError> {
    let Ok(mut widget) = SearchWidget::with_catalog(
        config,
        catalog,
        MemoryInput::new(query),
        MemoryResults::new(),
    );
    let Ok(outcome) = widget.handle_search_change();

    for item in widget.results().visible_items() {
        match format {
            OutputFormat::Labels => writeln!(out, "{}", item.fragment.text)?,
            OutputFormat::Html => writeln!(out, "{}", item.fragment.to_html())?,
        }
    }
    out.flush()?;
    Ok(outcome)
}
