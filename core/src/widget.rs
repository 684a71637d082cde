//! The search widget: renders a catalog once, then filters it on every input change.

use tracing::{debug, trace};

use crate::{
    catalog::Catalog,
    config::WidgetConfig,
    filter::{self, FilterOutcome},
    markup::Fragment,
    surface::{QuerySource, ResultsSurface},
};

/// A search box bound to a list of categories.
///
/// Construction renders one list item per catalog record into the results
/// container. After that the widget only toggles visibility: items are never
/// removed or reordered, and every call to [`search`](Self::search) recomputes
/// the full visibility set from scratch.
///
/// Hosts forward each keystroke to [`handle_search_change`](Self::handle_search_change).
#[derive(Debug)]
pub struct SearchWidget<I, R> {
    config: WidgetConfig,
    catalog: Catalog,
    input: I,
    results: R,
}

impl<I, R> SearchWidget<I, R>
where
    I: QuerySource,
    R: ResultsSurface,
{
    /// Creates a widget over the built-in catalog and renders it.
    ///
    /// # Errors
    ///
    /// Propagates host errors raised while appending list items.
    pub fn new(config: WidgetConfig, input: I, results: R) -> Result<Self, R::Error> {
        Self::with_catalog(config, Catalog::builtin(), input, results)
    }

    /// Creates a widget over a custom catalog and renders it.
    ///
    /// # Errors
    ///
    /// Propagates host errors raised while appending list items.
    pub fn with_catalog(
        config: WidgetConfig,
        catalog: Catalog,
        input: I,
        results: R,
    ) -> Result<Self, R::Error> {
        let mut widget = Self {
            config,
            catalog,
            input,
            results,
        };
        widget.load_results()?;
        Ok(widget)
    }

    fn load_results(&mut self) -> Result<(), R::Error> {
        for record in &self.catalog {
            self.results.append(&Fragment::from_record(record))?;
        }
        debug!(categories = self.catalog.len(), "rendered category list");
        Ok(())
    }

    /// Shows every item whose display name contains `query` (ignoring case) and hides the rest.
    ///
    /// # Errors
    ///
    /// Propagates host errors raised while toggling visibility.
    pub fn search(&mut self, query: &str) -> Result<FilterOutcome, R::Error> {
        let outcome = filter::evaluate(&self.catalog, query);
        for decision in outcome.decisions() {
            if self.config.debug {
                debug!(
                    key = %decision.key,
                    visible = decision.visible,
                    query,
                    "category match decision"
                );
            }
            self.results.set_visible(&decision.key, decision.visible)?;
        }
        trace!(query, visible = outcome.visible_count(), "filtered categories");
        Ok(outcome)
    }

    /// Reads the whole current input value and filters with it.
    ///
    /// # Errors
    ///
    /// Propagates host errors raised while toggling visibility.
    pub fn handle_search_change(&mut self) -> Result<FilterOutcome, R::Error> {
        let query = self.input.query();
        self.search(&query)
    }
}

impl<I, R> SearchWidget<I, R> {
    /// The configuration the widget was built with.
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The catalog being filtered.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The bound input.
    #[must_use]
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// Mutable access to the bound input, for hosts that own its text.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// The bound results container.
    #[must_use]
    pub const fn results(&self) -> &R {
        &self.results
    }

    /// Tears the widget down, returning its handles.
    pub fn into_parts(self) -> (I, R) {
        (self.input, self.results)
    }
}
