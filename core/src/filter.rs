//! Case-insensitive substring filtering over a [`Catalog`].

use crate::catalog::Catalog;

/// Returns `true` if `display_name` contains `query`, ignoring case.
///
/// An empty query matches every name.
#[must_use]
pub fn matches(display_name: &str, query: &str) -> bool {
    display_name.to_lowercase().contains(&query.to_lowercase())
}

/// Visibility decision for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Key of the record.
    pub key: String,
    /// Whether the record's list item should be shown.
    pub visible: bool,
}

/// Result of filtering a catalog against one query, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    decisions: Vec<Decision>,
}

impl FilterOutcome {
    /// Per-record decisions in catalog order.
    #[must_use]
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Keys of the visible records in catalog order.
    pub fn visible_keys(&self) -> impl Iterator<Item = &str> {
        self.decisions
            .iter()
            .filter(|decision| decision.visible)
            .map(|decision| decision.key.as_str())
    }

    /// Number of visible records.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.decisions.iter().filter(|decision| decision.visible).count()
    }

    /// Number of hidden records.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.decisions.len() - self.visible_count()
    }

    /// Visibility of the record with the given key, if it exists.
    #[must_use]
    pub fn is_visible(&self, key: &str) -> Option<bool> {
        self.decisions
            .iter()
            .find(|decision| decision.key == key)
            .map(|decision| decision.visible)
    }
}

/// Decides visibility for every record of `catalog`.
#[must_use]
pub fn evaluate(catalog: &Catalog, query: &str) -> FilterOutcome {
    let decisions = catalog
        .iter()
        .map(|record| Decision {
            key: record.key.clone(),
            visible: matches(&record.display_name, query),
        })
        .collect();
    FilterOutcome { decisions }
}
