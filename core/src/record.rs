//! A single filterable catalog entry.

use serde::{Deserialize, Serialize};

/// One entry in the search catalog.
///
/// Records are created once and never mutated. The `key` doubles as the id of
/// the rendered list item, so it must be unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Short identifier, unique across the catalog.
    #[serde(alias = "name")]
    pub key: String,
    /// Human readable label. Used for matching and rendering.
    #[serde(alias = "formatted")]
    pub display_name: String,
    /// Target of the rendered anchor. Never fetched by the widget.
    pub search_url: String,
    /// Singular form of the label.
    #[serde(alias = "singular")]
    pub singular_name: String,
}

impl CategoryRecord {
    /// Creates a new record.
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        search_url: impl Into<String>,
        singular_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            search_url: search_url.into(),
            singular_name: singular_name.into(),
        }
    }

    /// Text shown inside the rendered list item: `"{key} {display_name}"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.key, self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_joins_key_and_display_name() {
        let record = CategoryRecord::new("loc", "Locations", "/locations/search", "Location");
        assert_eq!(record.label(), "loc Locations");
    }

    #[test]
    fn deserializes_legacy_field_names() {
        let record: CategoryRecord = serde_json::from_str(
            r#"{"name":"rev","formatted":"Reviews","searchUrl":"/reviews/search","singular":"Review"}"#,
        )
        .unwrap();
        assert_eq!(
            record,
            CategoryRecord::new("rev", "Reviews", "/reviews/search", "Review")
        );
    }
}
