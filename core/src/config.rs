//! Construction options for a [`SearchWidget`](crate::SearchWidget).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Selector used to locate the search input when none is configured.
pub const DEFAULT_SEARCH_INPUT_SELECTOR: &str = "#q";
/// Selector used to locate the results container when none is configured.
pub const DEFAULT_RESULTS_CONTAINER_SELECTOR: &str = "#results";
/// Default value of [`WidgetConfig::max_results`].
pub const DEFAULT_MAX_RESULTS: usize = 6;

/// Options consumed once when a widget is constructed.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
/// The older option names (`searchSelector`, `resultSelector`, `numResults`,
/// `isDebugging`) are accepted as aliases. A `null` or empty selector, a `null`
/// or zero `maxResults` and a `null` `debug` all fall back to the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Selector for the text input the widget listens to.
    #[serde(alias = "searchSelector", deserialize_with = "search_input_selector")]
    pub search_input_selector: String,
    /// Selector for the element the list items are appended to.
    #[serde(alias = "resultSelector", deserialize_with = "results_container_selector")]
    pub results_container_selector: String,
    /// Carried for compatibility; never limits the number of visible items.
    #[serde(alias = "numResults", deserialize_with = "max_results")]
    pub max_results: usize,
    /// Logs every per-record match decision at `debug` level.
    #[serde(alias = "isDebugging", deserialize_with = "debug")]
    pub debug: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            search_input_selector: DEFAULT_SEARCH_INPUT_SELECTOR.to_owned(),
            results_container_selector: DEFAULT_RESULTS_CONTAINER_SELECTOR.to_owned(),
            max_results: DEFAULT_MAX_RESULTS,
            debug: false,
        }
    }
}

fn selector_or<'de, D>(deserializer: D, fallback: &str) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let selector = Option::<String>::deserialize(deserializer)?;
    Ok(selector
        .filter(|selector| !selector.is_empty())
        .unwrap_or_else(|| fallback.to_owned()))
}

fn search_input_selector<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    selector_or(deserializer, DEFAULT_SEARCH_INPUT_SELECTOR)
}

fn results_container_selector<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    selector_or(deserializer, DEFAULT_RESULTS_CONTAINER_SELECTOR)
}

fn max_results<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?
        .filter(|&max| max != 0)
        .unwrap_or(DEFAULT_MAX_RESULTS))
}

fn debug<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

impl WidgetConfig {
    /// Creates a configuration with every option at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON options object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `json` is not an object with correctly typed fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the search input selector.
    #[must_use]
    pub fn with_search_input_selector(mut self, selector: impl Into<String>) -> Self {
        self.search_input_selector = selector.into();
        self
    }

    /// Sets the results container selector.
    #[must_use]
    pub fn with_results_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.results_container_selector = selector.into();
        self
    }

    /// Sets the inert `max_results` option.
    #[must_use]
    pub const fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Enables or disables per-record debug logging.
    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.search_input_selector, "#q");
        assert_eq!(config.results_container_selector, "#results");
        assert_eq!(config.max_results, 6);
        assert!(!config.debug);
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(WidgetConfig::from_json("{}").unwrap(), WidgetConfig::default());
    }

    #[test]
    fn camel_case_names() {
        let config = WidgetConfig::from_json(
            r##"{"searchInputSelector":"#find","resultsContainerSelector":".list","maxResults":3,"debug":true}"##,
        )
        .unwrap();
        assert_eq!(
            config,
            WidgetConfig::new()
                .with_search_input_selector("#find")
                .with_results_container_selector(".list")
                .with_max_results(3)
                .with_debug(true)
        );
    }

    #[test]
    fn legacy_option_names() {
        let config = WidgetConfig::from_json(
            r##"{"searchSelector":"#s","resultSelector":"#r","numResults":10,"isDebugging":true}"##,
        )
        .unwrap();
        assert_eq!(config.search_input_selector, "#s");
        assert_eq!(config.results_container_selector, "#r");
        assert_eq!(config.max_results, 10);
        assert!(config.debug);
    }

    #[test]
    fn partial_options_keep_other_defaults() {
        let config = WidgetConfig::from_json(r##"{"resultSelector":"#other"}"##).unwrap();
        assert_eq!(config.search_input_selector, "#q");
        assert_eq!(config.results_container_selector, "#other");
    }

    #[test]
    fn null_options_fall_back_to_defaults() {
        let config = WidgetConfig::from_json(
            r#"{"searchSelector":null,"resultSelector":null,"numResults":null,"isDebugging":null}"#,
        )
        .unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn empty_selectors_fall_back_to_defaults() {
        let config =
            WidgetConfig::from_json(r#"{"searchInputSelector":"","resultSelector":""}"#).unwrap();
        assert_eq!(config.search_input_selector, DEFAULT_SEARCH_INPUT_SELECTOR);
        assert_eq!(config.results_container_selector, DEFAULT_RESULTS_CONTAINER_SELECTOR);
    }

    #[test]
    fn zero_max_results_falls_back_to_default() {
        let config = WidgetConfig::from_json(r#"{"resultSelector":"","numResults":0}"#).unwrap();
        assert_eq!(config.results_container_selector, "#results");
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn rejects_mistyped_fields() {
        let error = WidgetConfig::from_json(r#"{"maxResults":"six"}"#).unwrap_err();
        assert!(error.to_string().starts_with("invalid widget options"));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        assert!(WidgetConfig::from_json(r#"{"theme":"dark"}"#).is_ok());
    }
}
