use std::{cell::RefCell, rc::Rc};

use catsearch_core::{Catalog, FilterOutcome, SearchWidget, WidgetConfig};
use tracing::{error, info, level_filters::LevelFilter};
use wasm_bindgen::{JsCast, closure::Closure, prelude::*};
use web_sys::{EventTarget, KeyboardEvent};

use crate::{
    dom::{DomDocument, DomInput, DomResults},
    error::WebError,
};

/// Widget bound to DOM handles.
pub type DomSearchWidget = SearchWidget<DomInput, DomResults>;

/// Builder for [`WebSearch`].
#[derive(Debug, Default, Clone)]
pub struct WebSearchBuilder {
    config: WidgetConfig,
    catalog: Option<Catalog>,
}

impl WebSearchBuilder {
    /// Creates a new builder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: WidgetConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the selector of the input the widget listens to.
    #[must_use]
    pub fn with_search_selector(mut self, selector: impl Into<String>) -> Self {
        self.config = self.config.with_search_input_selector(selector);
        self
    }

    /// Sets the selector of the element list items are appended to.
    #[must_use]
    pub fn with_results_selector(mut self, selector: impl Into<String>) -> Self {
        self.config = self.config.with_results_container_selector(selector);
        self
    }

    /// Filters a custom catalog instead of the built-in one.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Resolves the configured selectors in the current document, renders the
    /// catalog and starts listening for keystrokes.
    ///
    /// Selectors that match nothing are logged and left inert. A `debug`
    /// configuration installs the console forwarder at `debug` level.
    ///
    /// # Errors
    ///
    /// Returns an error if the DOM is unavailable, a selector is malformed, or
    /// list items cannot be inserted.
    pub fn build(self) -> Result<WebSearch, WebError> {
        self.build_in(&DomDocument::current()?)
    }

    /// Like [`build`](Self::build), against an explicit document.
    ///
    /// # Errors
    ///
    /// Returns an error if a selector is malformed or list items cannot be inserted.
    pub fn build_in(self, document: &DomDocument) -> Result<WebSearch, WebError> {
        if self.config.debug {
            crate::logging::install(LevelFilter::DEBUG);
        }
        let input = DomInput::new(document.select_input(&self.config.search_input_selector)?);
        let results = document.select_results(&self.config.results_container_selector)?;
        let catalog = self.catalog.unwrap_or_default();

        let widget = SearchWidget::with_catalog(self.config, catalog, input, results)?;
        let widget = Rc::new(RefCell::new(widget));
        let listener = KeyupListener::attach(&widget)?;

        info!(listening = listener.is_some(), "search widget ready");
        Ok(WebSearch { widget, listener })
    }
}

/// A `keyup` handler registered on the search input.
///
/// The closure holds a shared handle to the widget; dropping the listener
/// unregisters it.
#[derive(Debug)]
struct KeyupListener {
    target: EventTarget,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyupListener {
    fn attach(widget: &Rc<RefCell<DomSearchWidget>>) -> Result<Option<Self>, WebError> {
        let Some(target) = widget
            .borrow()
            .input()
            .element()
            .map(|field| field.event_target().clone())
        else {
            return Ok(None);
        };

        let handle = Rc::clone(widget);
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |_event: KeyboardEvent| {
            let Ok(mut widget) = handle.try_borrow_mut() else {
                return;
            };
            if let Err(err) = widget.handle_search_change() {
                error!(%err, "failed to filter categories");
            }
        });
        target.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;

        Ok(Some(Self { target, closure }))
    }
}

impl Drop for KeyupListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keyup", self.closure.as_ref().unchecked_ref());
    }
}

/// A search widget running inside the browser.
#[wasm_bindgen]
#[derive(Debug)]
pub struct WebSearch {
    widget: Rc<RefCell<DomSearchWidget>>,
    listener: Option<KeyupListener>,
}

impl WebSearch {
    /// Filters with `query` directly, bypassing the input element.
    ///
    /// # Errors
    ///
    /// Returns an error if an item's style cannot be changed.
    pub fn filter(&self, query: &str) -> Result<FilterOutcome, WebError> {
        self.widget.borrow_mut().search(query)
    }

    /// Shared handle to the underlying widget.
    #[must_use]
    pub const fn widget(&self) -> &Rc<RefCell<DomSearchWidget>> {
        &self.widget
    }

    /// Returns `true` if a search input was found and is being listened to.
    #[must_use]
    pub const fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

#[wasm_bindgen]
impl WebSearch {
    /// Creates a widget from a JavaScript options object.
    ///
    /// Recognised options are `searchInputSelector` (default `"#q"`),
    /// `resultsContainerSelector` (default `"#results"`), `maxResults` and
    /// `debug`. `undefined` and `null` mean "all defaults", as do `null` or
    /// empty individual selectors.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be read or the widget cannot be built.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Self, WebError> {
        let config = config_from_js(&options)?;
        WebSearchBuilder::new().with_config(config).build()
    }

    /// Filters with `query` and returns the number of visible categories.
    ///
    /// # Errors
    ///
    /// Returns an error if an item's style cannot be changed.
    #[wasm_bindgen(js_name = search)]
    pub fn search_js(&self, query: &str) -> Result<u32, WebError> {
        let outcome = self.filter(query)?;
        Ok(u32::try_from(outcome.visible_count()).unwrap_or(u32::MAX))
    }

    /// Keys of the categories currently shown, in catalog order.
    #[wasm_bindgen(js_name = visibleKeys)]
    #[must_use]
    pub fn visible_keys(&self) -> js_sys::Array {
        self.widget
            .borrow()
            .results()
            .visible_keys()
            .map(JsValue::from_str)
            .collect()
    }
}

fn config_from_js(options: &JsValue) -> Result<WidgetConfig, WebError> {
    if options.is_undefined() || options.is_null() {
        return Ok(WidgetConfig::default());
    }
    let json: String = js_sys::JSON::stringify(options)?.into();
    Ok(WidgetConfig::from_json(&json)?)
}
