use std::collections::{HashMap, HashSet};

use catsearch_core::{Fragment, QuerySource, ResultsSurface, markup::LABEL_CLASS};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window,
};

use crate::error::WebError;

/// The document the widget's elements live in.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: Document,
}

impl DomDocument {
    /// Resolves the document of the current browsing context.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside of a browser window.
    pub fn current() -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self { document })
    }

    /// Wraps an existing document.
    #[must_use]
    pub const fn new(document: Document) -> Self {
        Self { document }
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Js`] if `selector` is not a valid CSS selector.
    pub fn select_all(&self, selector: &str) -> Result<Vec<Element>, WebError> {
        let nodes = self.document.query_selector_all(selector)?;
        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// The first element matching `selector`, if it is an `<input>` or a `<textarea>`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Js`] if `selector` is not a valid CSS selector.
    pub fn select_input(&self, selector: &str) -> Result<Option<SearchField>, WebError> {
        let Some(element) = self.document.query_selector(selector)? else {
            warn!(selector, "search input not found; keystrokes will not be observed");
            return Ok(None);
        };
        let field = SearchField::from_element(element);
        if let Err(tag) = &field {
            warn!(
                selector,
                tag = %tag,
                "search selector matched an element without a value; keystrokes will not be observed"
            );
        }
        Ok(field.ok())
    }

    /// Builds a [`DomResults`] over every element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Js`] if `selector` is not a valid CSS selector.
    pub fn select_results(&self, selector: &str) -> Result<DomResults, WebError> {
        let containers = self.select_all(selector)?;
        if containers.is_empty() {
            warn!(selector, "results container not found; categories will not be rendered");
        }
        Ok(DomResults::new(self.document.clone(), containers))
    }
}

/// A text control the widget can read a query from.
#[derive(Debug, Clone)]
pub enum SearchField {
    /// An `<input>` element.
    Input(HtmlInputElement),
    /// A `<textarea>` element.
    TextArea(HtmlTextAreaElement),
}

impl SearchField {
    /// Classifies `element`, handing back its tag name when it holds no value.
    fn from_element(element: Element) -> Result<Self, String> {
        let element = match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => return Ok(Self::Input(input)),
            Err(element) => element,
        };
        match element.dyn_into::<HtmlTextAreaElement>() {
            Ok(area) => Ok(Self::TextArea(area)),
            Err(element) => Err(element.tag_name().to_lowercase()),
        }
    }

    /// Current text of the control.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    /// The control as an event target, for registering listeners.
    #[must_use]
    pub fn event_target(&self) -> &EventTarget {
        match self {
            Self::Input(input) => input.as_ref(),
            Self::TextArea(area) => area.as_ref(),
        }
    }
}

/// Search input backed by an `<input>` or `<textarea>` element.
#[derive(Debug, Clone)]
pub struct DomInput {
    element: Option<SearchField>,
}

impl DomInput {
    /// Wraps the resolved control, or nothing when the selector matched nothing.
    #[must_use]
    pub const fn new(element: Option<SearchField>) -> Self {
        Self { element }
    }

    /// The bound control.
    #[must_use]
    pub const fn element(&self) -> Option<&SearchField> {
        self.element.as_ref()
    }
}

impl QuerySource for DomInput {
    fn query(&self) -> String {
        self.element
            .as_ref()
            .map(SearchField::value)
            .unwrap_or_default()
    }
}

/// Results container backed by one or more DOM elements.
///
/// Every appended list item is inserted into each container, and visibility is
/// toggled with an inline `display: none`, leaving the nodes in place.
#[derive(Debug, Clone)]
pub struct DomResults {
    document: Document,
    containers: Vec<Element>,
    items: HashMap<String, Vec<HtmlElement>>,
    order: Vec<String>,
    hidden: HashSet<String>,
}

impl DomResults {
    /// Creates a results surface over the given containers.
    #[must_use]
    pub fn new(document: Document, containers: Vec<Element>) -> Self {
        Self {
            document,
            containers,
            items: HashMap::new(),
            order: Vec::new(),
            hidden: HashSet::new(),
        }
    }

    /// The elements list items are appended to.
    #[must_use]
    pub fn containers(&self) -> &[Element] {
        &self.containers
    }

    /// Keys of the rendered items that are currently shown, in insertion order.
    pub fn visible_keys(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|key| !self.hidden.contains(*key))
            .map(String::as_str)
    }

    fn build_item(&self, fragment: &Fragment) -> Result<HtmlElement, WebError> {
        let item = self.document.create_element("li")?;
        item.set_id(&fragment.id);

        let anchor = self.document.create_element("a")?;
        anchor.set_attribute("href", &fragment.href)?;

        let label = self.document.create_element("label")?;
        label.set_class_name(LABEL_CLASS);

        let span = self.document.create_element("span")?;
        span.set_class_name("");
        span.set_text_content(Some(&fragment.text));

        label.append_child(&span)?;
        anchor.append_child(&label)?;
        item.append_child(&anchor)?;

        item.dyn_into::<HtmlElement>()
            .map_err(|element| WebError::from(wasm_bindgen::JsValue::from(element)))
    }
}

impl ResultsSurface for DomResults {
    type Error = WebError;

    fn append(&mut self, fragment: &Fragment) -> Result<(), Self::Error> {
        for container in &self.containers {
            let item = self.build_item(fragment)?;
            container.append_child(&item)?;
            self.items.entry(fragment.id.clone()).or_default().push(item);
        }
        if !self.containers.is_empty() {
            self.order.push(fragment.id.clone());
        }
        Ok(())
    }

    fn set_visible(&mut self, key: &str, visible: bool) -> Result<(), Self::Error> {
        let Some(items) = self.items.get(key) else {
            return Ok(());
        };
        for item in items {
            let style = item.style();
            if visible {
                style.remove_property("display")?;
            } else {
                style.set_property("display", "none")?;
            }
        }
        if visible {
            self.hidden.remove(key);
        } else {
            self.hidden.insert(key.to_owned());
        }
        Ok(())
    }
}
