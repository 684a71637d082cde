//! Browser tests. Run with `wasm-pack test --headless --firefox backends/web`.
#![cfg(target_arch = "wasm32")]

use catsearch_core::{Catalog, CategoryRecord, WidgetConfig};
use catsearch_web::{DomDocument, WebSearch, WebSearchBuilder};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> DomDocument {
    DomDocument::current().unwrap()
}

/// Mounts a fresh `<input>` and `<ul>` with the given ids and returns them.
fn mount(input_id: &str, results_id: &str) -> (HtmlInputElement, Element) {
    let doc = document();
    let body = doc.document().body().unwrap();
    for id in [input_id, results_id] {
        if let Some(old) = doc.document().get_element_by_id(id) {
            old.remove();
        }
    }

    let input = doc.document().create_element("input").unwrap();
    input.set_id(input_id);
    body.append_child(&input).unwrap();

    let results = doc.document().create_element("ul").unwrap();
    results.set_id(results_id);
    body.append_child(&results).unwrap();

    (input.dyn_into().unwrap(), results)
}

fn displayed_ids(results: &Element) -> Vec<String> {
    let children = results.children();
    (0..children.length())
        .filter_map(|index| children.item(index))
        .filter_map(|child| child.dyn_into::<HtmlElement>().ok())
        .filter(|child| child.style().get_property_value("display").unwrap() != "none")
        .map(|child| child.id())
        .collect()
}

fn type_text(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    let event = KeyboardEvent::new("keyup").unwrap();
    input.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
fn renders_one_item_per_category() {
    let (_, results) = mount("q-render", "results-render");
    let _search = WebSearchBuilder::new()
        .with_search_selector("#q-render")
        .with_results_selector("#results-render")
        .build()
        .unwrap();

    assert_eq!(results.child_element_count(), 7);
    let first = results.first_element_child().unwrap();
    assert_eq!(first.id(), "ps");
    assert_eq!(
        first.query_selector("a").unwrap().unwrap().get_attribute("href").as_deref(),
        Some("/products/search")
    );
    assert_eq!(
        first.text_content().unwrap().trim(),
        "ps Products & Services"
    );
    assert_eq!(
        first.query_selector("label").unwrap().unwrap().class_name(),
        "checkbox"
    );
}

#[wasm_bindgen_test]
fn keyup_filters_the_list() {
    let (input, results) = mount("q-keyup", "results-keyup");
    let search = WebSearchBuilder::new()
        .with_search_selector("#q-keyup")
        .with_results_selector("#results-keyup")
        .build()
        .unwrap();
    assert!(search.is_listening());

    type_text(&input, "Location");
    assert_eq!(displayed_ids(&results), ["loc"]);
    assert_eq!(results.child_element_count(), 7);

    type_text(&input, "xyz");
    assert!(displayed_ids(&results).is_empty());

    type_text(&input, "");
    assert_eq!(displayed_ids(&results).len(), 7);
}

#[wasm_bindgen_test]
fn dropping_the_widget_stops_listening() {
    let (input, results) = mount("q-drop", "results-drop");
    let search = WebSearchBuilder::new()
        .with_search_selector("#q-drop")
        .with_results_selector("#results-drop")
        .build()
        .unwrap();
    drop(search);

    type_text(&input, "xyz");
    assert_eq!(displayed_ids(&results).len(), 7);
}

#[wasm_bindgen_test]
fn missing_elements_are_inert() {
    let search = WebSearchBuilder::new()
        .with_search_selector("#does-not-exist")
        .with_results_selector("#also-missing")
        .build()
        .unwrap();
    assert!(!search.is_listening());
    assert_eq!(search.filter("loc").unwrap().visible_count(), 1);
    assert_eq!(search.visible_keys().length(), 0);
}

#[wasm_bindgen_test]
fn custom_catalog() {
    let (input, results) = mount("q-custom", "results-custom");
    let catalog = Catalog::new([
        CategoryRecord::new("a", "Apples", "/apples", "Apple"),
        CategoryRecord::new("b", "Bananas", "/bananas", "Banana"),
    ])
    .unwrap();
    let _search = WebSearchBuilder::new()
        .with_search_selector("#q-custom")
        .with_results_selector("#results-custom")
        .with_catalog(catalog)
        .build_in(&document())
        .unwrap();

    type_text(&input, "APP");
    assert_eq!(displayed_ids(&results), ["a"]);
}

#[wasm_bindgen_test]
fn javascript_constructor_reads_legacy_options() {
    let (_, results) = mount("q-js", "results-js");
    let options = js_sys::JSON::parse(r##"{"searchSelector":"#q-js","resultSelector":"#results-js","numResults":6}"##)
        .unwrap();
    let search = WebSearch::new(options).unwrap();
    assert_eq!(search.search_js("view").unwrap(), 1);
    assert_eq!(displayed_ids(&results), ["rev"]);
}

#[wasm_bindgen_test]
fn javascript_constructor_rejects_bad_options() {
    let options = js_sys::JSON::parse(r#"{"maxResults":"lots"}"#).unwrap();
    let error = WebSearch::new(options).unwrap_err();
    assert!(error.to_string().starts_with("invalid search widget options"));
    let _ = JsValue::from(error);
}

#[wasm_bindgen_test]
fn javascript_constructor_treats_empty_options_as_defaults() {
    let (_, results) = mount("q-falsy", "results");
    let options = js_sys::JSON::parse(
        r##"{"searchSelector":"#q-falsy","resultSelector":"","numResults":0,"isDebugging":null}"##,
    )
    .unwrap();
    let search = WebSearch::new(options).unwrap();
    assert!(search.is_listening());
    assert_eq!(results.child_element_count(), 7);
    assert_eq!(search.widget().borrow().config().max_results, 6);
}

#[wasm_bindgen_test]
fn textarea_is_a_valid_search_input() {
    let (_, results) = mount("q-unused", "results-area");
    let doc = document();
    if let Some(old) = doc.document().get_element_by_id("q-area") {
        old.remove();
    }
    let area: HtmlTextAreaElement = doc.document().create_element("textarea").unwrap().dyn_into().unwrap();
    area.set_id("q-area");
    doc.document().body().unwrap().append_child(&area).unwrap();

    let search = WebSearchBuilder::new()
        .with_search_selector("#q-area")
        .with_results_selector("#results-area")
        .build()
        .unwrap();
    assert!(search.is_listening());

    area.set_value("tenant");
    area.dispatch_event(&KeyboardEvent::new("keyup").unwrap()).unwrap();
    assert_eq!(displayed_ids(&results), ["ten"]);
}

#[wasm_bindgen_test]
fn element_without_a_value_is_not_listened_to() {
    let (_, _results) = mount("q-div-unused", "results-div");
    let doc = document();
    if let Some(old) = doc.document().get_element_by_id("q-div") {
        old.remove();
    }
    let div = doc.document().create_element("div").unwrap();
    div.set_id("q-div");
    doc.document().body().unwrap().append_child(&div).unwrap();

    let search = WebSearchBuilder::new()
        .with_search_selector("#q-div")
        .with_results_selector("#results-div")
        .build()
        .unwrap();
    assert!(!search.is_listening());
}

#[wasm_bindgen_test]
fn debug_builder_installs_console_logging() {
    let (_, _results) = mount("q-debug", "results-debug");
    let _search = WebSearchBuilder::new()
        .with_config(
            WidgetConfig::new()
                .with_search_input_selector("#q-debug")
                .with_results_container_selector("#results-debug")
                .with_debug(true),
        )
        .build()
        .unwrap();
    assert!(tracing::enabled!(tracing::Level::DEBUG));
}
