//! DOM lookup backed by `web_sys::Document`

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::copy::{ElementLookup, TargetContent};

/// Live view of the page document; every query reads the current DOM
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the global window, if there is one
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl ElementLookup for WebDocument {
    fn query(&self, selector: &str) -> Option<TargetContent> {
        match self.document.query_selector(selector) {
            Ok(found) => found.map(|element| read_content(&element)),
            Err(err) => {
                // querySelector throws on malformed selectors
                log::warn!("invalid selector '{}': {:?}", selector, err);
                None
            }
        }
    }
}

/// Value of value-bearing elements (`'value' in el`), else rendered text.
pub fn read_content(element: &Element) -> TargetContent {
    let key = JsValue::from_str("value");
    if Reflect::has(element, &key).unwrap_or(false) {
        let value = Reflect::get(element, &key)
            .map(|v| js_to_text(&v))
            .unwrap_or_default();
        return TargetContent::Value(value);
    }

    match element.dyn_ref::<HtmlElement>() {
        Some(html) => TargetContent::Text(html.inner_text()),
        None => TargetContent::Text(element.text_content().unwrap_or_default()),
    }
}

/// JS `String(v)` for truthy values; falsy ones (`0`, `null`, `NaN`) are empty.
///
/// Numeric `value`s (`<li value="3">`, `<progress>`, `<meter>`) copy as "3".
fn js_to_text(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if value.is_falsy() {
        return String::new();
    }
    String::from(value.unchecked_ref::<js_sys::Object>().to_string())
}
