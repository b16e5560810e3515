//! Copy request specification
//!
//! A `CopySpec` describes what a copy interaction should put on the
//! clipboard. It is decoded once, when the directive is bound to an
//! element, and consulted on every click afterwards.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// What a copy interaction resolves and copies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopySpec {
    /// Copy this exact string
    Literal(String),

    /// Copy the current value (or rendered text) of the first element
    /// matching `selector`, looked up at click time
    BySelector {
        selector: String,
        suppress_message: bool,
    },

    /// Copy a string captured when the directive was bound
    ByValue {
        value: String,
        suppress_message: bool,
    },

    /// Binding value with no recognizable shape; resolves to nothing
    Unrecognized,
}

impl CopySpec {
    pub fn literal(text: impl Into<String>) -> Self {
        CopySpec::Literal(text.into())
    }

    pub fn selector(selector: impl Into<String>) -> Self {
        CopySpec::BySelector {
            selector: selector.into(),
            suppress_message: false,
        }
    }

    pub fn value(value: impl Into<String>) -> Self {
        CopySpec::ByValue {
            value: value.into(),
            suppress_message: false,
        }
    }

    /// Return the same spec with the success notification suppressed.
    /// Literal and unrecognized specs always notify.
    pub fn silent(self) -> Self {
        match self {
            CopySpec::BySelector { selector, .. } => CopySpec::BySelector {
                selector,
                suppress_message: true,
            },
            CopySpec::ByValue { value, .. } => CopySpec::ByValue {
                value,
                suppress_message: true,
            },
            other => other,
        }
    }

    /// Whether a successful copy should stay quiet
    pub fn suppresses_message(&self) -> bool {
        match self {
            CopySpec::BySelector { suppress_message, .. }
            | CopySpec::ByValue { suppress_message, .. } => *suppress_message,
            CopySpec::Literal(_) | CopySpec::Unrecognized => false,
        }
    }

    /// Decode a directive binding value (string or options object) from any
    /// serde source: a `serde_json::Value`, or a `JsValue` through
    /// `serde_wasm_bindgen::Deserializer`.
    ///
    /// Binding is never rejected; unreadable values become `Unrecognized`.
    pub fn decode<'de, D>(deserializer: D) -> Self
    where
        D: Deserializer<'de>,
    {
        BindingValue::deserialize(deserializer)
            .map(CopySpec::from)
            .unwrap_or(CopySpec::Unrecognized)
    }

    /// Build a spec from `data-copy*` attributes of an element.
    ///
    /// `data-copy-selector` wins over `data-copy-value`, which wins over a
    /// plain `data-copy` literal. `data-copy-message="false"` silences the
    /// success notification.
    pub fn from_attributes<F>(attribute: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let suppress_message = attribute(MESSAGE_ATTRIBUTE).as_deref() == Some("false");

        if let Some(selector) = attribute(SELECTOR_ATTRIBUTE).filter(|s| !s.is_empty()) {
            return CopySpec::BySelector {
                selector,
                suppress_message,
            };
        }
        if let Some(value) = attribute(VALUE_ATTRIBUTE) {
            return CopySpec::ByValue {
                value,
                suppress_message,
            };
        }
        match attribute(LITERAL_ATTRIBUTE) {
            Some(text) => CopySpec::Literal(text),
            None => CopySpec::Unrecognized,
        }
    }
}

pub const LITERAL_ATTRIBUTE: &str = "data-copy";
pub const SELECTOR_ATTRIBUTE: &str = "data-copy-selector";
pub const VALUE_ATTRIBUTE: &str = "data-copy-value";
pub const MESSAGE_ATTRIBUTE: &str = "data-copy-message";

/// CSS selector matching every element that declares a copy binding
pub const DECLARED_COPY_SELECTOR: &str = "[data-copy], [data-copy-selector], [data-copy-value]";

// ============================================================================
// Binding value decoding
// ============================================================================

/// Raw directive binding value as it arrives from JavaScript.
///
/// `Options` only accepts maps, so arrays and other non-object values fall
/// through to `Other`.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum BindingValue {
    Text(String),
    Options(Map<String, Value>),
    Other(serde::de::IgnoredAny),
}

impl From<BindingValue> for CopySpec {
    fn from(binding: BindingValue) -> Self {
        match binding {
            BindingValue::Text(text) => CopySpec::Literal(text),
            BindingValue::Options(options) => spec_from_options(&options),
            BindingValue::Other(_) => CopySpec::Unrecognized,
        }
    }
}

/// `{ selector }` wins over `{ value }`; `message: false` silences success.
fn spec_from_options(options: &Map<String, Value>) -> CopySpec {
    let suppress_message = matches!(options.get("message"), Some(Value::Bool(false)));

    if let Some(Value::String(selector)) = options.get("selector") {
        if !selector.is_empty() {
            return CopySpec::BySelector {
                selector: selector.clone(),
                suppress_message,
            };
        }
    }

    match options.get("value") {
        // `undefined` arrives as null too
        None | Some(Value::Null) => CopySpec::Unrecognized,
        Some(value) => CopySpec::ByValue {
            value: value_to_text(value),
            suppress_message,
        },
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// String form of a captured value. Falsy scalars (`false`, `0`) become
/// empty so they resolve to "nothing to copy". Arrays and objects are
/// copied as JSON text rather than JS `String(value)`, which would give
/// `[object Object]` or a comma-joined list.
fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => String::new(),
            // JS prints integral numbers without a fraction
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => (f as i64).to_string(),
            _ => n.to_string(),
        },
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
