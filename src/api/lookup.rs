//! Label lookup exposed to JavaScript

use js_sys::{Array, Reflect};
use wasm_bindgen::prelude::*;

use crate::utils::kv::NOT_FOUND_LABEL;

/// Label of the first `{ value, label }` option whose value is `=== value`.
///
/// # Returns
/// The option's `label`, or `"no matching value"` when nothing matches
#[wasm_bindgen(js_name = labelByValue)]
pub fn label_by_value(value: &JsValue, options: &Array) -> JsValue {
    let value_key = JsValue::from_str("value");
    let label_key = JsValue::from_str("label");

    options
        .iter()
        .find(|option| {
            Reflect::get(option, &value_key)
                .map(|candidate| candidate == *value)
                .unwrap_or(false)
        })
        .and_then(|option| Reflect::get(&option, &label_key).ok())
        .unwrap_or_else(|| JsValue::from_str(NOT_FOUND_LABEL))
}
