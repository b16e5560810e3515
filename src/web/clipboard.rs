//! Async Clipboard API (`navigator.clipboard.writeText`)

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::copy::{ClipboardError, ClipboardSink};

/// The browser's system clipboard
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigatorClipboard;

impl ClipboardSink for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window()
            .ok_or_else(|| ClipboardError::Unavailable("no window".to_string()))?;

        // `navigator.clipboard` is undefined outside secure contexts
        let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
            .ok_or_else(|| ClipboardError::Unavailable("navigator.clipboard is missing".to_string()))?
            .unchecked_into::<web_sys::Clipboard>();

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(describe_js_error(&err)))
    }
}

/// Readable text for a rejected promise value
pub fn describe_js_error(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
