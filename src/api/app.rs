//! Application bootstrap
//!
//! `Application` is what the host page instantiates: it reads the
//! configuration, wires the copy directive to the page's message service
//! and clipboard, mounts onto the root element and answers routing queries.

use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::EventTarget;

use crate::api::helpers::{deserialize_or_default, js_error, serialize};
use crate::copy::CopyHandler;
use crate::models::{AppConfig, CopySpec};
use crate::router::APP_ROUTES;
use crate::web::{
    attach_copy, attach_declared, CopyBinding, MessageService, NavigatorClipboard, PageNotifier,
    WebCopyHandler, WebDocument,
};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

#[wasm_bindgen]
pub struct Application {
    config: AppConfig,
    document: WebDocument,
    handler: Rc<WebCopyHandler>,
    bindings: Vec<CopyBinding>,
}

#[wasm_bindgen]
impl Application {
    /// Create the application.
    ///
    /// # Parameters
    /// - `config`: plain object matching `AppConfig` (camelCase); `undefined` for defaults
    /// - `message_service`: object with `success(text)` / `error(text)`; when
    ///   omitted, messages go to the console
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        message_service: Option<MessageService>,
    ) -> Result<Application, JsValue> {
        let config: AppConfig = deserialize_or_default(config, "Invalid application config")?;
        config.validate().map_err(js_error)?;
        log::set_max_level(config.level().map_err(js_error)?.to_level_filter());

        let document = WebDocument::from_window().ok_or_else(|| js_error("No document available"))?;
        let handler = CopyHandler::new(
            document.clone(),
            NavigatorClipboard,
            PageNotifier::from(message_service),
        )
        .with_messages(config.messages.clone());

        wasm_info!(
            "Application created: ui size={}, zIndex={}, mount={}",
            config.ui.size,
            config.ui.z_index,
            config.mount_selector
        );

        Ok(Self {
            config,
            document,
            handler: Rc::new(handler),
            bindings: Vec::new(),
        })
    }

    /// Mount onto the configured root and bind every element that declares
    /// a `data-copy*` attribute. Re-mounting replaces earlier bindings.
    ///
    /// # Returns
    /// Number of copy bindings created
    pub fn mount(&mut self) -> Result<usize, JsValue> {
        let selector = &self.config.mount_selector;
        let root = self
            .document
            .document()
            .query_selector(selector)?
            .ok_or_else(|| js_error(format!("Mount point '{}' not found", selector)))?;

        // Earlier bindings stay live if attaching fails
        let bindings = attach_declared(&root, &self.handler)?;
        self.bindings = bindings;

        if self.bindings.is_empty() {
            wasm_warn!("No data-copy elements found under '{}'", selector);
        }
        wasm_info!("Mounted on '{}' with {} copy bindings", selector, self.bindings.len());
        Ok(self.bindings.len())
    }

    /// Drop all bindings created by `mount`
    pub fn unmount(&mut self) {
        wasm_log!("Unmounting {} copy bindings", self.bindings.len());
        self.bindings.clear();
    }

    /// Bind the copy directive to `element`.
    ///
    /// `value` is a string, `{ selector, message? }` or `{ value, message? }`.
    /// Unusable values are accepted and only report an error when clicked.
    #[wasm_bindgen(js_name = bindCopy)]
    pub fn bind_copy(&self, element: &EventTarget, value: JsValue) -> Result<CopyBinding, JsValue> {
        let spec = spec_from_js(value);
        if spec == CopySpec::Unrecognized {
            wasm_warn!("bindCopy: unrecognized binding value; clicks will report nothing to copy");
        } else {
            wasm_log!("bindCopy: {:?}", spec);
        }
        attach_copy(element, spec, Rc::clone(&self.handler))
    }

    /// Run one copy immediately, as if a bound element had been clicked.
    ///
    /// Resolves with the copied text; rejects with the failure reason after
    /// the user has been notified.
    pub fn copy(&self, value: JsValue) -> Promise {
        let spec = spec_from_js(value);
        let handler = Rc::clone(&self.handler);
        future_to_promise(async move {
            handler
                .handle_click(&spec)
                .await
                .map(|text| JsValue::from_str(&text))
                .map_err(|err| {
                    wasm_error!("copy: {}", err);
                    JsValue::from_str(&err.to_string())
                })
        })
    }

    /// Resolve a path against the route table, following redirects.
    #[wasm_bindgen(js_name = resolveRoute)]
    pub fn resolve_route(&self, path: &str) -> Result<JsValue, JsValue> {
        let matched = APP_ROUTES.resolve(path).map_err(js_error)?;
        serialize(&matched, "Failed to serialize route match")
    }

    /// Full route table, for building menus
    pub fn routes(&self) -> Result<JsValue, JsValue> {
        serialize(&APP_ROUTES.routes(), "Failed to serialize routes")
    }

    /// Effective configuration after defaults were applied
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serialize(&self.config, "Failed to serialize config")
    }

    #[wasm_bindgen(getter, js_name = bindingCount)]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

/// Decode a JS binding value; anything unreadable becomes `Unrecognized`.
pub fn spec_from_js(value: JsValue) -> CopySpec {
    CopySpec::decode(serde_wasm_bindgen::Deserializer::from(value))
}
