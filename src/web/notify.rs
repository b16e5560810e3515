//! Transient message sinks
//!
//! `JsNotifier` forwards to a message service handed over from JavaScript
//! (anything with `success(text)` and `error(text)` methods, such as a UI
//! library's message API). `ConsoleNotifier` is the fallback when the host
//! page gives us none.

use wasm_bindgen::prelude::*;

use crate::copy::Notifier;

#[wasm_bindgen]
extern "C" {
    /// JS object exposing `success(message)` and `error(message)`
    pub type MessageService;

    #[wasm_bindgen(method, catch, js_name = success)]
    fn show_success(this: &MessageService, message: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = error)]
    fn show_error(this: &MessageService, message: &str) -> Result<JsValue, JsValue>;
}

pub struct JsNotifier {
    service: MessageService,
}

impl JsNotifier {
    pub fn new(service: MessageService) -> Self {
        Self { service }
    }
}

impl Notifier for JsNotifier {
    fn success(&self, message: &str) {
        if let Err(err) = self.service.show_success(message) {
            log::warn!("message service failed to show success: {:?}", err);
        }
    }

    fn error(&self, message: &str) {
        if let Err(err) = self.service.show_error(message) {
            log::warn!("message service failed to show error: {:?}", err);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Whichever sink the application was configured with
pub enum PageNotifier {
    Service(JsNotifier),
    Console(ConsoleNotifier),
}

impl From<Option<MessageService>> for PageNotifier {
    fn from(service: Option<MessageService>) -> Self {
        match service {
            Some(service) => PageNotifier::Service(JsNotifier::new(service)),
            None => PageNotifier::Console(ConsoleNotifier),
        }
    }
}

impl Notifier for PageNotifier {
    fn success(&self, message: &str) {
        match self {
            PageNotifier::Service(n) => n.success(message),
            PageNotifier::Console(n) => n.success(message),
        }
    }

    fn error(&self, message: &str) {
        match self {
            PageNotifier::Service(n) => n.error(message),
            PageNotifier::Console(n) => n.error(message),
        }
    }
}
