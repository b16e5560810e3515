//! Browser tests for the copy directive
//!
//! Runs the real DOM lookup and click wiring with a recording clipboard, so
//! no clipboard permission is needed.

use std::cell::RefCell;
use std::rc::Rc;

use devkit_wasm::api::{label_by_value, spec_from_js, Application};
use devkit_wasm::copy::{
    ClipboardError, ClipboardSink, CopyError, CopyHandler, ElementLookup, Notifier, TargetContent,
};
use devkit_wasm::models::CopySpec;
use devkit_wasm::web::{attach_copy, attach_declared, MessageService, NavigatorClipboard, WebDocument};
use js_sys::{Array, Function, Object, Promise, Reflect, JSON};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Default)]
struct RecordingClipboard {
    writes: RefCell<Vec<String>>,
}

impl ClipboardSink for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

type TestHandler = CopyHandler<WebDocument, Rc<RecordingClipboard>, Rc<RecordingNotifier>>;

fn handler() -> (Rc<TestHandler>, Rc<RecordingClipboard>, Rc<RecordingNotifier>) {
    let clipboard = Rc::new(RecordingClipboard::default());
    let notifier = Rc::new(RecordingNotifier::default());
    let handler = CopyHandler::new(
        WebDocument::from_window().unwrap(),
        clipboard.clone(),
        notifier.clone(),
    );
    (Rc::new(handler), clipboard, notifier)
}

/// Append a fixture to <body>; the caller removes it
fn fixture(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_inner_html(html);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn by_id(id: &str) -> HtmlElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

/// JS message service recording into `successes` / `errors` arrays
fn message_service() -> MessageService {
    Function::new_no_args(
        "const s = { successes: [], errors: [] };
         s.success = (m) => { s.successes.push(m); };
         s.error = (m) => { s.errors.push(m); };
         return s;",
    )
    .call0(&JsValue::NULL)
    .unwrap()
    .unchecked_into()
}

fn recorded(target: &JsValue, key: &str) -> Vec<String> {
    Reflect::get(target, &JsValue::from_str(key))
        .unwrap()
        .unchecked_into::<Array>()
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

fn js_object(body: &str) -> JsValue {
    Function::new_no_args(body).call0(&JsValue::NULL).unwrap()
}

/// Clipboard stand-in that records into `texts` and always resolves
fn recording_clipboard() -> JsValue {
    js_object(
        "const c = { texts: [] };
         c.writeText = (t) => { c.texts.push(t); return Promise.resolve(); };
         return c;",
    )
}

/// Shadow `navigator.clipboard` with `stub` until `restore_clipboard`
fn stub_clipboard(stub: &JsValue) {
    let navigator = web_sys::window().unwrap().navigator();
    let descriptor = Object::new();
    Reflect::set(&descriptor, &"value".into(), stub).unwrap();
    Reflect::set(&descriptor, &"configurable".into(), &JsValue::TRUE).unwrap();
    Reflect::define_property(&navigator, &"clipboard".into(), &descriptor).unwrap();
}

fn restore_clipboard() {
    let navigator = web_sys::window().unwrap().navigator();
    Reflect::delete_property(&navigator, &"clipboard".into()).unwrap();
}

fn app_error(result: Result<Application, JsValue>) -> String {
    match result {
        Ok(_) => panic!("expected the application to be rejected"),
        Err(err) => err.as_string().unwrap_or_default(),
    }
}

/// Wait for spawned click tasks to finish
async fn settle() {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn test_lookup_reads_input_value_and_text() {
    let container = fixture(
        r#"<input id="lk-input" value="abc"><span id="lk-span">hello</span><textarea id="lk-area">multi</textarea>"#,
    );
    let document = WebDocument::from_window().unwrap();

    assert_eq!(document.query("#lk-input"), Some(TargetContent::Value("abc".into())));
    assert_eq!(document.query("#lk-span"), Some(TargetContent::Text("hello".into())));
    assert_eq!(document.query("#lk-area"), Some(TargetContent::Value("multi".into())));
    assert_eq!(document.query("#lk-missing"), None);

    container.remove();
}

#[wasm_bindgen_test]
fn test_lookup_stringifies_numeric_values() {
    let container = fixture(
        r#"<ol><li id="nv-li" value="3">third</li></ol><progress id="nv-prog" value="0" max="10"></progress>"#,
    );
    let document = WebDocument::from_window().unwrap();

    assert_eq!(document.query("#nv-li"), Some(TargetContent::Value("3".into())));
    // Zero is falsy, so there is nothing to copy
    assert_eq!(document.query("#nv-prog"), Some(TargetContent::Value(String::new())));

    container.remove();
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_not_found() {
    let document = WebDocument::from_window().unwrap();
    assert_eq!(document.query("##not a selector"), None);
}

#[wasm_bindgen_test]
async fn test_click_copies_current_input_value() {
    let container = fixture(r#"<input id="ck-input" value=""><button id="ck-btn">copy</button>"#);
    let (handler, clipboard, notifier) = handler();
    let button = by_id("ck-btn");
    let _binding = attach_copy(&button, CopySpec::selector("#ck-input"), handler).unwrap();

    // Value changes after binding are picked up at click time
    js_sys::Reflect::set(&by_id("ck-input"), &"value".into(), &"typed".into()).unwrap();
    button.click();
    settle().await;

    assert_eq!(*clipboard.writes.borrow(), vec!["typed"]);
    assert_eq!(*notifier.successes.borrow(), vec!["copy succeeded"]);
    assert!(notifier.errors.borrow().is_empty());

    container.remove();
}

#[wasm_bindgen_test]
async fn test_click_on_missing_target_reports_error() {
    let container = fixture(r#"<button id="mt-btn">copy</button>"#);
    let (handler, clipboard, notifier) = handler();
    let button = by_id("mt-btn");
    let _binding = attach_copy(&button, CopySpec::selector("#mt-nowhere"), handler).unwrap();

    button.click();
    settle().await;

    assert!(clipboard.writes.borrow().is_empty());
    assert_eq!(*notifier.errors.borrow(), vec!["target element not found"]);

    container.remove();
}

#[wasm_bindgen_test]
async fn test_unbind_stops_copying() {
    let container = fixture(r#"<button id="ub-btn">copy</button>"#);
    let (handler, clipboard, _notifier) = handler();
    let button = by_id("ub-btn");
    let mut binding = attach_copy(&button, CopySpec::literal("once"), handler).unwrap();

    button.click();
    settle().await;
    binding.unbind();
    assert!(!binding.is_bound());
    button.click();
    settle().await;

    assert_eq!(*clipboard.writes.borrow(), vec!["once"]);

    container.remove();
}

#[wasm_bindgen_test]
async fn test_declared_bindings() {
    let container = fixture(
        r##"<span id="db-src">from span</span>
           <button id="db-lit" data-copy="literal text">a</button>
           <button id="db-sel" data-copy-selector="#db-src" data-copy-message="false">b</button>
           <button>not bound</button>"##,
    );
    let (handler, clipboard, notifier) = handler();
    let bindings = attach_declared(&container, &handler).unwrap();
    assert_eq!(bindings.len(), 2);

    by_id("db-lit").click();
    by_id("db-sel").click();
    settle().await;

    assert_eq!(*clipboard.writes.borrow(), vec!["literal text", "from span"]);
    // The selector binding is silent
    assert_eq!(notifier.successes.borrow().len(), 1);

    drop(bindings);
    container.remove();
}

#[wasm_bindgen_test]
fn test_spec_from_js_values() {
    let parse = |json: &str| spec_from_js(JSON::parse(json).unwrap());

    assert_eq!(spec_from_js(JsValue::from_str("plain")), CopySpec::literal("plain"));
    assert_eq!(parse(r##"{"selector":"#in"}"##), CopySpec::selector("#in"));
    assert_eq!(parse(r#"{"value":"v","message":false}"#), CopySpec::value("v").silent());
    assert_eq!(parse(r#"{"value":7}"#), CopySpec::value("7"));
    assert_eq!(parse("{}"), CopySpec::Unrecognized);
    assert_eq!(parse(r##"["#in"]"##), CopySpec::Unrecognized);
    assert_eq!(parse(r#"[null,"hello"]"#), CopySpec::Unrecognized);
    assert_eq!(spec_from_js(JsValue::UNDEFINED), CopySpec::Unrecognized);
}

#[wasm_bindgen_test]
fn test_label_by_value_uses_strict_equality() {
    let options: Array = JSON::parse(r#"[{"value":1,"label":"one"},{"value":"1","label":"string one"}]"#)
        .unwrap()
        .unchecked_into();

    assert_eq!(label_by_value(&JsValue::from(1), &options), JsValue::from_str("one"));
    assert_eq!(label_by_value(&JsValue::from_str("1"), &options), JsValue::from_str("string one"));
    assert_eq!(
        label_by_value(&JsValue::from(2), &options),
        JsValue::from_str("no matching value")
    );
}

// ============================================================================
// Browser clipboard
// ============================================================================

#[wasm_bindgen_test]
async fn test_navigator_clipboard_writes_text() {
    let stub = recording_clipboard();
    stub_clipboard(&stub);

    let result = NavigatorClipboard.write_text("hello").await;
    restore_clipboard();

    assert_eq!(result, Ok(()));
    assert_eq!(recorded(&stub, "texts"), vec!["hello"]);
}

#[wasm_bindgen_test]
async fn test_navigator_clipboard_missing() {
    stub_clipboard(&JsValue::UNDEFINED);

    let result = NavigatorClipboard.write_text("hello").await;
    restore_clipboard();

    assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
}

#[wasm_bindgen_test]
async fn test_missing_clipboard_reports_copy_failed() {
    stub_clipboard(&JsValue::UNDEFINED);
    let notifier = Rc::new(RecordingNotifier::default());
    let handler = CopyHandler::new(
        WebDocument::from_window().unwrap(),
        NavigatorClipboard,
        notifier.clone(),
    );

    let outcome = handler.handle_click(&CopySpec::literal("x")).await;
    restore_clipboard();

    assert!(matches!(
        outcome,
        Err(CopyError::ClipboardWriteFailed(ClipboardError::Unavailable(_)))
    ));
    assert_eq!(*notifier.errors.borrow(), vec!["copy failed"]);
    assert!(notifier.successes.borrow().is_empty());
}

#[wasm_bindgen_test]
async fn test_rejected_write_reports_copy_failed() {
    stub_clipboard(&js_object(
        "return { writeText: () => Promise.reject(new Error('denied')) };",
    ));
    let notifier = Rc::new(RecordingNotifier::default());
    let handler = CopyHandler::new(
        WebDocument::from_window().unwrap(),
        NavigatorClipboard,
        notifier.clone(),
    );

    let outcome = handler.handle_click(&CopySpec::literal("x")).await;
    restore_clipboard();

    assert_eq!(
        outcome,
        Err(CopyError::ClipboardWriteFailed(ClipboardError::Rejected("denied".into())))
    );
    assert_eq!(*notifier.errors.borrow(), vec!["copy failed"]);
}

// ============================================================================
// Application bootstrap
// ============================================================================

#[wasm_bindgen_test]
fn test_application_defaults() {
    let app = Application::new(JsValue::UNDEFINED, None).unwrap();
    let config = app.config().unwrap();

    let mount = Reflect::get(&config, &"mountSelector".into()).unwrap();
    assert_eq!(mount.as_string().as_deref(), Some("#app"));
    let ui = Reflect::get(&config, &"ui".into()).unwrap();
    assert_eq!(Reflect::get(&ui, &"zIndex".into()).unwrap().as_f64(), Some(3000.0));
    assert_eq!(app.binding_count(), 0);
}

#[wasm_bindgen_test]
fn test_application_rejects_bad_config() {
    let err = app_error(Application::new(JSON::parse(r#"{"ui":{"size":"huge"}}"#).unwrap(), None));
    assert!(err.contains("Invalid UI size"), "{}", err);

    let err = app_error(Application::new(JSON::parse(r#"{"logLevel":"loud"}"#).unwrap(), None));
    assert!(err.contains("Invalid log level"), "{}", err);

    let err = app_error(Application::new(JSON::parse(r#"{"ui":{"zIndex":"high"}}"#).unwrap(), None));
    assert!(err.contains("Invalid application config"), "{}", err);
}

#[wasm_bindgen_test]
fn test_mount_without_root_fails() {
    let mut app =
        Application::new(JSON::parse(r##"{"mountSelector":"#no-such-root"}"##).unwrap(), None).unwrap();
    assert!(app.mount().is_err());
    assert_eq!(app.binding_count(), 0);
}

#[wasm_bindgen_test]
async fn test_mount_binds_declared_elements_once() {
    let container = fixture(
        r#"<div id="app">
             <button id="mn-a" data-copy="from mount">a</button>
             <button id="mn-b" data-copy-value="b">b</button>
           </div>"#,
    );
    let stub = recording_clipboard();
    stub_clipboard(&stub);
    let service = message_service();
    let mut app = Application::new(JsValue::UNDEFINED, Some(service.clone().into())).unwrap();

    assert_eq!(app.mount().unwrap(), 2);
    // Re-mounting replaces the listeners instead of stacking them
    assert_eq!(app.mount().unwrap(), 2);
    assert_eq!(app.binding_count(), 2);

    by_id("mn-a").click();
    settle().await;
    restore_clipboard();

    assert_eq!(recorded(&stub, "texts"), vec!["from mount"]);
    assert_eq!(recorded(&service, "successes"), vec!["copy succeeded"]);

    app.unmount();
    assert_eq!(app.binding_count(), 0);
    container.remove();
}

#[wasm_bindgen_test]
async fn test_bind_copy_uses_message_service() {
    let container = fixture(r#"<button id="bc-btn">copy</button>"#);
    let stub = recording_clipboard();
    stub_clipboard(&stub);
    let service = message_service();
    let app = Application::new(JsValue::UNDEFINED, Some(service.clone().into())).unwrap();

    let loud = app.bind_copy(&by_id("bc-btn"), JsValue::from_str("loud")).unwrap();
    by_id("bc-btn").click();
    settle().await;
    drop(loud);

    let _quiet = app
        .bind_copy(&by_id("bc-btn"), JSON::parse(r#"{"value":"quiet","message":false}"#).unwrap())
        .unwrap();
    by_id("bc-btn").click();
    settle().await;
    restore_clipboard();

    assert_eq!(recorded(&stub, "texts"), vec!["loud", "quiet"]);
    assert_eq!(recorded(&service, "successes"), vec!["copy succeeded"]);
    assert!(recorded(&service, "errors").is_empty());

    container.remove();
}

#[wasm_bindgen_test]
async fn test_copy_promise_resolves_and_rejects() {
    let stub = recording_clipboard();
    stub_clipboard(&stub);
    let service = message_service();
    let app = Application::new(JsValue::UNDEFINED, Some(service.clone().into())).unwrap();

    let copied = JsFuture::from(app.copy(JsValue::from_str("hello"))).await;
    let rejected = JsFuture::from(app.copy(JsValue::from_str(""))).await;
    restore_clipboard();

    assert_eq!(copied.unwrap().as_string().as_deref(), Some("hello"));
    assert_eq!(rejected.unwrap_err().as_string().as_deref(), Some("Nothing to copy"));
    assert_eq!(recorded(&service, "errors"), vec!["nothing to copy"]);
}

#[wasm_bindgen_test]
async fn test_copy_without_message_service_falls_back_to_console() {
    let app = Application::new(JsValue::UNDEFINED, None).unwrap();
    let rejected = JsFuture::from(app.copy(JSON::parse(r##"["#a"]"##).unwrap())).await;
    assert_eq!(rejected.unwrap_err().as_string().as_deref(), Some("Nothing to copy"));
}
