//! Attaching the copy handler to page elements
//!
//! A [`CopyBinding`] owns the click listener. Dropping it (or calling
//! `unbind`) removes the listener again, so the element stops copying.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, EventTarget};

use crate::copy::{ClipboardSink, CopyHandler, ElementLookup, Notifier};
use crate::models::copy_spec::DECLARED_COPY_SELECTOR;
use crate::models::CopySpec;

const CLICK: &str = "click";

/// Live click listener for one element
#[wasm_bindgen]
pub struct CopyBinding {
    target: EventTarget,
    listener: Option<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl CopyBinding {
    /// Remove the click listener; later clicks do nothing
    pub fn unbind(&mut self) {
        if let Some(listener) = self.listener.take() {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(CLICK, listener.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove copy listener: {:?}", err);
            }
        }
    }

    #[wasm_bindgen(getter, js_name = isBound)]
    pub fn is_bound(&self) -> bool {
        self.listener.is_some()
    }
}

impl Drop for CopyBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}

/// Register a click listener on `target` that runs `handler` with `spec`.
///
/// The spec is not checked here; a bad spec only shows up as an error
/// notification when the element is clicked. Each click spawns its own
/// task, so rapid clicks queue independent attempts.
pub fn attach_copy<L, C, N>(
    target: &EventTarget,
    spec: CopySpec,
    handler: Rc<CopyHandler<L, C, N>>,
) -> Result<CopyBinding, JsValue>
where
    L: ElementLookup + 'static,
    C: ClipboardSink + 'static,
    N: Notifier + 'static,
{
    let spec = Rc::new(spec);
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let handler = Rc::clone(&handler);
        let spec = Rc::clone(&spec);
        spawn_local(async move {
            // Outcome already reported to the user by the handler
            let _ = handler.handle_click(&spec).await;
        });
    });

    target.add_event_listener_with_callback(CLICK, listener.as_ref().unchecked_ref())?;

    Ok(CopyBinding {
        target: target.clone(),
        listener: Some(listener),
    })
}

/// Copy spec declared through `data-copy*` attributes on `element`
pub fn declared_spec(element: &Element) -> CopySpec {
    CopySpec::from_attributes(|name| element.get_attribute(name))
}

/// Bind every element under `root` that declares a copy spec.
pub fn attach_declared<L, C, N>(
    root: &Element,
    handler: &Rc<CopyHandler<L, C, N>>,
) -> Result<Vec<CopyBinding>, JsValue>
where
    L: ElementLookup + 'static,
    C: ClipboardSink + 'static,
    N: Notifier + 'static,
{
    let nodes = root.query_selector_all(DECLARED_COPY_SELECTOR)?;
    let mut bindings = Vec::with_capacity(nodes.length() as usize);

    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let spec = declared_spec(&element);
        bindings.push(attach_copy(&element, spec, Rc::clone(handler))?);
    }

    Ok(bindings)
}
