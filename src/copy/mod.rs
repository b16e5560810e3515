//! Copy-to-clipboard interaction
//!
//! The handler resolves a [`CopySpec`](crate::models::CopySpec) into text,
//! writes it to the clipboard and reports the outcome to the user. The page
//! it talks to is reached only through the three traits below, so the same
//! handler runs against the browser (`crate::web`) and against in-memory
//! fakes in tests.

pub mod errors;
pub mod handler;

pub use errors::{ClipboardError, CopyError, CopyOutcome};
pub use handler::CopyHandler;

use std::rc::Rc;

/// Content read from the element a selector resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetContent {
    /// The element exposes an editable value (input, textarea, select)
    Value(String),
    /// Rendered text of any other element
    Text(String),
}

impl TargetContent {
    pub fn into_text(self) -> String {
        match self {
            TargetContent::Value(s) | TargetContent::Text(s) => s,
        }
    }
}

/// Finds the first element matching a selector and reads its content
pub trait ElementLookup {
    fn query(&self, selector: &str) -> Option<TargetContent>;
}

/// Asynchronous system clipboard
#[allow(async_fn_in_trait)]
pub trait ClipboardSink {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Transient user-facing messages
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

// ============================================================================
// Shared-ownership forwarding impls
// ============================================================================

impl<T: ElementLookup + ?Sized> ElementLookup for Rc<T> {
    fn query(&self, selector: &str) -> Option<TargetContent> {
        (**self).query(selector)
    }
}

impl<T: ClipboardSink> ClipboardSink for Rc<T> {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_text(text).await
    }
}

impl<T: Notifier + ?Sized> Notifier for Rc<T> {
    fn success(&self, message: &str) {
        (**self).success(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
