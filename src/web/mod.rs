//! Browser implementations of the copy handler's page boundaries

pub mod binding;
pub mod clipboard;
pub mod dom;
pub mod notify;

pub use binding::{attach_copy, attach_declared, declared_spec, CopyBinding};
pub use clipboard::NavigatorClipboard;
pub use dom::WebDocument;
pub use notify::{ConsoleNotifier, JsNotifier, MessageService, PageNotifier};

use crate::copy::CopyHandler;

/// Copy handler wired to the real page
pub type WebCopyHandler = CopyHandler<WebDocument, NavigatorClipboard, PageNotifier>;
