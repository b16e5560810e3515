//! Click handler for the copy directive
//!
//! Each click runs `Resolving -> Copying -> Succeeded | Failed` from scratch;
//! nothing is carried over between clicks, so a failed attempt never leaves
//! the element in a broken state.

use super::{ClipboardSink, CopyError, CopyOutcome, ElementLookup, Notifier};
use crate::models::{CopyMessages, CopySpec};

/// Resolves, copies and notifies for one bound element (or many)
pub struct CopyHandler<L, C, N> {
    lookup: L,
    clipboard: C,
    notifier: N,
    messages: CopyMessages,
}

impl<L, C, N> CopyHandler<L, C, N>
where
    L: ElementLookup,
    C: ClipboardSink,
    N: Notifier,
{
    pub fn new(lookup: L, clipboard: C, notifier: N) -> Self {
        Self {
            lookup,
            clipboard,
            notifier,
            messages: CopyMessages::default(),
        }
    }

    pub fn with_messages(mut self, messages: CopyMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &CopyMessages {
        &self.messages
    }

    /// Work out the text a click on an element bound to `spec` would copy.
    ///
    /// Selector specs hit the page every time this is called.
    pub fn resolve(&self, spec: &CopySpec) -> Result<String, CopyError> {
        let text = match spec {
            CopySpec::Literal(text) => text.clone(),
            CopySpec::BySelector { selector, .. } => self
                .lookup
                .query(selector)
                .ok_or_else(|| CopyError::TargetNotFound {
                    selector: selector.clone(),
                })?
                .into_text(),
            CopySpec::ByValue { value, .. } => value.clone(),
            CopySpec::Unrecognized => String::new(),
        };

        if text.is_empty() {
            return Err(CopyError::NothingToCopy);
        }
        Ok(text)
    }

    /// Run one click: resolve, write, then tell the user how it went.
    ///
    /// Failures are reported through the notifier and returned for
    /// diagnostics; they are never raised past this call.
    pub async fn handle_click(&self, spec: &CopySpec) -> CopyOutcome {
        let outcome = self.copy(spec).await;

        match &outcome {
            Ok(text) => {
                log::debug!("copied {} chars to clipboard", text.chars().count());
                if !spec.suppresses_message() {
                    self.notifier.success(&self.messages.success);
                }
            }
            Err(err) => {
                if let CopyError::ClipboardWriteFailed(cause) = err {
                    log::error!("copy failed: {}", cause);
                } else {
                    log::warn!("copy aborted: {}", err);
                }
                self.notifier.error(self.error_message(err));
            }
        }

        outcome
    }

    async fn copy(&self, spec: &CopySpec) -> CopyOutcome {
        let text = self.resolve(spec)?;
        self.clipboard.write_text(&text).await?;
        Ok(text)
    }

    fn error_message(&self, err: &CopyError) -> &str {
        match err {
            CopyError::TargetNotFound { .. } => &self.messages.target_not_found,
            CopyError::NothingToCopy => &self.messages.nothing_to_copy,
            CopyError::ClipboardWriteFailed(_) => &self.messages.failure,
        }
    }
}
