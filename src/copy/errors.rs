//! Error types for copy interactions

use thiserror::Error;

/// Why a single copy attempt ended without writing to the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// The selector matched no element
    #[error("No element matches selector '{selector}'")]
    TargetNotFound { selector: String },

    /// The resolved text was empty
    #[error("Nothing to copy")]
    NothingToCopy,

    /// The clipboard refused the write
    #[error("Clipboard write failed: {0}")]
    ClipboardWriteFailed(#[from] ClipboardError),
}

/// Failures reported by a clipboard sink
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard API in this context (no window, insecure origin)
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The write promise was rejected (e.g. permission denied)
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Result of one click: the copied text, or why nothing was copied
pub type CopyOutcome = Result<String, CopyError>;
