//! Utility modules for the toolbox
//!
//! Small pure helpers shared by the views.

pub mod kv;

// Re-export commonly used items
pub use kv::*;
