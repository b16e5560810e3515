//! Models module for the toolbox
//!
//! Data types shared by the copy directive and the application shell.

pub mod config;
pub mod copy_spec;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError, CopyMessages, UiOptions};
pub use copy_spec::CopySpec;
