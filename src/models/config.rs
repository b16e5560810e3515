//! Application configuration
//!
//! Decoded from the plain JavaScript object passed to `new Application(config)`.
//! Every field has a default, so `undefined` or `{}` yield a working setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Component sizes understood by the UI library
pub const UI_SIZES: &[&str] = &["large", "default", "small"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid UI size '{0}' (expected one of: large, default, small)")]
    InvalidSize(String),

    #[error("Mount selector must not be empty")]
    EmptyMountSelector,

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
}

/// Top-level application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Options forwarded to the UI component library
    pub ui: UiOptions,

    /// Notification texts used by the copy directive
    pub messages: CopyMessages,

    /// Selector of the element the application mounts onto
    pub mount_selector: String,

    /// Maximum log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            messages: CopyMessages::default(),
            mount_selector: "#app".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !UI_SIZES.contains(&self.ui.size.as_str()) {
            return Err(ConfigError::InvalidSize(self.ui.size.clone()));
        }
        if self.mount_selector.trim().is_empty() {
            return Err(ConfigError::EmptyMountSelector);
        }
        self.level()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// UI library options (component size and popup stacking base)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UiOptions {
    pub size: String,
    pub z_index: u32,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            size: "default".to_string(),
            z_index: 3000,
        }
    }
}

/// Literal texts shown by the copy directive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CopyMessages {
    pub success: String,
    pub failure: String,
    pub nothing_to_copy: String,
    pub target_not_found: String,
}

impl Default for CopyMessages {
    fn default() -> Self {
        Self {
            success: "copy succeeded".to_string(),
            failure: "copy failed".to_string(),
            nothing_to_copy: "nothing to copy".to_string(),
            target_not_found: "target element not found".to_string(),
        }
    }
}

impl CopyMessages {
    /// Texts for call sites that only ever copy from an input box
    pub fn selector_only() -> Self {
        Self {
            target_not_found: "input box not found".to_string(),
            ..Self::default()
        }
    }
}
