//! Toolbox WASM API
//!
//! The JavaScript-facing surface of the module.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging, serde conversion and error handling
//! - `app`: `Application` bootstrap (config, mount, copy directive, routing)
//! - `lookup`: `labelByValue`

pub mod helpers;
pub mod app;
pub mod lookup;

pub use app::{spec_from_js, Application};
pub use lookup::label_by_value;
