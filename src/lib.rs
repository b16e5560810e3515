//! Developer Toolbox WASM Module
//!
//! Front-end core of the toolbox single-page application: the copy-to-clipboard
//! directive, the route table, configuration and small lookup helpers.

pub mod api;
pub mod copy;
pub mod models;
pub mod router;
pub mod utils;
pub mod web;

// Re-export commonly used types
pub use api::Application;
pub use copy::{CopyError, CopyHandler, CopyOutcome};
pub use models::{AppConfig, CopyMessages, CopySpec};
pub use router::{RouteTable, APP_ROUTES};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Toolbox WASM module initialized");
}
