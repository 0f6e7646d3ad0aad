//! Box2D Bridge - host-object bridge for a 2D rigid-body engine
//!
//! Architecture:
//! - core/      - configuration and logging setup
//! - engine/    - native rigid-body engine (vectors, shapes, bodies, world)
//! - boundary/  - adapters that marshal engine objects to a scripting host
//! - api/       - wasm-bindgen surface for JavaScript

pub mod api;
pub mod boundary;
pub mod core;
pub mod engine;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the bridge
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("Box2d bridge {} initialized", version()).into());
}

/// Get bridge version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::HostObject;
pub use boundary::{BridgeError, HostAdapter, HostValue, Namespace, PlainObject};
pub use crate::core::config::BridgeConfig;
