//! WebAssembly bindings for the stratum pool utilities.
//!
//! This crate exposes to JavaScript:
//! - Byte packing, hashing and varint/script encoders
//! - Compact bits and truncated difficulty targets
//! - The Koto block subsidy schedule

use wasm_bindgen::prelude::*;

pub mod codec;
pub mod consensus;

pub use consensus::KotoConsensus;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Log to the host console.
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
