//! WASM bindings for the lesser compiler.
//!
//! Exposes `compile()` to JavaScript via wasm-bindgen.
//! Returns the CSS string or throws on error.

use wasm_bindgen::prelude::*;

/// Compile lesser source to CSS.
///
/// Throws a JS error naming the failure kind if compilation fails.
#[wasm_bindgen]
pub fn compile(source: &str) -> Result<String, JsError> {
    lesser_codegen::compile(source).map_err(|e| JsError::new(&format!("{}: {e}", e.kind())))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
