//! Error reporting for the control surface.
//!
//! Failures that the UI swallows (a file that will not decode, a save that
//! cannot encode) still need to be visible. In the browser they go to the
//! console; in native builds and tests they go through `tracing`.

use std::fmt::Display;

use wasm_bindgen::JsValue;

/// Report a recoverable failure without interrupting the caller.
pub(crate) fn report_error(context: &str, err: &dyn Display) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(&format!("{}: {}", context, err)));

    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!(error = %err, "{}", context);
}

/// Convert an error into a JS exception value.
pub(crate) fn to_js(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
