//! RasterEdit WASM - WebAssembly control surface for the RasterEdit engine
//!
//! This crate wires rasteredit-core into a browser page: one [`ImageEditor`]
//! per page holds the current image, the filter menu calls its methods, and
//! the page paints `rgba_pixels()` into a canvas after every action.
//!
//! # Module Structure
//!
//! - `editor` - The `ImageEditor` session object
//! - `actions` - Serializable filter actions and the menu description
//! - `report` - Console error reporting
//!
//! # Usage
//!
//! ```typescript
//! import init, { ImageEditor } from '@rasteredit/wasm';
//!
//! await init();
//!
//! const editor = new ImageEditor(undefined);
//! editor.load_sample();
//! editor.apply({ kind: 'invert' });
//! const png = editor.save();
//! ```

use wasm_bindgen::prelude::*;

mod actions;
mod editor;
mod report;

// Re-export public types
pub use actions::{controls, Control, ControlInput, FilterAction};
pub use editor::ImageEditor;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    tracing::debug!("rasteredit-wasm {} loaded", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
