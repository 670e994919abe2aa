//! Spritecrop WASM - WebAssembly bindings for Spritecrop
//!
//! This crate provides WASM bindings to expose the spritecrop-core transforms
//! to the browser front end, which handles file loading, batching and
//! archive export.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible pixel buffer wrapper
//! - `region` - Seed and bounding box detection (for crop previews)
//! - `transform` - Auto-crop and nearest-neighbor resize
//! - `report` - Error conversion and console reporting of internal faults
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsPixelBuffer, auto_crop } from '@spritecrop/wasm';
//!
//! await init();
//!
//! const data = ctx.getImageData(0, 0, canvas.width, canvas.height);
//! const image = new JsPixelBuffer(data.width, data.height, new Uint8Array(data.data.buffer));
//! const cropped = auto_crop(image, 16);
//! console.log(`Cropped to ${cropped.width}x${cropped.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod region;
mod report;
mod transform;
mod types;

// Re-export public types
pub use region::{bounding_box, find_seed};
pub use transform::{
    auto_crop, crop_with_options, resize_nearest, resize_preset_labels, resize_to_preset,
};
pub use types::JsPixelBuffer;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
