//! WASM bindings for opaque region detection.
//!
//! Exposed mostly for previews: the crop UI draws the detected box over
//! the thumbnail before the user commits to a batch.

use crate::report::{to_js_error, transform_error};
use crate::types::JsPixelBuffer;
use spritecrop_core::region;
use wasm_bindgen::prelude::*;

/// Find the first non-transparent pixel in raster order.
///
/// # Returns
///
/// `[row, col]` as a `Uint32Array`, or `undefined` if the image is fully
/// transparent.
#[wasm_bindgen]
pub fn find_seed(image: &JsPixelBuffer) -> Option<Vec<u32>> {
    region::find_seed(image.buffer()).map(|seed| vec![seed.row, seed.col])
}

/// Compute the bounding box of the visible content.
///
/// Only the region connected to the first visible pixel is measured; other
/// separate shapes in the image are ignored.
///
/// # Returns
///
/// `{ min_col, min_row, max_col, max_row }` (inclusive), or `undefined` if
/// the image is fully transparent.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const box = bounding_box(image);
/// if (box) {
///   ctx.strokeRect(box.min_col, box.min_row, box.max_col - box.min_col, box.max_row - box.min_row);
/// }
/// ```
#[wasm_bindgen]
pub fn bounding_box(image: &JsPixelBuffer) -> Result<JsValue, JsValue> {
    let bbox = region::locate_content(image.buffer()).map_err(|e| transform_error(e.into()))?;
    serde_wasm_bindgen::to_value(&bbox).map_err(to_js_error)
}
