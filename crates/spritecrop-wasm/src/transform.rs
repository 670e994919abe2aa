//! WASM bindings for image transformation operations.
//!
//! This module provides JavaScript bindings for auto-crop and resize,
//! called once per image by the batch export loop.

use crate::report::{to_js_error, transform_error};
use crate::types::JsPixelBuffer;
use spritecrop_core::transform::{
    auto_crop as core_auto_crop, resize_nearest as core_resize, resize_to_preset as core_preset,
    CropOptions, ResizePreset,
};
use wasm_bindgen::prelude::*;

/// Crop transparent margins from an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `offset` - Quantization grid in pixels; 0 crops tightly, otherwise the
///   output is padded up to a multiple of `offset` with the content centered
///
/// # Returns
///
/// New `JsPixelBuffer` with the cropped content. A fully transparent image
/// comes back unchanged.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const cropped = auto_crop(image, 16);
/// ctx.putImageData(new ImageData(new Uint8ClampedArray(cropped.pixels()), cropped.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn auto_crop(image: &JsPixelBuffer, offset: u32) -> Result<JsPixelBuffer, JsValue> {
    crop_with(image, &CropOptions::new(offset))
}

/// Crop transparent margins using an options object (`{ offset?: number }`).
///
/// Lets the UI pass its persisted crop settings straight through.
#[wasm_bindgen]
pub fn crop_with_options(
    image: &JsPixelBuffer,
    options: JsValue,
) -> Result<JsPixelBuffer, JsValue> {
    let options: CropOptions = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
    crop_with(image, &options)
}

fn crop_with(image: &JsPixelBuffer, options: &CropOptions) -> Result<JsPixelBuffer, JsValue> {
    core_auto_crop(image.buffer(), options)
        .map(|cropped| JsPixelBuffer::from_buffer(cropped.into_owned()))
        .map_err(transform_error)
}

/// Resize an image to exact dimensions with nearest-neighbor sampling.
///
/// # Errors
///
/// Throws if `width` or `height` is zero, or if the image is empty.
#[wasm_bindgen]
pub fn resize_nearest(
    image: &JsPixelBuffer,
    width: u32,
    height: u32,
) -> Result<JsPixelBuffer, JsValue> {
    core_resize(image.buffer(), width, height)
        .map(JsPixelBuffer::from_buffer)
        .map_err(transform_error)
}

/// Resize an image to a preset size.
///
/// `preset` is an object such as `{ kind: "small" }` or
/// `{ kind: "custom", width: 300, height: 200 }`.
#[wasm_bindgen]
pub fn resize_to_preset(
    image: &JsPixelBuffer,
    preset: JsValue,
) -> Result<JsPixelBuffer, JsValue> {
    let preset: ResizePreset = serde_wasm_bindgen::from_value(preset).map_err(to_js_error)?;
    core_preset(image.buffer(), &preset)
        .map(JsPixelBuffer::from_buffer)
        .map_err(transform_error)
}

/// Labels for the fixed resize presets, smallest first.
#[wasm_bindgen]
pub fn resize_preset_labels() -> Vec<String> {
    ResizePreset::FIXED.iter().map(ResizePreset::label).collect()
}
