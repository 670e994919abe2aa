//! Auto-crop to the visible content of an image.
//!
//! The crop window comes from [`crate::region`]: the opaque component that
//! holds the first visible pixel. The window is `max - min` pixels on each
//! axis, starting at the min corner.
//!
//! # Quantization
//!
//! With a non-zero `offset`, each output dimension is rounded up to the next
//! multiple of `offset`. The copied content is centered in the padded
//! canvas and the padding stays fully transparent:
//!
//! ```text
//! padded = ceil(raw / offset) * offset
//! origin = floor((padded - raw) / 2)
//! ```

use std::borrow::Cow;

use super::types::zeroed_pixels;
use super::{CropOptions, TransformError};
use crate::buffer::{PixelBuffer, CHANNELS};
use crate::region::{self, BoundingBox};

/// Crop an image to its visible content.
///
/// Runs seed detection and the flood fill, then [`crop_to_bounds`].
///
/// # Returns
///
/// - `Cow::Borrowed(buffer)` if the image is fully transparent
/// - `Cow::Owned` with the cropped (and optionally padded) image otherwise
///
/// # Errors
///
/// Returns `TransformError::Region` if the flood fill hits an internal fault.
pub fn auto_crop<'a>(
    buffer: &'a PixelBuffer,
    options: &CropOptions,
) -> Result<Cow<'a, PixelBuffer>, TransformError> {
    let bounds = region::locate_content(buffer)?;
    crop_to_bounds(buffer, bounds, options.offset)
}

/// Crop an image to a bounding box, quantizing the output size to `offset`.
///
/// # Arguments
///
/// * `buffer` - Source image
/// * `bounds` - Crop region, or `None` to pass the image through untouched
/// * `offset` - Quantization grid in pixels (0 = no padding)
///
/// # Errors
///
/// - `TransformError::BoundsOutOfRange` if the copy window leaves the image
/// - `TransformError::OutputTooLarge` if the padded size overflows `u32` or
///   its pixel storage cannot be allocated
pub fn crop_to_bounds(
    buffer: &PixelBuffer,
    bounds: Option<BoundingBox>,
    offset: u32,
) -> Result<Cow<'_, PixelBuffer>, TransformError> {
    let Some(bbox) = bounds else {
        return Ok(Cow::Borrowed(buffer));
    };

    if bbox.min_col > bbox.max_col
        || bbox.min_row > bbox.max_row
        || bbox.max_col > buffer.width()
        || bbox.max_row > buffer.height()
    {
        return Err(TransformError::BoundsOutOfRange {
            bounds: bbox,
            width: buffer.width(),
            height: buffer.height(),
        });
    }

    let raw_w = bbox.raw_width();
    let raw_h = bbox.raw_height();
    let (out_w, out_h) = padded_size(raw_w, raw_h, offset)?;
    let draw_x = (out_w - raw_w) / 2;
    let draw_y = (out_h - raw_h) / 2;

    let mut output = zeroed_pixels(out_w, out_h)?;
    let row_bytes = raw_w as usize * CHANNELS;

    // Copy row slices; the padding is already transparent
    for y in 0..raw_h {
        let src_start = buffer.offset(bbox.min_row + y, bbox.min_col);
        let dst_start = ((draw_y + y) as usize * out_w as usize + draw_x as usize) * CHANNELS;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&buffer.data()[src_start..src_start + row_bytes]);
    }

    Ok(Cow::Owned(PixelBuffer::from_parts(out_w, out_h, output)))
}

/// Round `raw` up to a multiple of `offset` (identity when `offset == 0`).
fn quantize(raw: u32, offset: u32) -> u64 {
    if offset == 0 {
        return raw.into();
    }
    u64::from(raw.div_ceil(offset)) * u64::from(offset)
}

/// Quantized output size, rejected when either side leaves `u32`.
fn padded_size(raw_w: u32, raw_h: u32, offset: u32) -> Result<(u32, u32), TransformError> {
    let (width, height) = (quantize(raw_w, offset), quantize(raw_h, offset));
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(TransformError::OutputTooLarge { width, height }),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
