//! Nearest-neighbor resizing.
//!
//! Each destination pixel copies exactly one source pixel, so the output
//! never contains colors absent from the input (no blending, no halo around
//! transparent edges). All functions return a new `PixelBuffer` without
//! modifying the input.

use super::types::zeroed_pixels;
use super::{ResizePreset, TransformError};
use crate::buffer::{PixelBuffer, CHANNELS};

/// Resize an image to exact dimensions with nearest-neighbor sampling.
///
/// Destination pixel `(x, y)` takes source pixel
/// `(floor(x * src_w / target_w), floor(y * src_h / target_h))`.
///
/// # Errors
///
/// - `TransformError::InvalidTargetDimensions` if either target dimension is zero
/// - `TransformError::EmptySource` if the source has no pixels
/// - `TransformError::OutputTooLarge` if the target cannot be allocated
pub fn resize_nearest(
    image: &PixelBuffer,
    target_w: u32,
    target_h: u32,
) -> Result<PixelBuffer, TransformError> {
    if target_w == 0 || target_h == 0 {
        return Err(TransformError::InvalidTargetDimensions {
            width: target_w,
            height: target_h,
        });
    }
    if image.is_empty() {
        return Err(TransformError::EmptySource {
            width: image.width(),
            height: image.height(),
        });
    }

    // Reserve the output first; the column table below is smaller than it
    let mut output = zeroed_pixels(target_w, target_h)?;

    // Column lookup is the same for every row
    let src_cols: Vec<u32> = (0..target_w)
        .map(|x| source_index(x, image.width(), target_w))
        .collect();

    let row_bytes = target_w as usize * CHANNELS;
    for (y, row) in (0..target_h).zip(output.chunks_exact_mut(row_bytes)) {
        let src_y = source_index(y, image.height(), target_h);
        for (dst, &src_x) in row.chunks_exact_mut(CHANNELS).zip(&src_cols) {
            let i = image.offset(src_y, src_x);
            dst.copy_from_slice(&image.data()[i..i + CHANNELS]);
        }
    }

    Ok(PixelBuffer::from_parts(target_w, target_h, output))
}

/// Resize an image to one of the batch presets.
///
/// # Errors
///
/// Same as [`resize_nearest`]; a `Custom` preset with a zero side is rejected.
pub fn resize_to_preset(
    image: &PixelBuffer,
    preset: &ResizePreset,
) -> Result<PixelBuffer, TransformError> {
    let (width, height) = preset.dimensions();
    resize_nearest(image, width, height)
}

/// `floor(dst * src_len / dst_len)` without floating point.
#[inline]
fn source_index(dst: u32, src_len: u32, dst_len: u32) -> u32 {
    (dst as u64 * src_len as u64 / dst_len as u64) as u32
}


// ============================================================================
// Property-Based Tests
// ============================================================================
