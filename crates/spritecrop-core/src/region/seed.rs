//! Raster-order search for the first visible pixel.

use super::Coordinate;
use crate::buffer::{PixelBuffer, CHANNELS};

/// Find the first pixel with non-zero alpha.
///
/// Rows are scanned top to bottom, columns left to right within a row.
/// Returns `None` for a fully transparent (or zero-area) buffer.
pub fn find_seed(buffer: &PixelBuffer) -> Option<Coordinate> {
    let width = buffer.width() as usize;
    if width == 0 {
        return None;
    }

    let index = buffer
        .data()
        .chunks_exact(CHANNELS)
        .position(|px| px[3] != 0)?;

    Some(Coordinate::new((index / width) as u32, (index % width) as u32))
}
