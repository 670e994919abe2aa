//! Opaque region detection.
//!
//! This module locates the visible content of an RGBA buffer:
//! - Finding the first non-transparent pixel in raster order (the seed)
//! - Flood-filling from the seed to get the bounding box of its component
//!
//! # Coordinate System
//!
//! - Coordinates are (row, col) with the origin at the top-left corner
//! - Bounding boxes hold inclusive pixel bounds
//! - Connectivity is 8-way: diagonal neighbors join a region

mod bounds;
mod seed;
mod types;

pub use bounds::connected_bounds;
pub use seed::find_seed;
pub use types::{BoundingBox, Coordinate, RegionError};

/// Locate the seed and measure its component in one step.
///
/// Returns `Ok(None)` when the buffer has no visible pixel.
pub fn locate_content(
    buffer: &crate::PixelBuffer,
) -> Result<Option<BoundingBox>, RegionError> {
    match find_seed(buffer) {
        Some(seed) => connected_bounds(buffer, seed),
        None => Ok(None),
    }
}
