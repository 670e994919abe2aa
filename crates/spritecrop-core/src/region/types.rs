//! Core types for opaque region detection.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Error types for region detection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    /// The flood fill dequeued more pixels than the buffer holds.
    ///
    /// Every pixel is visited at most once, so this is an internal fault.
    /// Callers should abort the current image and carry on with the rest.
    #[error("Flood fill overrun: visited {visited} pixels, limit is {limit}")]
    AlgorithmOverrun { visited: usize, limit: usize },
}

/// A pixel position, row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: u32,
    pub col: u32,
}

impl Coordinate {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Inclusive pixel bounds of a region.
///
/// The crop size derived from a box is the *difference* of its bounds
/// (`max - min`), not `max - min + 1`. A single-pixel region therefore has a
/// raw size of 0x0, and the max row and column fall outside the copy window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_col: u32,
    pub min_row: u32,
    pub max_col: u32,
    pub max_row: u32,
}

impl BoundingBox {
    /// Box around a single pixel.
    pub fn at(seed: Coordinate) -> Self {
        Self {
            min_col: seed.col,
            min_row: seed.row,
            max_col: seed.col,
            max_row: seed.row,
        }
    }

    /// Box whose copy window is the whole buffer.
    ///
    /// The max bounds sit one past the last pixel, so cropping with this box
    /// at offset 0 reproduces the buffer exactly.
    pub fn covering(buffer: &PixelBuffer) -> Self {
        Self {
            min_col: 0,
            min_row: 0,
            max_col: buffer.width(),
            max_row: buffer.height(),
        }
    }

    /// Grow the box to include `coord`.
    #[inline]
    pub fn extend(&mut self, coord: Coordinate) {
        self.min_col = self.min_col.min(coord.col);
        self.max_col = self.max_col.max(coord.col);
        self.min_row = self.min_row.min(coord.row);
        self.max_row = self.max_row.max(coord.row);
    }

    /// Columns in the crop window (`max_col - min_col`).
    pub fn raw_width(&self) -> u32 {
        self.max_col.saturating_sub(self.min_col)
    }

    /// Rows in the crop window (`max_row - min_row`).
    pub fn raw_height(&self) -> u32 {
        self.max_row.saturating_sub(self.min_row)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        (self.min_col..=self.max_col).contains(&coord.col)
            && (self.min_row..=self.max_row).contains(&coord.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_grows_both_axes() {
        let mut bbox = BoundingBox::at(Coordinate::new(5, 5));
        bbox.extend(Coordinate::new(2, 8));
        bbox.extend(Coordinate::new(7, 1));

        assert_eq!(
            bbox,
            BoundingBox {
                min_col: 1,
                min_row: 2,
                max_col: 8,
                max_row: 7
            }
        );
    }

    #[test]
    fn test_raw_size_is_difference_of_bounds() {
        let single = BoundingBox::at(Coordinate::new(3, 4));
        assert_eq!(single.raw_width(), 0);
        assert_eq!(single.raw_height(), 0);

        let bbox = BoundingBox {
            min_col: 2,
            min_row: 1,
            max_col: 9,
            max_row: 4,
        };
        assert_eq!(bbox.raw_width(), 7);
        assert_eq!(bbox.raw_height(), 3);
    }

    #[test]
    fn test_covering_matches_buffer() {
        let buf = PixelBuffer::transparent(6, 4);
        let bbox = BoundingBox::covering(&buf);
        assert_eq!(bbox.raw_width(), 6);
        assert_eq!(bbox.raw_height(), 4);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bbox = BoundingBox {
            min_col: 1,
            min_row: 1,
            max_col: 3,
            max_row: 3,
        };
        assert!(bbox.contains(Coordinate::new(1, 1)));
        assert!(bbox.contains(Coordinate::new(3, 3)));
        assert!(!bbox.contains(Coordinate::new(4, 3)));
        assert!(!bbox.contains(Coordinate::new(0, 2)));
    }

    #[test]
    fn test_bounding_box_serde_field_names() {
        let bbox = BoundingBox {
            min_col: 1,
            min_row: 2,
            max_col: 3,
            max_row: 4,
        };
        let json = serde_json::to_string(&bbox).unwrap();
        assert_eq!(json, r#"{"min_col":1,"min_row":2,"max_col":3,"max_row":4}"#);
    }

    #[test]
    fn test_region_error_display() {
        let err = RegionError::AlgorithmOverrun {
            visited: 101,
            limit: 100,
        };
        assert_eq!(
            err.to_string(),
            "Flood fill overrun: visited 101 pixels, limit is 100"
        );
    }
}
