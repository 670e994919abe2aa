//! Bounding box of the opaque region connected to a seed pixel.
//!
//! The fill walks 8-connected neighbors that have non-zero alpha, starting
//! from the seed, and reduces every visited pixel into a min/max box.
//!
//! Only the component that contains the seed is measured. If an image has
//! several disjoint opaque blobs, the box covers the blob holding the seed
//! (usually the raster-order-first opaque pixel) and ignores the others.
//! It is *not* the bounding box of all opaque pixels.

use std::collections::VecDeque;

use super::{BoundingBox, Coordinate, RegionError};
use crate::buffer::PixelBuffer;

/// Neighbor offsets as (row, col): 4 cardinal then 4 diagonal.
const NEIGHBORS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (-1, -1),
];

/// Compute the bounding box of the opaque component containing `seed`.
///
/// # Returns
///
/// - `Ok(Some(bbox))` with inclusive bounds of the component
/// - `Ok(None)` if `seed` is out of bounds or transparent
///
/// # Errors
///
/// Returns `RegionError::AlgorithmOverrun` if the traversal dequeues more
/// than `width * height` pixels. That cannot happen while each pixel is
/// visited at most once; it signals a broken traversal and the caller
/// should drop this image only.
pub fn connected_bounds(
    buffer: &PixelBuffer,
    seed: Coordinate,
) -> Result<Option<BoundingBox>, RegionError> {
    connected_bounds_with_limit(buffer, seed, buffer.pixel_count())
}

/// Flood fill with an explicit dequeue limit.
pub(crate) fn connected_bounds_with_limit(
    buffer: &PixelBuffer,
    seed: Coordinate,
    limit: usize,
) -> Result<Option<BoundingBox>, RegionError> {
    let (width, height) = (buffer.width(), buffer.height());
    if seed.row >= height || seed.col >= width || buffer.alpha_at(seed.row, seed.col) == 0 {
        return Ok(None);
    }

    let index = |c: Coordinate| c.row as usize * width as usize + c.col as usize;

    let mut visited = vec![false; buffer.pixel_count()];
    let mut queue = VecDeque::new();
    visited[index(seed)] = true;
    queue.push_back(seed);

    let mut bbox = BoundingBox::at(seed);
    let mut dequeued = 0usize;

    while let Some(current) = queue.pop_front() {
        dequeued += 1;
        if dequeued > limit {
            return Err(RegionError::AlgorithmOverrun {
                visited: dequeued,
                limit,
            });
        }

        bbox.extend(current);

        for (dr, dc) in NEIGHBORS {
            let (Some(row), Some(col)) = (
                current.row.checked_add_signed(dr),
                current.col.checked_add_signed(dc),
            ) else {
                continue;
            };
            if row >= height || col >= width {
                continue;
            }

            let next = Coordinate::new(row, col);
            let i = index(next);
            if !visited[i] && buffer.alpha_at(row, col) != 0 {
                visited[i] = true;
                queue.push_back(next);
            }
        }
    }

    Ok(Some(bbox))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::find_seed;

    fn with_opaque(
        width: u32,
        height: u32,
        pixels: impl IntoIterator<Item = (u32, u32)>,
    ) -> PixelBuffer {
        let mut data = vec![0u8; (width * height * 4) as usize];
        for (row, col) in pixels {
            let i = ((row * width + col) * 4) as usize;
            data[i..i + 4].copy_from_slice(&[200, 100, 50, 255]);
        }
        PixelBuffer::new(width, height, data).unwrap()
    }

    fn square(top: u32, left: u32, size: u32) -> impl Iterator<Item = (u32, u32)> {
        (top..top + size).flat_map(move |r| (left..left + size).map(move |c| (r, c)))
    }

    #[test]
    fn test_single_pixel() {
        let buf = with_opaque(10, 10, [(5, 5)]);
        let seed = find_seed(&buf).unwrap();
        assert_eq!(seed, Coordinate::new(5, 5));

        let bbox = connected_bounds(&buf, seed).unwrap().unwrap();
        assert_eq!(bbox.min_col, 5);
        assert_eq!(bbox.max_col, 5);
        assert_eq!(bbox.min_row, 5);
        assert_eq!(bbox.max_row, 5);
    }

    #[test]
    fn test_solid_rectangle() {
        let pixels = (2..6).flat_map(|r| (3..9).map(move |c| (r, c)));
        let buf = with_opaque(12, 10, pixels);

        let bbox = connected_bounds(&buf, Coordinate::new(2, 3)).unwrap().unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_col: 3,
                min_row: 2,
                max_col: 8,
                max_row: 5
            }
        );
    }

    #[test]
    fn test_multi_blob_only_first_component() {
        let buf = with_opaque(20, 20, square(1, 1, 3).chain(square(15, 15, 3)));
        let seed = find_seed(&buf).unwrap();
        assert_eq!(seed, Coordinate::new(1, 1));

        let bbox = connected_bounds(&buf, seed).unwrap().unwrap();
        // The second square at (15, 15) is a separate component and stays out
        assert_eq!(
            bbox,
            BoundingBox {
                min_col: 1,
                min_row: 1,
                max_col: 3,
                max_row: 3
            }
        );
    }

    #[test]
    fn test_seed_in_second_blob() {
        let buf = with_opaque(20, 20, square(1, 1, 3).chain(square(15, 15, 3)));
        let bbox = connected_bounds(&buf, Coordinate::new(16, 16)).unwrap().unwrap();
        assert_eq!(bbox.min_col, 15);
        assert_eq!(bbox.max_row, 17);
    }

    #[test]
    fn test_diagonal_connectivity() {
        // Staircase touching only at corners
        let buf = with_opaque(6, 6, [(0, 0), (1, 1), (2, 2), (3, 3)]);
        let bbox = connected_bounds(&buf, Coordinate::new(0, 0)).unwrap().unwrap();
        assert_eq!(bbox.max_col, 3);
        assert_eq!(bbox.max_row, 3);
    }

    #[test]
    fn test_anti_diagonal_connectivity() {
        // Seed is the top-right end; the fill must walk down-left
        let buf = with_opaque(5, 5, [(0, 4), (1, 3), (2, 2), (3, 1)]);
        let bbox = connected_bounds(&buf, Coordinate::new(0, 4)).unwrap().unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_col: 1,
                min_row: 0,
                max_col: 4,
                max_row: 3
            }
        );
    }

    #[test]
    fn test_gap_of_one_pixel_separates() {
        let buf = with_opaque(7, 1, [(0, 0), (0, 1), (0, 3), (0, 4)]);
        let bbox = connected_bounds(&buf, Coordinate::new(0, 0)).unwrap().unwrap();
        assert_eq!(bbox.max_col, 1);
    }

    #[test]
    fn test_ring_reaches_around_hole() {
        // Hollow 5x5 square: the interior is transparent
        let ring = square(0, 0, 5).filter(|&(r, c)| r == 0 || r == 4 || c == 0 || c == 4);
        let buf = with_opaque(5, 5, ring);
        let bbox = connected_bounds(&buf, Coordinate::new(0, 0)).unwrap().unwrap();
        assert_eq!(bbox.max_col, 4);
        assert_eq!(bbox.max_row, 4);
    }

    #[test]
    fn test_transparent_seed_returns_none() {
        let buf = with_opaque(4, 4, [(0, 0)]);
        assert_eq!(connected_bounds(&buf, Coordinate::new(2, 2)).unwrap(), None);
    }

    #[test]
    fn test_out_of_bounds_seed_returns_none() {
        let buf = with_opaque(4, 4, [(0, 0)]);
        assert_eq!(connected_bounds(&buf, Coordinate::new(4, 0)).unwrap(), None);
        assert_eq!(connected_bounds(&buf, Coordinate::new(0, 9)).unwrap(), None);
    }

    #[test]
    fn test_fully_opaque_buffer_covers_everything() {
        let buf = with_opaque(9, 7, square(0, 0, 9).filter(|&(r, _)| r < 7));
        let bbox = connected_bounds(&buf, Coordinate::new(0, 0)).unwrap().unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_col: 0,
                min_row: 0,
                max_col: 8,
                max_row: 6
            }
        );
    }

    #[test]
    fn test_overrun_is_reported() {
        let buf = with_opaque(3, 3, square(0, 0, 3));
        let err = connected_bounds_with_limit(&buf, Coordinate::new(0, 0), 4).unwrap_err();
        assert_eq!(
            err,
            RegionError::AlgorithmOverrun {
                visited: 5,
                limit: 4
            }
        );
    }

    #[test]
    fn test_limit_equal_to_component_size_is_enough() {
        let buf = with_opaque(3, 3, square(0, 0, 3));
        let bbox = connected_bounds_with_limit(&buf, Coordinate::new(0, 0), 9).unwrap();
        assert!(bbox.is_some());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
