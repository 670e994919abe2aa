//! Spritecrop Core - Alpha-aware image transforms
//!
//! This crate provides the pixel-level algorithms behind Spritecrop's batch
//! tools: trimming transparent margins from RGBA images and resizing them
//! with nearest-neighbor sampling.
//!
//! Decoding, encoding, archiving and progress reporting live in the caller.
//! Every function here works on one decoded [`PixelBuffer`] at a time,
//! holds no state between calls, and is safe to run on independent images
//! in parallel.
//!
//! # Example
//!
//! ```ignore
//! use spritecrop_core::{auto_crop, resize_nearest, CropOptions, PixelBuffer};
//!
//! let image = PixelBuffer::from_dynamic_image(&decoded);
//! let cropped = auto_crop(&image, &CropOptions::new(16))?;
//! let icon = resize_nearest(&cropped, 64, 64)?;
//! ```

pub mod buffer;
pub mod region;
pub mod transform;

pub use buffer::{BufferError, PixelBuffer};
pub use region::{
    connected_bounds, find_seed, locate_content, BoundingBox, Coordinate, RegionError,
};
pub use transform::{
    auto_crop, crop_to_bounds, resize_nearest, resize_to_preset, CropOptions, ResizePreset,
    TransformError,
};
