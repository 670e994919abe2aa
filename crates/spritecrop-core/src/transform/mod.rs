//! Image transforms: alpha auto-crop and nearest-neighbor resize.
//!
//! Both transforms are pure functions over one image. They borrow the input
//! and return a freshly allocated buffer, except for the auto-crop
//! pass-through on fully transparent images, which hands back the input.
//!
//! # Coordinate System
//!
//! - Crop bounds are integer pixel coordinates from [`crate::region`]
//! - Resize targets are absolute pixel dimensions
//! - Origin is top-left corner

mod crop;
mod resize;
mod types;

pub use crop::{auto_crop, crop_to_bounds};
pub use resize::{resize_nearest, resize_to_preset};
pub use types::{CropOptions, ResizePreset, TransformError};
