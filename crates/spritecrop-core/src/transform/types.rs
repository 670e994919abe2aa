//! Options and error types for crop and resize.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::CHANNELS;
use crate::region::{BoundingBox, RegionError};

/// Error types for transform operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// Region detection failed with an internal fault.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// A resize target has a zero dimension.
    #[error("Invalid target dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidTargetDimensions { width: u32, height: u32 },

    /// Resize source has no pixels to sample from.
    #[error("Cannot resize an empty {width}x{height} image")]
    EmptySource { width: u32, height: u32 },

    /// Crop window does not fit inside the source image.
    #[error("Crop bounds {bounds:?} do not fit a {width}x{height} image")]
    BoundsOutOfRange {
        bounds: BoundingBox,
        width: u32,
        height: u32,
    },

    /// Output dimensions cannot be represented or allocated.
    #[error("Output of {width}x{height} pixels is too large")]
    OutputTooLarge { width: u64, height: u64 },
}

/// Zeroed RGBA storage for a `width` x `height` output.
///
/// Returns `OutputTooLarge` instead of panicking or aborting when the byte
/// count overflows `usize` or the allocator refuses it.
pub(crate) fn zeroed_pixels(width: u32, height: u32) -> Result<Vec<u8>, TransformError> {
    let too_large = || TransformError::OutputTooLarge {
        width: width.into(),
        height: height.into(),
    };
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(too_large)?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| too_large())?;
    data.resize(len, 0);
    Ok(data)
}

/// Auto-crop settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Quantization grid in pixels. 0 disables padding; otherwise each output
    /// dimension is rounded up to a multiple of this value and the content
    /// is centered.
    pub offset: u32,
}

impl CropOptions {
    /// Upper end of the offset slider in the batch UI. Larger values are
    /// still accepted.
    pub const MAX_UI_OFFSET: u32 = 128;

    pub fn new(offset: u32) -> Self {
        Self { offset }
    }

    /// Check if this is a plain tight crop (no quantization)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Target size for batch resizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResizePreset {
    /// 128x128
    Thumbnail,
    /// 256x256
    Small,
    /// 512x512
    #[default]
    Medium,
    /// 1024x1024
    Large,
    /// Caller-chosen size.
    Custom { width: u32, height: u32 },
}

impl ResizePreset {
    /// The fixed-size presets, smallest first.
    pub const FIXED: [ResizePreset; 4] = [
        ResizePreset::Thumbnail,
        ResizePreset::Small,
        ResizePreset::Medium,
        ResizePreset::Large,
    ];

    /// Target (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            ResizePreset::Thumbnail => (128, 128),
            ResizePreset::Small => (256, 256),
            ResizePreset::Medium => (512, 512),
            ResizePreset::Large => (1024, 1024),
            ResizePreset::Custom { width, height } => (width, height),
        }
    }

    /// Human-readable label, e.g. "Small (256x256)".
    pub fn label(&self) -> String {
        let (w, h) = self.dimensions();
        match self {
            ResizePreset::Thumbnail => format!("Thumbnail ({w}x{h})"),
            ResizePreset::Small => format!("Small ({w}x{h})"),
            ResizePreset::Medium => format!("Medium ({w}x{h})"),
            ResizePreset::Large => format!("Large ({w}x{h})"),
            ResizePreset::Custom { .. } => format!("Custom ({w}x{h})"),
        }
    }
}
