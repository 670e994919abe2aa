//! RGBA pixel buffer shared by every transform.
//!
//! Pixels are stored row-major with four bytes per pixel in R, G, B, A
//! order. A buffer is immutable once constructed: transforms borrow it and
//! allocate a new buffer for their output.

use thiserror::Error;

/// Number of bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Errors raised when constructing a pixel buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    /// Pixel data length doesn't match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A decoded RGBA image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::SizeMismatch` if `data.len() != width * height * 4`.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height);
        if data.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a fully transparent buffer (all channels zero).
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; byte_len(width, height)],
        }
    }

    /// Wrap an `image::RgbaImage` without copying its pixels.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_dynamic_image(img: &image::DynamicImage) -> Self {
        Self::from_rgba_image(img.to_rgba8())
    }

    /// Convert to an `image::RgbaImage` for the encoding collaborator.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its raw bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if the buffer has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte offset of the pixel at (`row`, `col`).
    #[inline]
    pub(crate) fn offset(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * CHANNELS
    }

    /// Alpha value at (`row`, `col`). Callers must stay in bounds.
    #[inline]
    pub(crate) fn alpha_at(&self, row: u32, col: u32) -> u8 {
        self.data[self.offset(row, col) + 3]
    }

    /// The four channels at (`row`, `col`). Callers must stay in bounds.
    #[inline]
    pub(crate) fn pixel(&self, row: u32, col: u32) -> [u8; 4] {
        let i = self.offset(row, col);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Build a buffer from owned bytes whose length is already known to match.
    pub(crate) fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            byte_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            data,
        }
    }
}

#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * CHANNELS
}
