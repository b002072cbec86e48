//! Image representation for the adjustment pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EditError;

/// Numeric range that channel values of an image live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChannelRange {
    /// 0–255, the range slider brightness offsets are expressed in.
    #[default]
    Byte,
    /// 0.0–1.0 normalized values.
    Unit,
}

impl ChannelRange {
    /// Largest valid channel value.
    pub const fn max(self) -> f32 {
        match self {
            Self::Byte => 255.0,
            Self::Unit => 1.0,
        }
    }

    /// Factor converting a 0–255 brightness offset into this range.
    pub const fn offset_scale(self) -> f32 {
        match self {
            Self::Byte => 1.0,
            Self::Unit => 1.0 / 255.0,
        }
    }

    /// Clamp a channel value into `[0, max]`. NaN maps to 0.
    pub fn clamp(self, value: f32) -> f32 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.max())
    }
}

impl fmt::Display for ChannelRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte => write!(f, "0-255"),
            Self::Unit => write!(f, "0-1"),
        }
    }
}

/// Decoded RGBA image held as f32 channels in `range`.
///
/// Decoding is done by the caller; this type only wraps pixels that already
/// sit in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct EditImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data as `[R, G, B, A]`, row-major.
    pub pixels: Vec<[f32; 4]>,
    /// Range every channel value is expressed in.
    pub range: ChannelRange,
}

impl EditImage {
    /// Wrap an existing pixel buffer, checking that it matches the dimensions.
    pub fn from_raw(
        width: u32,
        height: u32,
        pixels: Vec<[f32; 4]>,
        range: ChannelRange,
    ) -> Result<Self, EditError> {
        if width == 0 || height == 0 {
            return Err(EditError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(EditError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
            range,
        })
    }

    /// Convert an 8-bit RGBA buffer. Channels keep their 0–255 values.
    pub fn from_rgba8(img: &image::RgbaImage) -> Result<Self, EditError> {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|p| {
                [
                    p.0[0] as f32,
                    p.0[1] as f32,
                    p.0[2] as f32,
                    p.0[3] as f32,
                ]
            })
            .collect();
        Self::from_raw(width, height, pixels, ChannelRange::Byte)
    }

    /// Convert any decoded image into normalized RGBA.
    pub fn from_dynamic(img: &image::DynamicImage) -> Result<Self, EditError> {
        let rgba = img.to_rgba32f();
        let (width, height) = rgba.dimensions();
        let pixels = rgba
            .pixels()
            .map(|p| [p.0[0], p.0[1], p.0[2], p.0[3]])
            .collect();
        Self::from_raw(width, height, pixels, ChannelRange::Unit)
    }

    /// Quantize back to an 8-bit RGBA buffer, rounding to nearest.
    pub fn to_rgba8(&self) -> image::RgbaImage {
        let scale = 255.0 / self.range.max();
        let width = self.width as usize;
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let px = self.pixels[y as usize * width + x as usize];
            image::Rgba(px.map(|c| (self.range.clamp(c) * scale).round() as u8))
        })
    }

    /// Raw bytes of the pixel buffer, for upload to a rendering layer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for images built through the checked constructors.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}
