//! Color model tags.
//!
//! Every image carries a [`ColorModel`]. Two images can only be composited
//! when their models are equal. The model also decides how a color is
//! quantized when it is written into an image: an 8-bit model keeps only the
//! high byte of each channel, a gray model collapses the color to luma.

use crate::pixel::Rgba16;
use std::fmt;

/// Pixel color model of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorModel {
    /// 8 bits per channel RGBA.
    Rgba8,
    /// 16 bits per channel RGBA.
    #[default]
    Rgba16,
    /// 8-bit opaque gray.
    Gray8,
    /// 16-bit opaque gray.
    Gray16,
}

impl ColorModel {
    /// Bits stored per channel.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rgba8 | Self::Gray8 => 8,
            Self::Rgba16 | Self::Gray16 => 16,
        }
    }

    /// Returns `true` for single-channel gray models.
    #[inline]
    pub const fn is_gray(self) -> bool {
        matches!(self, Self::Gray8 | Self::Gray16)
    }

    /// Lowercase name of the model.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgba8 => "rgba8",
            Self::Rgba16 => "rgba16",
            Self::Gray8 => "gray8",
            Self::Gray16 => "gray16",
        }
    }

    /// Converts a color into this model, still expressed as [`Rgba16`].
    ///
    /// ```
    /// use blend_core::{ColorModel, Rgba16};
    ///
    /// let c = Rgba16::new(0x1234, 0xABCD, 0x00FF, 0xFFFF);
    /// assert_eq!(ColorModel::Rgba16.convert(c), c);
    /// assert_eq!(ColorModel::Rgba8.convert(c), Rgba16::new(0x1212, 0xABAB, 0x0000, 0xFFFF));
    /// assert_eq!(ColorModel::Gray16.convert(Rgba16::WHITE), Rgba16::WHITE);
    /// ```
    pub fn convert(self, c: Rgba16) -> Rgba16 {
        match self {
            Self::Rgba16 => c,
            Self::Rgba8 => Rgba16::new(
                narrow(c.r),
                narrow(c.g),
                narrow(c.b),
                narrow(c.a),
            ),
            Self::Gray16 => Rgba16::gray(luma(c)),
            Self::Gray8 => Rgba16::gray(narrow(luma(c))),
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn narrow(v: u16) -> u16 {
    (v >> 8) * 0x101
}

// Rec.601 weights in 16.16 fixed point; they sum to 1 << 16.
#[inline]
fn luma(c: Rgba16) -> u16 {
    let y = (19595 * u32::from(c.r) + 38470 * u32::from(c.g) + 7471 * u32::from(c.b) + (1 << 15))
        >> 16;
    y as u16
}
