//! Color types and the integer/float round-trip.
//!
//! Two representations interoperate:
//!
//! - [`Rgba16`] - channel-native, four `u16` components. This is what images
//!   store and what crosses the collaborator boundary.
//! - [`RgbaF64`] - working precision for blend math. Components live in
//!   `[0, 65535]` on input but may leave that range mid-computation.
//!
//! Lifting ([`Rgba16::to_f64`]) is lossless. Lowering
//! ([`RgbaF64::to_rgba16`]) clamps each channel to `[0, 65535]` and rounds
//! by adding 0.5 and truncating, so the result is bit-reproducible.
//!
//! ```
//! use blend_core::{Rgba16, RgbaF64};
//!
//! let c = Rgba16::new(65535, 1234, 0, 65535);
//! assert_eq!(c.to_f64().to_rgba16(), c);
//!
//! let wild = RgbaF64::new(-20.0, 70000.0, 100.49, 100.5);
//! assert_eq!(wild.to_rgba16(), Rgba16::new(0, 65535, 100, 101));
//! ```

use std::fmt;

/// Channel ceiling of the 16-bit range, as used by blend formulas.
pub const MAX: f64 = 65535.0;

/// Midpoint of the 16-bit range (`MAX / 2`).
pub const MID: f64 = MAX / 2.0;

/// Lowers one working-precision channel into the 16-bit range.
///
/// Values below 0 become 0, values above 65535 become 65535, everything else
/// is rounded half-up. NaN lowers to 0.
#[inline]
pub fn channel_to_u16(x: f64) -> u16 {
    if x < 0.0 {
        return 0;
    }
    if x > MAX {
        return u16::MAX;
    }
    (x + 0.5) as u16
}

/// Lowers a channel in `[0, 255]` scale to `u8` with the same clamp-and-round
/// policy as [`channel_to_u16`].
#[inline]
pub fn channel_to_u8(x: f64) -> u8 {
    if x < 0.0 {
        return 0;
    }
    if x > 255.0 {
        return u8::MAX;
    }
    (x + 0.5) as u8
}

/// 16-bit straight RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba16 {
    /// Red
    pub r: u16,
    /// Green
    pub g: u16,
    /// Blue
    pub b: u16,
    /// Alpha
    pub a: u16,
}

impl Rgba16 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, u16::MAX);
    /// Opaque white.
    pub const WHITE: Self = Self::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[inline]
    pub const fn opaque(r: u16, g: u16, b: u16) -> Self {
        Self::new(r, g, b, u16::MAX)
    }

    /// Opaque gray with all color channels set to `v`.
    #[inline]
    pub const fn gray(v: u16) -> Self {
        Self::opaque(v, v, v)
    }

    /// Widens 8-bit channels by bit replication (`v * 257`), so 255 maps to 65535.
    #[inline]
    pub const fn from_rgba8(px: [u8; 4]) -> Self {
        Self::new(
            px[0] as u16 * 0x101,
            px[1] as u16 * 0x101,
            px[2] as u16 * 0x101,
            px[3] as u16 * 0x101,
        )
    }

    /// Narrows to 8-bit channels by keeping the high byte.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r >> 8) as u8,
            (self.g >> 8) as u8,
            (self.b >> 8) as u8,
            (self.a >> 8) as u8,
        ]
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [u16; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates a color from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [u16; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Lifts to working precision without loss.
    #[inline]
    pub fn to_f64(self) -> RgbaF64 {
        RgbaF64::new(
            f64::from(self.r),
            f64::from(self.g),
            f64::from(self.b),
            f64::from(self.a),
        )
    }
}

impl From<[u16; 4]> for Rgba16 {
    fn from(arr: [u16; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Rgba16> for [u16; 4] {
    fn from(c: Rgba16) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgba16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba16({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Working-precision RGBA color on the `[0, 65535]` scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbaF64 {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl RgbaF64 {
    /// Creates a color from its four channels.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Sum of the color channels, alpha excluded.
    #[inline]
    pub fn rgb_sum(&self) -> f64 {
        self.r + self.g + self.b
    }

    /// Returns the same color with its alpha replaced.
    #[inline]
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Lowers to 16-bit channels, clamping and rounding each one with
    /// [`channel_to_u16`].
    #[inline]
    pub fn to_rgba16(self) -> Rgba16 {
        Rgba16::new(
            channel_to_u16(self.r),
            channel_to_u16(self.g),
            channel_to_u16(self.b),
            channel_to_u16(self.a),
        )
    }
}

impl From<Rgba16> for RgbaF64 {
    fn from(c: Rgba16) -> Self {
        c.to_f64()
    }
}

impl From<RgbaF64> for Rgba16 {
    fn from(c: RgbaF64) -> Self {
        c.to_rgba16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_to_u16_clamps() {
        assert_eq!(channel_to_u16(-0.1), 0);
        assert_eq!(channel_to_u16(-1e9), 0);
        assert_eq!(channel_to_u16(65535.4), 65535);
        assert_eq!(channel_to_u16(1e12), 65535);
        assert_eq!(channel_to_u16(f64::INFINITY), 65535);
        assert_eq!(channel_to_u16(f64::NEG_INFINITY), 0);
        assert_eq!(channel_to_u16(f64::NAN), 0);
    }

    #[test]
    fn test_channel_to_u16_rounds_half_up() {
        assert_eq!(channel_to_u16(0.49), 0);
        assert_eq!(channel_to_u16(0.5), 1);
        assert_eq!(channel_to_u16(32767.5), 32768);
        assert_eq!(channel_to_u16(65534.5), 65535);
    }

    #[test]
    fn test_channel_to_u8() {
        assert_eq!(channel_to_u8(-3.0), 0);
        assert_eq!(channel_to_u8(127.5), 128);
        assert_eq!(channel_to_u8(300.0), 255);
    }

    #[test]
    fn test_roundtrip_all_channel_values() {
        for v in 0..=u16::MAX {
            let c = Rgba16::new(v, u16::MAX - v, v / 2, v);
            assert_eq!(c.to_f64().to_rgba16(), c);
        }
    }

    #[test]
    fn test_rgba8_conversion() {
        let c = Rgba16::from_rgba8([255, 128, 0, 1]);
        assert_eq!(c, Rgba16::new(65535, 32896, 0, 257));
        assert_eq!(c.to_rgba8(), [255, 128, 0, 1]);
    }

    #[test]
    fn test_rgb_sum_excludes_alpha() {
        let c = RgbaF64::new(1.0, 2.0, 3.0, 1000.0);
        assert_eq!(c.rgb_sum(), 6.0);
    }
}
