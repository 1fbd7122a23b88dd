//! Blend modes and per-pixel dispatch.
//!
//! A blend mode is anything implementing [`Blend`]: given a destination and
//! a source color it returns the combined color. Three kinds of value do:
//!
//! - [`BlendMode`] - the built-in modes, a closed enum
//! - [`PerChannel`] - a custom per-channel function applied to r, g and b
//! - closures `Fn(Dst<RgbaF64>, Src<RgbaF64>) -> RgbaF64`
//!
//! Per-channel modes never touch alpha: the destination's alpha is copied to
//! the result.
//!
//! # Example
//!
//! ```rust
//! use blend_core::Rgba16;
//! use blend_ops::{blend_pixel, BlendMode};
//!
//! let red = Rgba16::opaque(65535, 0, 0);
//! let blue = Rgba16::opaque(0, 0, 65535);
//!
//! assert_eq!(blend_pixel(red, blue, &BlendMode::Multiply), Rgba16::BLACK);
//! assert_eq!("linear_light".parse::<BlendMode>().unwrap(), BlendMode::LinearLight);
//! ```

use crate::channel::{self, ChannelFn, Dst, Src};
use crate::color_modes::{self, ColorFn};
use crate::{OpsError, OpsResult};
use blend_core::{Rgba16, RgbaF64};
use std::fmt;
use std::str::FromStr;

/// Applies `f` to the r, g and b channels independently, keeping the
/// destination's alpha.
#[inline]
pub fn blend_per_channel(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>, f: ChannelFn) -> RgbaF64 {
    RgbaF64::new(
        f(Dst(d.r), Src(s.r)),
        f(Dst(d.g), Src(s.g)),
        f(Dst(d.b), Src(s.b)),
        d.a,
    )
}

/// A color combination rule.
pub trait Blend {
    /// Combines destination and source at working precision. The result is
    /// unclamped.
    fn blend(&self, dst: Dst<RgbaF64>, src: Src<RgbaF64>) -> RgbaF64;

    /// Lifts both colors, blends them, and lowers the result back to 16 bits.
    #[inline]
    fn blend_rgba16(&self, dst: Rgba16, src: Rgba16) -> Rgba16 {
        self.blend(Dst(dst.to_f64()), Src(src.to_f64())).to_rgba16()
    }
}

impl<F> Blend for F
where
    F: Fn(Dst<RgbaF64>, Src<RgbaF64>) -> RgbaF64,
{
    #[inline]
    fn blend(&self, dst: Dst<RgbaF64>, src: Src<RgbaF64>) -> RgbaF64 {
        self(dst, src)
    }
}

/// Wraps a per-channel function into a [`Blend`].
///
/// ```rust
/// use blend_core::Rgba16;
/// use blend_ops::channel::{Dst, Src};
/// use blend_ops::{Blend, PerChannel};
///
/// fn average(Dst(d): Dst, Src(s): Src) -> f64 {
///     (d + s) / 2.0
/// }
///
/// let mode = PerChannel(average);
/// let out = mode.blend_rgba16(Rgba16::BLACK, Rgba16::WHITE);
/// assert_eq!(out, Rgba16::gray(32768));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PerChannel(pub ChannelFn);

impl Blend for PerChannel {
    #[inline]
    fn blend(&self, dst: Dst<RgbaF64>, src: Src<RgbaF64>) -> RgbaF64 {
        blend_per_channel(dst, src, self.0)
    }
}

/// The function behind a [`BlendMode`].
#[derive(Debug, Clone, Copy)]
pub enum Kernel {
    /// Applied to each color channel independently.
    Channel(ChannelFn),
    /// Applied to the whole color.
    Color(ColorFn),
}

/// Built-in blend modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlendMode {
    /// `min(d, s)` per channel.
    Darken,
    /// Product of the layers.
    Multiply,
    /// Darken by increasing contrast.
    ColorBurn,
    /// Sum minus white.
    LinearBurn,
    /// Whole color with the lower channel sum.
    DarkerColor,
    /// `max(d, s)` per channel.
    Lighten,
    /// Inverse product of the inverses.
    Screen,
    /// Brighten by decreasing contrast.
    ColorDodge,
    /// Clamped sum.
    LinearDodge,
    /// Whole color with the higher channel sum.
    LighterColor,
    /// Multiply or screen by destination.
    Overlay,
    /// Gentle contrast.
    SoftLight,
    /// Multiply or screen by source.
    HardLight,
    /// Color burn or dodge by source.
    VividLight,
    /// Linear burn or dodge by source.
    LinearLight,
    /// Darken or lighten by source.
    PinLight,
    /// Thresholded vivid light.
    HardMix,
    /// Absolute difference.
    Difference,
    /// Lower-contrast difference.
    Exclusion,
    /// Destination minus source.
    #[cfg_attr(feature = "serde", serde(alias = "substract"))]
    Subtract,
    /// Destination over source.
    Divide,
    /// Source hue.
    Hue,
    /// Source saturation.
    Saturation,
    /// Source hue and saturation.
    Color,
    /// Source lightness.
    Luminosity,
    /// Clamped sum.
    Add,
    /// Squared destination over inverse source.
    Reflex,
    /// `min - max + white`.
    Phoenix,
}

impl BlendMode {
    /// Every built-in mode, Photoshop order first, extras last.
    pub const ALL: [BlendMode; 28] = [
        Self::Darken,
        Self::Multiply,
        Self::ColorBurn,
        Self::LinearBurn,
        Self::DarkerColor,
        Self::Lighten,
        Self::Screen,
        Self::ColorDodge,
        Self::LinearDodge,
        Self::LighterColor,
        Self::Overlay,
        Self::SoftLight,
        Self::HardLight,
        Self::VividLight,
        Self::LinearLight,
        Self::PinLight,
        Self::HardMix,
        Self::Difference,
        Self::Exclusion,
        Self::Subtract,
        Self::Divide,
        Self::Hue,
        Self::Saturation,
        Self::Color,
        Self::Luminosity,
        Self::Add,
        Self::Reflex,
        Self::Phoenix,
    ];

    /// Returns the function implementing this mode.
    pub const fn kernel(self) -> Kernel {
        use Kernel::{Channel, Color};
        match self {
            Self::Darken => Channel(channel::darken),
            Self::Multiply => Channel(channel::multiply),
            Self::ColorBurn => Channel(channel::color_burn),
            Self::LinearBurn => Channel(channel::linear_burn),
            Self::DarkerColor => Color(color_modes::darker_color),
            Self::Lighten => Channel(channel::lighten),
            Self::Screen => Channel(channel::screen),
            Self::ColorDodge => Channel(channel::color_dodge),
            Self::LinearDodge => Channel(channel::linear_dodge),
            Self::LighterColor => Color(color_modes::lighter_color),
            Self::Overlay => Channel(channel::overlay),
            Self::SoftLight => Channel(channel::soft_light),
            Self::HardLight => Channel(channel::hard_light),
            Self::VividLight => Channel(channel::vivid_light),
            Self::LinearLight => Channel(channel::linear_light),
            Self::PinLight => Channel(channel::pin_light),
            Self::HardMix => Channel(channel::hard_mix),
            Self::Difference => Channel(channel::difference),
            Self::Exclusion => Channel(channel::exclusion),
            Self::Subtract => Channel(channel::subtract),
            Self::Divide => Channel(channel::divide),
            Self::Hue => Color(color_modes::hue),
            Self::Saturation => Color(color_modes::saturation),
            Self::Color => Color(color_modes::color),
            Self::Luminosity => Color(color_modes::luminosity),
            Self::Add => Channel(channel::add),
            Self::Reflex => Channel(channel::reflex),
            Self::Phoenix => Channel(channel::phoenix),
        }
    }

    /// Returns `true` if the mode blends each channel independently.
    #[inline]
    pub const fn is_per_channel(self) -> bool {
        matches!(self.kernel(), Kernel::Channel(_))
    }

    /// Registry name, snake_case.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Darken => "darken",
            Self::Multiply => "multiply",
            Self::ColorBurn => "color_burn",
            Self::LinearBurn => "linear_burn",
            Self::DarkerColor => "darker_color",
            Self::Lighten => "lighten",
            Self::Screen => "screen",
            Self::ColorDodge => "color_dodge",
            Self::LinearDodge => "linear_dodge",
            Self::LighterColor => "lighter_color",
            Self::Overlay => "overlay",
            Self::SoftLight => "soft_light",
            Self::HardLight => "hard_light",
            Self::VividLight => "vivid_light",
            Self::LinearLight => "linear_light",
            Self::PinLight => "pin_light",
            Self::HardMix => "hard_mix",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Subtract => "subtract",
            Self::Divide => "divide",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
            Self::Add => "add",
            Self::Reflex => "reflex",
            Self::Phoenix => "phoenix",
        }
    }

    /// Looks a mode up by registry name. `"substract"` is accepted for
    /// [`BlendMode::Subtract`].
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "substract" {
            return Some(Self::Subtract);
        }
        Self::ALL.into_iter().find(|m| m.name() == name)
    }
}

impl Blend for BlendMode {
    #[inline]
    fn blend(&self, dst: Dst<RgbaF64>, src: Src<RgbaF64>) -> RgbaF64 {
        match self.kernel() {
            Kernel::Channel(f) => blend_per_channel(dst, src, f),
            Kernel::Color(f) => f(dst, src),
        }
    }
}

impl FromStr for BlendMode {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        Self::from_name(s).ok_or_else(|| OpsError::UnknownMode(s.to_string()))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Blends one destination color with one source color.
#[inline]
pub fn blend_pixel<B: Blend + ?Sized>(dst: Rgba16, src: Rgba16, mode: &B) -> Rgba16 {
    mode.blend_rgba16(dst, src)
}
