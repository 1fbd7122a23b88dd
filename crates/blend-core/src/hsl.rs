//! RGB ↔ HSL conversion on the 16-bit channel scale.
//!
//! Used only as an intermediate by the Hue, Saturation, Color and Luminosity
//! blend modes. Hue is in degrees `[0, 360)`, saturation in `[0, 1]`, and
//! lightness in `[0, 65535]` so it shares the scale of the color channels.
//!
//! Grays (r = g = b) have saturation 0 and hue 0; the hue of a gray carries
//! no information and is ignored when converting back.
//!
//! ```
//! use blend_core::{hsl_to_rgb, rgb_to_hsl, Rgba16};
//!
//! let c = Rgba16::opaque(65535, 32768, 0).to_f64();
//! let hsl = rgb_to_hsl(c);
//! assert!((hsl.h - 30.0).abs() < 0.01);
//!
//! let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l, c.a);
//! assert_eq!(back.to_rgba16(), Rgba16::opaque(65535, 32768, 0));
//! ```

use crate::pixel::{RgbaF64, MAX};

/// Hue, saturation, lightness triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 65535]`.
    pub l: f64,
}

impl Hsl {
    /// Creates a triple from its components.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Converts the color channels of `c` to HSL. Alpha is ignored.
pub fn rgb_to_hsl(c: RgbaF64) -> Hsl {
    let r = c.r / MAX;
    let g = c.g / MAX;
    let b = c.b / MAX;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * MAX);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        let h = (g - b) / d;
        if g < b { h + 6.0 } else { h }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s, l * MAX)
}

/// Converts an HSL triple back to a color with the given alpha.
///
/// Hue is wrapped into `[0, 360)`, so any real value is accepted.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64, a: f64) -> RgbaF64 {
    if s == 0.0 {
        return RgbaF64::new(l, l, l, a);
    }

    let l = l / MAX;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let t = h.rem_euclid(360.0) / 360.0;

    RgbaF64::new(
        hue_to_channel(p, q, t + 1.0 / 3.0) * MAX,
        hue_to_channel(p, q, t) * MAX,
        hue_to_channel(p, q, t - 1.0 / 3.0) * MAX,
        a,
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
