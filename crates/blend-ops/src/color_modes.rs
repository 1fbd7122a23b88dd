//! Whole-color blend modes.
//!
//! These modes look at all three color channels at once instead of blending
//! them independently. The result always keeps the destination's alpha.

use crate::channel::{Dst, Src};
use blend_core::{hsl_to_rgb, rgb_to_hsl, RgbaF64};

/// Signature shared by all whole-color blend functions.
pub type ColorFn = fn(Dst<RgbaF64>, Src<RgbaF64>) -> RgbaF64;

/// Keeps whichever color has the lower channel sum. Ties keep the source.
///
/// Alpha is the destination's even when the source color wins.
pub fn darker_color(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>) -> RgbaF64 {
    if s.rgb_sum() > d.rgb_sum() {
        d
    } else {
        s.with_alpha(d.a)
    }
}

/// Keeps whichever color has the higher channel sum. Ties keep the destination.
///
/// Alpha is the destination's even when the source color wins.
pub fn lighter_color(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>) -> RgbaF64 {
    if s.rgb_sum() > d.rgb_sum() {
        s.with_alpha(d.a)
    } else {
        d
    }
}

/// Source hue with destination saturation and lightness. A gray source
/// leaves the destination unchanged.
pub fn hue(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>) -> RgbaF64 {
    let sh = rgb_to_hsl(s);
    if sh.s == 0.0 {
        return d;
    }
    let dh = rgb_to_hsl(d);
    hsl_to_rgb(sh.h, dh.s, dh.l, d.a)
}

/// Source saturation with destination hue and lightness.
pub fn saturation(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>) -> RgbaF64 {
    let sh = rgb_to_hsl(s);
    let dh = rgb_to_hsl(d);
    hsl_to_rgb(dh.h, sh.s, dh.l, d.a)
}

/// Source hue and saturation with destination lightness.
pub fn color(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>) -> RgbaF64 {
    let sh = rgb_to_hsl(s);
    let dh = rgb_to_hsl(d);
    hsl_to_rgb(sh.h, sh.s, dh.l, d.a)
}

/// Source lightness with destination hue and saturation.
pub fn luminosity(Dst(d): Dst<RgbaF64>, Src(s): Src<RgbaF64>) -> RgbaF64 {
    let sh = rgb_to_hsl(s);
    let dh = rgb_to_hsl(d);
    hsl_to_rgb(dh.h, dh.s, sh.l, d.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blend_core::Rgba16;

    fn run(f: ColorFn, d: Rgba16, s: Rgba16) -> Rgba16 {
        f(Dst(d.to_f64()), Src(s.to_f64())).to_rgba16()
    }

    const RED: Rgba16 = Rgba16::opaque(65535, 0, 0);
    const BLUE: Rgba16 = Rgba16::opaque(0, 0, 65535);

    #[test]
    fn test_darker_and_lighter_color() {
        let dark = Rgba16::new(1000, 2000, 3000, 100);
        let light = Rgba16::new(40000, 40000, 40000, 65535);

        assert_eq!(run(darker_color, light, dark), Rgba16::new(1000, 2000, 3000, 65535));
        assert_eq!(run(darker_color, dark, light), dark);
        assert_eq!(run(lighter_color, dark, light), Rgba16::new(40000, 40000, 40000, 100));
        assert_eq!(run(lighter_color, light, dark), light);
    }

    #[test]
    fn test_darker_lighter_ties() {
        let d = Rgba16::new(3000, 0, 0, 10);
        let s = Rgba16::new(0, 0, 3000, 20);
        assert_eq!(run(darker_color, d, s), Rgba16::new(0, 0, 3000, 10));
        assert_eq!(run(lighter_color, d, s), d);
    }

    #[test]
    fn test_hue_gray_source_keeps_destination() {
        let d = Rgba16::new(1234, 40000, 5000, 777);
        assert_eq!(run(hue, d, Rgba16::gray(30000)), d);
    }

    #[test]
    fn test_hue_takes_source_hue() {
        // Red destination re-hued with blue keeps full saturation and mid lightness.
        assert_eq!(run(hue, RED, BLUE), BLUE);
    }

    #[test]
    fn test_saturation_from_gray_source_desaturates() {
        let out = run(saturation, RED, Rgba16::gray(100));
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
        assert_eq!(out.r, 32768);
    }

    #[test]
    fn test_color_keeps_destination_lightness() {
        let out = run(color, Rgba16::gray(0), BLUE);
        assert_eq!(out, Rgba16::BLACK);

        let out = run(color, Rgba16::gray(65535), RED);
        assert_eq!(out, Rgba16::WHITE);
    }

    #[test]
    fn test_luminosity_takes_source_lightness() {
        let out = run(luminosity, RED, Rgba16::gray(0));
        assert_eq!(out, Rgba16::BLACK);

        let out = run(luminosity, RED, Rgba16::gray(65535));
        assert_eq!(out, Rgba16::WHITE);
    }

    #[test]
    fn test_hsl_modes_chromatic_operands() {
        // Dark green at half saturation (h 120, s 0.5, l 0.25) under a vivid
        // orange (h 30, s 1, l 0.5): every mode mixes different components.
        let green = Rgba16::opaque(8192, 24576, 8192);
        let orange = Rgba16::opaque(65535, 32768, 0);

        assert_eq!(run(hue, green, orange), Rgba16::opaque(24576, 16384, 8192));
        assert_eq!(run(saturation, green, orange), Rgba16::opaque(0, 32768, 0));
        assert_eq!(run(color, green, orange), Rgba16::opaque(32768, 16384, 0));
        assert_eq!(run(luminosity, green, orange), Rgba16::opaque(16384, 49151, 16384));
    }

    #[test]
    fn test_alpha_from_destination() {
        let d = Rgba16::new(20000, 30000, 40000, 1);
        let s = Rgba16::new(50000, 10000, 0, 65535);
        for f in [darker_color, lighter_color, hue, saturation, color, luminosity] {
            assert_eq!(run(f, d, s).a, 1);
        }
    }
}
