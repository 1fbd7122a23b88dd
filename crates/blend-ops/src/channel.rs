//! Per-channel blend functions.
//!
//! Every function combines one destination channel with one source channel
//! on the 16-bit scale and returns the unclamped result. The destination
//! (bottom layer) always comes first and the source (top layer) second; the
//! [`Dst`] and [`Src`] wrappers make swapping them a type error.
//!
//! ```
//! use blend_ops::channel::{color_dodge, multiply, Dst, Src};
//! use blend_core::MAX;
//!
//! assert_eq!(multiply(Dst(MAX), Src(1000.0)), 1000.0);
//! assert_eq!(color_dodge(Dst(0.0), Src(MAX)), MAX);
//! ```
//!
//! Families, in Photoshop order:
//!
//! - darken: [`darken`], [`multiply`], [`color_burn`], [`linear_burn`]
//! - lighten: [`lighten`], [`screen`], [`color_dodge`], [`linear_dodge`]
//! - contrast: [`overlay`], [`soft_light`], [`hard_light`], [`vivid_light`],
//!   [`linear_light`], [`pin_light`], [`hard_mix`]
//! - comparative: [`difference`], [`exclusion`], [`subtract`], [`divide`]
//! - extra: [`add`], [`reflex`], [`phoenix`]

use blend_core::{MAX, MID};

/// Destination (bottom layer) value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dst<T = f64>(pub T);

/// Source (top layer) value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Src<T = f64>(pub T);

/// Signature shared by all per-channel blend functions.
pub type ChannelFn = fn(Dst, Src) -> f64;

// Darken family

/// `min(d, s)`
#[inline]
pub fn darken(Dst(d): Dst, Src(s): Src) -> f64 {
    d.min(s)
}

/// `s * d / MAX`
#[inline]
pub fn multiply(Dst(d): Dst, Src(s): Src) -> f64 {
    s * d / MAX
}

/// Darkens the destination by increasing contrast. A black source stays black.
#[inline]
pub fn color_burn(Dst(d): Dst, Src(s): Src) -> f64 {
    if s == 0.0 {
        return 0.0;
    }
    (MAX - (MAX - d) * MAX / s).max(0.0)
}

/// `s + d - MAX`, floored at 0.
#[inline]
pub fn linear_burn(Dst(d): Dst, Src(s): Src) -> f64 {
    if s + d < MAX {
        return 0.0;
    }
    s + d - MAX
}

// Lighten family

/// `max(d, s)`
#[inline]
pub fn lighten(Dst(d): Dst, Src(s): Src) -> f64 {
    d.max(s)
}

/// `s + d - s * d / MAX`
#[inline]
pub fn screen(Dst(d): Dst, Src(s): Src) -> f64 {
    s + d - s * d / MAX
}

/// Brightens the destination by decreasing contrast. A white source stays white.
#[inline]
pub fn color_dodge(Dst(d): Dst, Src(s): Src) -> f64 {
    if s == MAX {
        return MAX;
    }
    (d * MAX / (MAX - s)).min(MAX)
}

/// `min(s + d, MAX)`
#[inline]
pub fn linear_dodge(Dst(d): Dst, Src(s): Src) -> f64 {
    (s + d).min(MAX)
}

// Contrast family

/// Multiply or screen depending on the destination.
#[inline]
pub fn overlay(Dst(d): Dst, Src(s): Src) -> f64 {
    if d < MID {
        2.0 * s * d / MAX
    } else {
        MAX - 2.0 * (MAX - s) * (MAX - d) / MAX
    }
}

/// Gentle contrast: darkens or lightens the destination by the source.
#[inline]
pub fn soft_light(Dst(d): Dst, Src(s): Src) -> f64 {
    (d / MAX) * (d + (2.0 * s / MAX) * (MAX - d))
}

/// Multiply or screen depending on the source.
#[inline]
pub fn hard_light(Dst(d): Dst, Src(s): Src) -> f64 {
    if s > MID {
        d + (MAX - d) * ((s - MID) / MID)
    } else {
        d * s / MID
    }
}

/// Color burn for dark sources, color dodge for light ones.
#[inline]
pub fn vivid_light(Dst(d): Dst, Src(s): Src) -> f64 {
    if s < MID {
        color_burn(Dst(d), Src(2.0 * s))
    } else {
        color_dodge(Dst(d), Src(2.0 * (s - MID)))
    }
}

/// Linear burn for dark sources, linear dodge for light ones.
#[inline]
pub fn linear_light(Dst(d): Dst, Src(s): Src) -> f64 {
    if s < MID {
        linear_burn(Dst(d), Src(2.0 * s))
    } else {
        linear_dodge(Dst(d), Src(2.0 * (s - MID)))
    }
}

/// Darken for dark sources, lighten for light ones.
#[inline]
pub fn pin_light(Dst(d): Dst, Src(s): Src) -> f64 {
    if s < MID {
        darken(Dst(d), Src(2.0 * s))
    } else {
        lighten(Dst(d), Src(2.0 * (s - MID)))
    }
}

/// Thresholded vivid light: every channel ends up 0 or MAX.
#[inline]
pub fn hard_mix(d: Dst, s: Src) -> f64 {
    if vivid_light(d, s) < MID { 0.0 } else { MAX }
}

// Comparative family

/// `|s - d|`
#[inline]
pub fn difference(Dst(d): Dst, Src(s): Src) -> f64 {
    (s - d).abs()
}

/// `s + d - s * d / MID`
#[inline]
pub fn exclusion(Dst(d): Dst, Src(s): Src) -> f64 {
    s + d - s * d / MID
}

/// `max(0, d - s)`
#[inline]
pub fn subtract(Dst(d): Dst, Src(s): Src) -> f64 {
    (d - s).max(0.0)
}

/// `d * MAX / s`. A zero source saturates to MAX.
#[inline]
pub fn divide(Dst(d): Dst, Src(s): Src) -> f64 {
    if s == 0.0 {
        return MAX;
    }
    d * MAX / s
}

// Extra modes, not in Photoshop

/// `min(s + d, MAX)`
#[inline]
pub fn add(Dst(d): Dst, Src(s): Src) -> f64 {
    (s + d).min(MAX)
}

/// Also known as glow when the layers are swapped.
#[inline]
pub fn reflex(Dst(d): Dst, Src(s): Src) -> f64 {
    if s == MAX {
        return MAX;
    }
    (d * d / (MAX - s)).min(MAX)
}

/// `min(s, d) - max(s, d) + MAX`
#[inline]
pub fn phoenix(Dst(d): Dst, Src(s): Src) -> f64 {
    d.min(s) - d.max(s) + MAX
}
