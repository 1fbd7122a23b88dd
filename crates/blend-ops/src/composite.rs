//! Image compositing.
//!
//! Blends a source image onto a destination image with any [`Blend`]
//! implementation. Only pixels inside both images' bounds are blended; the
//! images may have different sizes and origins.
//!
//! # Variants
//!
//! - [`composite`] - returns a new [`Image`] with the destination's bounds
//!   and color model, leaving both inputs untouched
//! - [`composite_in_place`] - overwrites the overlapping destination pixels
//!
//! The `_with` forms take [`CompositeOptions`] to require containment or a
//! non-empty overlap.
//!
//! # Example
//!
//! ```rust
//! use blend_core::{ColorModel, Image, Rect, Rgba16};
//! use blend_ops::{composite, BlendMode};
//!
//! let dst = Image::filled(Rect::from_size(4, 4), ColorModel::Rgba16, Rgba16::opaque(65535, 0, 0));
//! let src = Image::filled(Rect::new(2, 2, 4, 4), ColorModel::Rgba16, Rgba16::opaque(0, 0, 65535));
//!
//! let out = composite(&dst, &src, &BlendMode::Multiply).unwrap();
//! assert_eq!(out.bounds(), dst.bounds());
//! assert_eq!(out.pixel(3, 3), Rgba16::BLACK);
//! assert_eq!(out.pixel(0, 0), dst.pixel(0, 0));
//! ```

use crate::mode::Blend;
use crate::{OpsError, OpsResult};
use blend_core::{ColorModel, Image, ImageSink, ImageSource, Rect};
use tracing::{debug, trace};

/// How source bounds are checked against destination bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoundsPolicy {
    /// Blend wherever the two images overlap.
    #[default]
    Intersect,
    /// Fail with [`OpsError::BoundsMismatch`] unless the source lies fully
    /// inside the destination.
    Contained,
}

/// Options for [`composite_with`] and [`composite_in_place_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompositeOptions {
    /// Bounds check applied before blending.
    pub bounds: BoundsPolicy,
    /// Fail with [`OpsError::NoOverlap`] instead of doing nothing when the
    /// images do not intersect.
    pub require_overlap: bool,
}

impl CompositeOptions {
    /// Options requiring the source to lie inside the destination.
    pub const fn contained() -> Self {
        Self {
            bounds: BoundsPolicy::Contained,
            require_overlap: false,
        }
    }

    /// Sets `require_overlap`.
    pub const fn with_require_overlap(mut self, require: bool) -> Self {
        self.require_overlap = require;
        self
    }
}

/// Checks preconditions and returns the area to blend.
///
/// `Ok(None)` means there is nothing to blend.
pub(crate) fn blend_area(
    dst: (Rect, ColorModel),
    src: (Rect, ColorModel),
    opts: &CompositeOptions,
) -> OpsResult<Option<Rect>> {
    let (dst_bounds, dst_model) = dst;
    let (src_bounds, src_model) = src;

    if dst_model != src_model {
        return Err(OpsError::IncompatibleColorModel {
            dst: dst_model,
            src: src_model,
        });
    }

    if opts.bounds == BoundsPolicy::Contained && !dst_bounds.contains_rect(&src_bounds) {
        return Err(OpsError::BoundsMismatch {
            dst: dst_bounds,
            src: src_bounds,
        });
    }

    let area = dst_bounds.intersect(&src_bounds);
    if area.is_none() {
        if opts.require_overlap {
            return Err(OpsError::NoOverlap {
                dst: dst_bounds,
                src: src_bounds,
            });
        }
        debug!(dst = %dst_bounds, src = %src_bounds, "No overlap, nothing to blend");
    }
    Ok(area)
}

/// Blends `src` onto a copy of `dst`.
///
/// The result has the destination's bounds and color model. Pixels in the
/// intersection are `mode(dst, src)`, all others are copied from `dst`.
///
/// # Errors
///
/// [`OpsError::IncompatibleColorModel`] if the color models differ.
pub fn composite<D, S, B>(dst: &D, src: &S, mode: &B) -> OpsResult<Image>
where
    D: ImageSource + ?Sized,
    S: ImageSource + ?Sized,
    B: Blend + ?Sized,
{
    composite_with(dst, src, mode, &CompositeOptions::default())
}

/// [`composite`] with explicit options.
///
/// # Errors
///
/// - [`OpsError::IncompatibleColorModel`] if the color models differ
/// - [`OpsError::BoundsMismatch`] with [`BoundsPolicy::Contained`] when the
///   source sticks out of the destination
/// - [`OpsError::NoOverlap`] with `require_overlap` when the images do not
///   intersect
pub fn composite_with<D, S, B>(
    dst: &D,
    src: &S,
    mode: &B,
    opts: &CompositeOptions,
) -> OpsResult<Image>
where
    D: ImageSource + ?Sized,
    S: ImageSource + ?Sized,
    B: Blend + ?Sized,
{
    trace!(dst = %dst.bounds(), src = %src.bounds(), "composite");

    let area = blend_area(
        (dst.bounds(), dst.color_model()),
        (src.bounds(), src.color_model()),
        opts,
    )?;

    let mut out = Image::from_source(dst);
    if let Some(area) = area {
        for (x, y) in area.iter_coords() {
            let c = mode.blend_rgba16(out.pixel(x, y), src.pixel(x, y));
            out.set_pixel(x, y, c);
        }
    }
    Ok(out)
}

/// Blends `src` onto `dst`, overwriting only the overlapping pixels.
///
/// # Errors
///
/// [`OpsError::IncompatibleColorModel`] if the color models differ. `dst`
/// is left untouched on error.
///
/// # Example
///
/// ```rust
/// use blend_core::{ColorModel, Image, Rect, Rgba16};
/// use blend_ops::{composite_in_place, BlendMode};
///
/// let mut dst = Image::filled(Rect::from_size(2, 2), ColorModel::Rgba16, Rgba16::BLACK);
/// let src = Image::filled(Rect::new(1, 0, 1, 1), ColorModel::Rgba16, Rgba16::WHITE);
///
/// composite_in_place(&mut dst, &src, &BlendMode::Screen).unwrap();
/// assert_eq!(dst.pixel(1, 0), Rgba16::WHITE);
/// assert_eq!(dst.pixel(0, 0), Rgba16::BLACK);
/// ```
pub fn composite_in_place<D, S, B>(dst: &mut D, src: &S, mode: &B) -> OpsResult<()>
where
    D: ImageSink + ?Sized,
    S: ImageSource + ?Sized,
    B: Blend + ?Sized,
{
    composite_in_place_with(dst, src, mode, &CompositeOptions::default())
}

/// [`composite_in_place`] with explicit options.
///
/// # Errors
///
/// Same as [`composite_with`].
pub fn composite_in_place_with<D, S, B>(
    dst: &mut D,
    src: &S,
    mode: &B,
    opts: &CompositeOptions,
) -> OpsResult<()>
where
    D: ImageSink + ?Sized,
    S: ImageSource + ?Sized,
    B: Blend + ?Sized,
{
    trace!(dst = %dst.bounds(), src = %src.bounds(), "composite_in_place");

    let area = blend_area(
        (dst.bounds(), dst.color_model()),
        (src.bounds(), src.color_model()),
        opts,
    )?;

    if let Some(area) = area {
        for (x, y) in area.iter_coords() {
            let c = mode.blend_rgba16(dst.pixel(x, y), src.pixel(x, y));
            dst.set_pixel(x, y, c);
        }
    }
    Ok(())
}
