//! Parallel compositing using Rayon.
//!
//! Row-parallel versions of [`composite`](crate::composite()) and
//! [`composite_in_place`](crate::composite_in_place()) for the owned
//! [`Image`] buffer. Each pixel depends only on its own inputs, so results
//! are identical to the sequential functions.
//!
//! # Example
//!
//! ```rust
//! use blend_core::{ColorModel, Image, Rect, Rgba16};
//! use blend_ops::{parallel, BlendMode};
//!
//! let dst = Image::filled(Rect::from_size(256, 256), ColorModel::Rgba16, Rgba16::gray(20000));
//! let src = Image::filled(Rect::new(128, 0, 256, 256), ColorModel::Rgba16, Rgba16::gray(50000));
//!
//! let out = parallel::composite(&dst, &src, &BlendMode::Overlay).unwrap();
//! assert_eq!(out.pixel(0, 0), dst.pixel(0, 0));
//! ```

use crate::composite::{blend_area, CompositeOptions};
use crate::mode::Blend;
use crate::OpsResult;
use blend_core::{Image, ImageSource, Rect};
use rayon::prelude::*;
use tracing::trace;

/// Parallel [`composite`](crate::composite()).
///
/// # Errors
///
/// Same as [`composite`](crate::composite()).
pub fn composite<S, B>(dst: &Image, src: &S, mode: &B) -> OpsResult<Image>
where
    S: ImageSource + Sync + ?Sized,
    B: Blend + Sync + ?Sized,
{
    composite_with(dst, src, mode, &CompositeOptions::default())
}

/// Parallel [`composite_with`](crate::composite_with()).
///
/// # Errors
///
/// Same as [`composite_with`](crate::composite_with()).
pub fn composite_with<S, B>(
    dst: &Image,
    src: &S,
    mode: &B,
    opts: &CompositeOptions,
) -> OpsResult<Image>
where
    S: ImageSource + Sync + ?Sized,
    B: Blend + Sync + ?Sized,
{
    let mut out = dst.clone();
    composite_in_place_with(&mut out, src, mode, opts)?;
    Ok(out)
}

/// Parallel [`composite_in_place`](crate::composite_in_place()).
///
/// # Errors
///
/// Same as [`composite_in_place`](crate::composite_in_place()).
pub fn composite_in_place<S, B>(dst: &mut Image, src: &S, mode: &B) -> OpsResult<()>
where
    S: ImageSource + Sync + ?Sized,
    B: Blend + Sync + ?Sized,
{
    composite_in_place_with(dst, src, mode, &CompositeOptions::default())
}

/// Parallel [`composite_in_place_with`](crate::composite_in_place_with()).
///
/// # Errors
///
/// Same as [`composite_in_place_with`](crate::composite_in_place_with()).
pub fn composite_in_place_with<S, B>(
    dst: &mut Image,
    src: &S,
    mode: &B,
    opts: &CompositeOptions,
) -> OpsResult<()>
where
    S: ImageSource + Sync + ?Sized,
    B: Blend + Sync + ?Sized,
{
    trace!(dst = %dst.bounds(), src = %src.bounds(), "parallel::composite_in_place");

    let area = blend_area(
        (dst.bounds(), dst.color_model()),
        (src.bounds(), src.color_model()),
        opts,
    )?;

    if let Some(area) = area {
        blend_rows(dst, src, mode, area);
    }
    Ok(())
}

/// Blends the rows of `area`, one rayon task per row.
fn blend_rows<S, B>(dst: &mut Image, src: &S, mode: &B, area: Rect)
where
    S: ImageSource + Sync + ?Sized,
    B: Blend + Sync + ?Sized,
{
    let bounds = dst.bounds();
    let model = dst.color_model();
    let width = bounds.width as usize;
    let first_row = area.y.abs_diff(bounds.y) as usize;
    let first_col = area.x.abs_diff(bounds.x) as usize;
    let cols = area.width as usize;

    let rows = &mut dst.data_mut()[first_row * width..(first_row + area.height as usize) * width];

    rows.par_chunks_mut(width).enumerate().for_each(|(i, row)| {
        let y = area.y + i as i32;
        for (j, px) in row[first_col..first_col + cols].iter_mut().enumerate() {
            let x = area.x + j as i32;
            *px = model.convert(mode.blend_rgba16(*px, src.pixel(x, y)));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlendMode, OpsError};
    use blend_core::{ColorModel, Rgba16};

    fn gradient(bounds: Rect, model: ColorModel, seed: u32) -> Image {
        let data = bounds
            .iter_coords()
            .map(|(x, y)| {
                let v = (x.wrapping_mul(7919) ^ y.wrapping_mul(104729)) as u32 ^ seed;
                Rgba16::new(
                    (v & 0xffff) as u16,
                    (v.rotate_left(5) & 0xffff) as u16,
                    (v.rotate_left(11) & 0xffff) as u16,
                    (v.rotate_left(17) & 0xffff) as u16,
                )
            })
            .collect();
        Image::from_data(bounds, model, data).unwrap()
    }

    #[test]
    fn test_matches_sequential() {
        let dst = gradient(Rect::new(-5, -7, 37, 23), ColorModel::Rgba16, 0x1234);
        let src = gradient(Rect::new(3, -2, 50, 9), ColorModel::Rgba16, 0xbeef);

        for mode in BlendMode::ALL {
            let seq = crate::composite(&dst, &src, &mode).unwrap();
            let par = composite(&dst, &src, &mode).unwrap();
            assert_eq!(seq, par, "{mode}");
        }
    }

    #[test]
    fn test_in_place_matches_sequential_8bit() {
        let dst = gradient(Rect::new(0, 0, 16, 16), ColorModel::Rgba8, 1);
        let src = gradient(Rect::new(4, 4, 8, 20), ColorModel::Rgba8, 2);

        let mut seq = dst.clone();
        crate::composite_in_place(&mut seq, &src, &BlendMode::VividLight).unwrap();
        let mut par = dst.clone();
        composite_in_place(&mut par, &src, &BlendMode::VividLight).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_errors_before_touching_pixels() {
        let mut dst = gradient(Rect::from_size(4, 4), ColorModel::Rgba16, 3);
        let before = dst.clone();
        let src = gradient(Rect::from_size(4, 4), ColorModel::Gray16, 4);

        let err = composite_in_place(&mut dst, &src, &BlendMode::Multiply).unwrap_err();
        assert!(matches!(err, OpsError::IncompatibleColorModel { .. }));
        assert_eq!(dst, before);
    }

    #[test]
    fn test_no_overlap() {
        let dst = gradient(Rect::from_size(4, 4), ColorModel::Rgba16, 5);
        let src = gradient(Rect::new(-10, 0, 4, 4), ColorModel::Rgba16, 6);
        assert_eq!(composite(&dst, &src, &BlendMode::Screen).unwrap(), dst);
    }
}
