//! Image buffer and the collaborator traits the compositor works against.
//!
//! - [`ImageSource`] - anything that can report bounds, a color model and a
//!   color per coordinate. Decoders implement this.
//! - [`ImageSink`] - an [`ImageSource`] that can also be written.
//! - [`Image`] - owned row-major buffer of [`Rgba16`] implementing both.
//!
//! Coordinates are absolute: an image whose bounds start at (10, -5) stores
//! its first pixel at (10, -5), not at (0, 0).
//!
//! # Usage
//!
//! ```rust
//! use blend_core::{ColorModel, Image, ImageSource, Rect, Rgba16};
//!
//! let mut img = Image::new(Rect::new(10, -5, 2, 2), ColorModel::Rgba16);
//! img.set_pixel(11, -4, Rgba16::WHITE);
//!
//! assert_eq!(img.pixel(11, -4), Rgba16::WHITE);
//! assert_eq!(img.pixel(10, -5), Rgba16::TRANSPARENT);
//! assert!(img.get_pixel(0, 0).is_none());
//! ```

use crate::{ColorModel, Error, Rect, Result, Rgba16};

/// Read access to a decoded image.
pub trait ImageSource {
    /// Bounding rectangle of the image.
    fn bounds(&self) -> Rect;

    /// Color model tag, compared for equality before compositing.
    fn color_model(&self) -> ColorModel;

    /// Color at absolute coordinate (x, y). Only called for coordinates
    /// inside [`bounds`](Self::bounds).
    fn pixel(&self, x: i32, y: i32) -> Rgba16;
}

/// Write access to an image.
pub trait ImageSink: ImageSource {
    /// Stores a color at absolute coordinate (x, y). Only called for
    /// coordinates inside [`bounds`](ImageSource::bounds).
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba16);
}

/// Owned image buffer.
///
/// Pixels are stored row-major, top to bottom. Every stored color has been
/// converted into the image's [`ColorModel`].
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<Rgba16>,
    bounds: Rect,
    model: ColorModel,
}

impl Image {
    /// Creates an image filled with transparent black.
    pub fn new(bounds: Rect, model: ColorModel) -> Self {
        Self::filled(bounds, model, Rgba16::TRANSPARENT)
    }

    /// Creates an image filled with one color.
    pub fn filled(bounds: Rect, model: ColorModel, color: Rgba16) -> Self {
        let count = bounds.area() as usize;
        Self {
            data: vec![model.convert(color); count],
            bounds,
            model,
        }
    }

    /// Creates an image from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold exactly
    /// one color per pixel of `bounds`.
    pub fn from_data(bounds: Rect, model: ColorModel, data: Vec<Rgba16>) -> Result<Self> {
        let expected = bounds.area() as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds.width,
                bounds.height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        let data = data.into_iter().map(|c| model.convert(c)).collect();
        Ok(Self {
            data,
            bounds,
            model,
        })
    }

    /// Copies any [`ImageSource`] into an owned buffer.
    pub fn from_source<S: ImageSource + ?Sized>(src: &S) -> Self {
        let bounds = src.bounds();
        let model = src.color_model();
        let data = bounds
            .iter_coords()
            .map(|(x, y)| model.convert(src.pixel(x, y)))
            .collect();
        Self {
            data,
            bounds,
            model,
        }
    }

    /// Bounding rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Color model tag.
    #[inline]
    pub fn color_model(&self) -> ColorModel {
        self.model
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height
    }

    /// Returns `true` if the image holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[Rgba16] {
        &self.data
    }

    /// Mutable raw pixel data. Writes through this slice bypass model
    /// conversion.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgba16] {
        &mut self.data
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        let col = x.abs_diff(self.bounds.x) as usize;
        let row = y.abs_diff(self.bounds.y) as usize;
        row * self.bounds.width as usize + col
    }

    /// Gets the color at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        assert!(
            self.bounds.contains(x, y),
            "{}",
            Error::out_of_bounds(x, y, self.bounds)
        );
        self.data[self.index(x, y)]
    }

    /// Gets the color at (x, y), or `None` outside the bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba16> {
        self.bounds
            .contains(x, y)
            .then(|| self.data[self.index(x, y)])
    }

    /// Stores a color at (x, y) after converting it into the image's model.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba16) {
        assert!(
            self.bounds.contains(x, y),
            "{}",
            Error::out_of_bounds(x, y, self.bounds)
        );
        let idx = self.index(x, y);
        self.data[idx] = self.model.convert(color);
    }

    /// Stores a color at (x, y), failing instead of panicking outside the
    /// bounds.
    pub fn try_set_pixel(&mut self, x: i32, y: i32, color: Rgba16) -> Result<()> {
        if !self.bounds.contains(x, y) {
            return Err(Error::out_of_bounds(x, y, self.bounds));
        }
        let idx = self.index(x, y);
        self.data[idx] = self.model.convert(color);
        Ok(())
    }

    /// Pixels of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the bounds.
    pub fn row(&self, y: i32) -> &[Rgba16] {
        assert!(y >= self.bounds.y && i64::from(y) < self.bounds.bottom());
        let start = self.index(self.bounds.x, y);
        &self.data[start..start + self.bounds.width as usize]
    }

    /// Mutable pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y` is outside the bounds.
    pub fn row_mut(&mut self, y: i32) -> &mut [Rgba16] {
        assert!(y >= self.bounds.y && i64::from(y) < self.bounds.bottom());
        let start = self.index(self.bounds.x, y);
        let width = self.bounds.width as usize;
        &mut self.data[start..start + width]
    }

    /// Iterates over `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Rgba16)> + '_ {
        self.bounds
            .iter_coords()
            .zip(self.data.iter())
            .map(|((x, y), &c)| (x, y, c))
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("bounds", &self.bounds)
            .field("model", &self.model)
            .finish()
    }
}

impl ImageSource for Image {
    #[inline]
    fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    fn color_model(&self) -> ColorModel {
        self.model
    }

    #[inline]
    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        Image::pixel(self, x, y)
    }
}

impl ImageSink for Image {
    #[inline]
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba16) {
        Image::set_pixel(self, x, y, color)
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn color_model(&self) -> ColorModel {
        (**self).color_model()
    }

    fn pixel(&self, x: i32, y: i32) -> Rgba16 {
        (**self).pixel(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let img = Image::new(Rect::from_size(3, 2), ColorModel::Rgba16);
        assert_eq!(img.data().len(), 6);
        assert!(img.data().iter().all(|&c| c == Rgba16::TRANSPARENT));
    }

    #[test]
    fn test_offset_origin_indexing() {
        let mut img = Image::new(Rect::new(-2, 5, 3, 2), ColorModel::Rgba16);
        img.set_pixel(0, 6, Rgba16::WHITE);
        assert_eq!(img.data()[5], Rgba16::WHITE);
        assert_eq!(img.row(6)[2], Rgba16::WHITE);
        assert_eq!(img.get_pixel(-3, 5), None);
    }

    #[test]
    fn test_from_data_length_mismatch() {
        let err = Image::from_data(Rect::from_size(2, 2), ColorModel::Rgba16, vec![Rgba16::BLACK; 3])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { width: 2, height: 2, .. }));
    }

    #[test]
    fn test_set_pixel_converts_to_model() {
        let mut img = Image::new(Rect::from_size(1, 1), ColorModel::Rgba8);
        img.set_pixel(0, 0, Rgba16::new(0x12FF, 0, 0xFFFF, 0xFFFF));
        assert_eq!(img.pixel(0, 0), Rgba16::new(0x1212, 0, 0xFFFF, 0xFFFF));
    }

    #[test]
    fn test_try_set_pixel_out_of_bounds() {
        let mut img = Image::new(Rect::from_size(2, 2), ColorModel::Rgba16);
        let err = img.try_set_pixel(2, 0, Rgba16::WHITE).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_pixel_out_of_bounds_panics() {
        let img = Image::new(Rect::from_size(2, 2), ColorModel::Rgba16);
        img.pixel(0, 2);
    }

    #[test]
    fn test_from_source_copies() {
        let mut img = Image::new(Rect::new(1, 1, 2, 2), ColorModel::Gray16);
        img.set_pixel(2, 2, Rgba16::WHITE);
        let copy = Image::from_source(&img);
        assert_eq!(copy, img);
    }

    #[test]
    fn test_pixels_iterator_coordinates() {
        let img = Image::filled(Rect::new(-1, -1, 2, 1), ColorModel::Rgba16, Rgba16::BLACK);
        let coords: Vec<_> = img.pixels().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(-1, -1), (0, -1)]);
    }
}
