//! Rectangle type for image bounds.
//!
//! Image bounds are not required to start at the origin: a layer can sit
//! anywhere on the canvas, including at negative coordinates. Compositing
//! only ever touches the pixels where two layers' bounds intersect.
//!
//! # Coordinate System
//!
//! - X increases to the right, Y increases downward
//! - Left/top edges are inclusive, right/bottom edges are exclusive
//!
//! ```text
//! (x,y) ──────────► right()
//!   │ ┌──────────┐
//!   │ │  bounds  │
//!   │ └──────────┘
//!   ▼ bottom()
//! ```
//!
//! # Usage
//!
//! ```rust
//! use blend_core::Rect;
//!
//! let dst = Rect::from_size(4, 4);
//! let src = Rect::new(2, 2, 4, 4);
//!
//! let inter = dst.intersect(&src).unwrap();
//! assert_eq!(inter, Rect::new(2, 2, 2, 2));
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// A rectangle with zero width or height is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: i32,
    /// Y coordinate of the top edge (inclusive)
    pub y: i32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at origin (0, 0) with given dimensions.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from a min corner (inclusive) and a max corner
    /// (exclusive). Swapped coordinates are normalized.
    ///
    /// ```rust
    /// use blend_core::Rect;
    ///
    /// let rect = Rect::from_corners(-2, 3, 6, 1);
    /// assert_eq!(rect, Rect::new(-2, 1, 8, 2));
    /// ```
    #[inline]
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(
            min_x,
            min_y,
            max_x.abs_diff(min_x),
            max_y.abs_diff(min_y),
        )
    }

    /// X coordinate of the right edge (exclusive).
    ///
    /// Widened to `i64`: a rectangle may reach past `i32::MAX`.
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Y coordinate of the bottom edge (exclusive), widened like
    /// [`right`](Self::right).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// ```rust
    /// use blend_core::Rect;
    ///
    /// let rect = Rect::new(-10, -10, 20, 20);
    /// assert!(rect.contains(-10, -10));
    /// assert!(rect.contains(9, 9));
    /// assert!(!rect.contains(10, 10));
    /// ```
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && (px as i64) < self.right() && py >= self.y && (py as i64) < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns `true` if the two rectangles share at least one pixel.
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        (self.x as i64) < other.right()
            && self.right() > other.x as i64
            && (self.y as i64) < other.bottom()
            && self.bottom() > other.y as i64
    }

    /// Returns the intersection of this rectangle with another, or `None`
    /// if they don't overlap.
    #[inline]
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if i64::from(x) < right && i64::from(y) < bottom {
            // Never wider than either input, so the spans fit in u32.
            Some(Rect::new(
                x,
                y,
                span(i64::from(x), right),
                span(i64::from(y), bottom),
            ))
        } else {
            None
        }
    }

    /// Returns the bounding box that contains both rectangles. Spans wider
    /// than `u32::MAX` saturate.
    #[inline]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, span(i64::from(x), right), span(i64::from(y), bottom))
    }

    /// Returns this rectangle translated by (dx, dy). The origin saturates
    /// at the `i32` range.
    #[inline]
    pub const fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Returns an iterator over all (x, y) coordinates in this rectangle,
    /// row by row, left to right, top to bottom. Coordinates past `i32::MAX`
    /// are not addressable and are skipped.
    ///
    /// ```rust
    /// use blend_core::Rect;
    ///
    /// let coords: Vec<_> = Rect::new(-1, 0, 2, 2).iter_coords().collect();
    /// assert_eq!(coords, vec![(-1, 0), (0, 0), (-1, 1), (0, 1)]);
    /// ```
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        const END: i64 = i32::MAX as i64 + 1;
        let (x0, right) = (i64::from(self.x), self.right().min(END));
        let (y0, bottom) = (i64::from(self.y), self.bottom().min(END));
        (y0..bottom).flat_map(move |y| (x0..right).map(move |x| (x as i32, y as i32)))
    }
}

/// Distance from `start` to `end`, saturating at `u32::MAX`.
#[inline]
fn span(start: i64, end: i64) -> u32 {
    u32::try_from(end - start).unwrap_or(u32::MAX)
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}
