//! Error types for blend-core operations.
//!
//! The [`Error`] enum covers the failure modes of the image buffer:
//! out-of-bounds pixel access and buffers whose length does not match
//! their bounds.
//!
//! # Usage
//!
//! ```rust
//! use blend_core::{Error, Rect, Result};
//!
//! fn check(bounds: Rect, x: i32, y: i32) -> Result<()> {
//!     if !bounds.contains(x, y) {
//!         return Err(Error::out_of_bounds(x, y, bounds));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(Rect::from_size(4, 4), 5, 0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use crate::rect::Rect;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core image operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({x}, {y}) out of bounds for image {bounds}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: i32,
        /// Y coordinate that was out of bounds
        y: i32,
        /// Image bounds
        bounds: Rect,
    },

    /// Buffer length does not match the image bounds.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i32, y: i32, bounds: Rect) -> Self {
        Self::OutOfBounds { x, y, bounds }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
