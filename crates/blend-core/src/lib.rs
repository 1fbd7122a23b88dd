//! # blend-core
//!
//! Core types for compositing images with blend modes.
//!
//! - [`Rect`] - image bounds with an arbitrary origin
//! - [`Rgba16`], [`RgbaF64`] - channel-native and working-precision colors
//! - [`Hsl`], [`rgb_to_hsl`], [`hsl_to_rgb`] - HSL intermediate for the
//!   hue/saturation/color/luminosity modes
//! - [`ColorModel`] - model tag compared before compositing
//! - [`Image`], [`ImageSource`], [`ImageSink`] - pixel grids and the traits
//!   decoders implement to hand them over
//!
//! All color math happens on the 16-bit scale: channel values run from 0 to
//! [`MAX`] (65535), with [`MID`] as the midpoint.
//!
//! ## Crate Structure
//!
//! ```text
//! blend-core (this crate)
//!    ^
//!    |
//!    +-- blend-ops (blend modes, compositor)
//!    +-- blend-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`Rect`], [`Rgba16`], [`ColorModel`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod hsl;
pub mod image;
pub mod model;
pub mod pixel;
pub mod rect;

pub use error::{Error, Result};
pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use image::{Image, ImageSink, ImageSource};
pub use model::ColorModel;
pub use pixel::{channel_to_u16, channel_to_u8, Rgba16, RgbaF64, MAX, MID};
pub use rect::Rect;

/// Prelude module for convenient imports.
///
/// ```
/// use blend_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
    pub use crate::image::{Image, ImageSink, ImageSource};
    pub use crate::model::ColorModel;
    pub use crate::pixel::{Rgba16, RgbaF64, MAX, MID};
    pub use crate::rect::Rect;
}
