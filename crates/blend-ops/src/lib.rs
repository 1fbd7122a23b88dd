//! # blend-ops
//!
//! Photoshop-style blend modes and image compositing.
//!
//! # Modules
//!
//! - [`channel`] - per-channel blend functions and the [`Dst`] / [`Src`]
//!   argument wrappers
//! - [`color_modes`] - whole-color modes (darker/lighter color, hue,
//!   saturation, color, luminosity)
//! - [`mode`] - the [`Blend`] trait, [`BlendMode`] and the name registry
//! - [`mod@composite`] - blending one image onto another
//! - [`parallel`] - row-parallel compositing (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use blend_core::{ColorModel, Image, Rect, Rgba16};
//! use blend_ops::{composite_in_place, BlendMode};
//!
//! let mut base = Image::filled(Rect::from_size(8, 8), ColorModel::Rgba16, Rgba16::gray(30000));
//! let layer = Image::filled(Rect::new(4, 4, 8, 8), ColorModel::Rgba16, Rgba16::gray(50000));
//!
//! let mode: BlendMode = "color_dodge".parse().unwrap();
//! composite_in_place(&mut base, &layer, &mode).unwrap();
//! ```
//!
//! # Argument order
//!
//! Everything takes the destination (bottom layer) first and the source
//! (top layer) second. Non-commutative modes such as [`BlendMode::Subtract`]
//! depend on it.
//!
//! # Feature Flags
//!
//! - `parallel` (default) - enables [`parallel`] via rayon
//! - `serde` - Serialize/Deserialize for [`BlendMode`] and
//!   [`CompositeOptions`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod channel;
pub mod color_modes;
pub mod composite;
pub mod mode;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use channel::{ChannelFn, Dst, Src};
pub use color_modes::ColorFn;
pub use composite::{
    composite, composite_in_place, composite_in_place_with, composite_with, BoundsPolicy,
    CompositeOptions,
};
pub use error::{OpsError, OpsResult};
pub use mode::{blend_per_channel, blend_pixel, Blend, BlendMode, Kernel, PerChannel};
