//! Error types for blend operations.

use blend_core::{ColorModel, Rect};
use thiserror::Error;

/// Error type for blend and composite operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Source and destination use different color models.
    #[error("incompatible color models: dst is {dst}, src is {src}")]
    IncompatibleColorModel {
        /// Destination model
        dst: ColorModel,
        /// Source model
        src: ColorModel,
    },

    /// Source bounds do not fit inside the destination bounds.
    #[error("bounds mismatch: src {src} does not fit inside dst {dst}")]
    BoundsMismatch {
        /// Destination bounds
        dst: Rect,
        /// Source bounds
        src: Rect,
    },

    /// Source and destination bounds do not intersect.
    #[error("no overlap between dst {dst} and src {src}")]
    NoOverlap {
        /// Destination bounds
        dst: Rect,
        /// Source bounds
        src: Rect,
    },

    /// No blend mode is registered under this name.
    #[error("unknown blend mode: {0}")]
    UnknownMode(String),

    /// Error from the core image types.
    #[error(transparent)]
    Core(#[from] blend_core::Error),
}

/// Result type for blend operations.
pub type OpsResult<T> = Result<T, OpsError>;
