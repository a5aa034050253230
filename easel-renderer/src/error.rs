//! Error types for raster operations.

use easel_core::EaselError;
use thiserror::Error;

/// Result type for raster operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while encoding or restoring raster snapshots.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PNG encoding failed.
    #[error("Failed to encode snapshot: {0}")]
    Encode(image::ImageError),

    /// Snapshot bytes could not be decoded as an image.
    #[error("Failed to decode snapshot: {0}")]
    Decode(String),

    /// A restored snapshot does not match the surface dimensions.
    #[error("Snapshot is {found_width}x{found_height}, surface is {width}x{height}")]
    DimensionMismatch {
        /// Decoded snapshot width.
        found_width: u32,
        /// Decoded snapshot height.
        found_height: u32,
        /// Surface width.
        width: u32,
        /// Surface height.
        height: u32,
    },
}

impl From<RenderError> for EaselError {
    fn from(err: RenderError) -> Self {
        Self::Surface(err.to_string())
    }
}
