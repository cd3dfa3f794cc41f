//! Typed error types for notecard-render.
//!
//! Callers at the crate boundary can match on specific variants instead of
//! relying on opaque error strings. Per-reference fetch failures during
//! quote expansion are deliberately absent here: those degrade in place and
//! never surface as errors.

use thiserror::Error;

/// Top-level error type for the preview rendering core.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Startup font loading failed; the renderer cannot run without its
    /// font table.
    #[error(transparent)]
    Font(#[from] notecard_fonts::FontError),

    /// An image buffer with a zero dimension was handed to a transform.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidImage {
        /// Width of the rejected buffer.
        width: u32,
        /// Height of the rejected buffer.
        height: u32,
    },

    /// Media bytes could not be decoded into a raster image.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}
