//! Error types for trazar operations.
//!
//! The rasterization core itself never fails: degenerate inputs are
//! normalized to a defined drawing behavior and reported through the
//! [`RasterTrace`](crate::raster::RasterTrace) hook. Errors exist only at
//! the raster-surface and output layers (invalid framebuffer dimensions,
//! file I/O, PNG encoding).

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazar operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
