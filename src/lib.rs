//! # Trazar
//!
//! Integer-arithmetic rasterization and curve tessellation.
//!
//! Trazar converts continuous geometric primitives (line segments,
//! circles, axis-aligned ellipses, cubic Bézier curves) into discrete
//! pixel emissions using incremental decision-variable algorithms and
//! parametric sampling. The algorithms are pure and stateless: the caller
//! supplies geometry, a color and a [`PixelSink`](raster::PixelSink) (or
//! [`LineDrawer`](raster::LineDrawer)) capability, and the routine calls
//! back zero or more times in traversal order and returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use trazar::prelude::*;
//! use trazar::raster::{bresenham_circle, bresenham_line};
//!
//! let mut fb = Framebuffer::new(256, 256)?;
//! fb.clear(Rgba::WHITE);
//!
//! bresenham_line(Point::new(10, 10), Point::new(245, 120), &mut fb, Rgba::BLACK);
//! bresenham_circle(Point::new(128, 128), 64, &mut fb, Rgba::RED);
//! # Ok::<(), trazar::Error>(())
//! ```
//!
//! ## Design
//!
//! - **Emission order is a contract**: sink calls occur in monotonically
//!   increasing parametric/geometric order along the primitive, and
//!   identical inputs always produce identical call sequences.
//! - **Degenerate inputs never fail**: zero radii, coincident endpoints
//!   and non-positive segment counts are normalized to a defined minimal
//!   drawing behavior; diagnostics flow through the optional
//!   [`RasterTrace`](raster::RasterTrace) hook.
//! - **Bounds policy lives in the sink**: the provided
//!   [`Framebuffer`](framebuffer::Framebuffer) silently drops
//!   out-of-bounds emissions, keeping the algorithms free of clipping.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae
//!   with a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Geometric primitives.
pub mod geometry;

/// Rasterization and curve tessellation algorithms.
pub mod raster;

// ============================================================================
// Raster Surface & Output Modules
// ============================================================================

/// RGBA raster surface.
pub mod framebuffer;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazar operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trazar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::output::PngEncoder;
    pub use crate::raster::{
        BresenhamPen, LineDrawer, NoTrace, PixelSink, RasterTrace, Warning,
    };
}
