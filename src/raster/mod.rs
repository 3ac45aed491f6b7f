//! Rasterization and curve tessellation.
//!
//! Pure, stateless routines that convert continuous geometric primitives
//! into discrete pixel emissions using integer-arithmetic incremental
//! algorithms and parametric sampling.
//!
//! # Algorithms
//!
//! - **DDA Line**: uniform floating-point stepping along the dominant axis
//! - **Bresenham's Line**: integer-only 8-connected line drawing
//! - **Midpoint Circle**: 8-way symmetric circle outline
//! - **Midpoint Ellipse**: two-region, 4-way symmetric ellipse outline
//! - **Cubic Bézier**: parametric tessellation into polylines or pixels
//!
//! # Contract
//!
//! Every routine is synchronous, allocation-free and reentrant: it holds a
//! borrowed sink for the duration of one call, emits pixels in traversal
//! order along the primitive, and terminates in a bounded number of steps.
//! Identical inputs always produce an identical sequence of sink calls.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae
//!   with a digital plotter."

mod bezier;
mod circle;
mod ellipse;
mod line;

pub use bezier::{cubic_bezier, cubic_bezier_pixels, DEFAULT_SEGMENTS};
pub use circle::{bresenham_circle, bresenham_circle_traced, plot_octants};
pub use ellipse::{midpoint_ellipse, midpoint_ellipse_traced, plot_quadrants};
pub use line::{bresenham_line, dda_line};

use crate::color::Rgba;
use crate::geometry::Point;
use std::fmt;

/// Capability for receiving computed pixels.
///
/// Implemented by raster targets (e.g. [`Framebuffer`](crate::framebuffer::Framebuffer));
/// the rasterization routines only ever call it. Bounds checking is the
/// sink's responsibility: out-of-range coordinates must be dropped, not
/// rejected, so the algorithms stay free of clipping logic.
pub trait PixelSink {
    /// Plot a single pixel.
    fn plot(&mut self, x: i32, y: i32, color: Rgba);
}

impl<F: FnMut(i32, i32, Rgba)> PixelSink for F {
    fn plot(&mut self, x: i32, y: i32, color: Rgba) {
        self(x, y, color);
    }
}

/// Capability for drawing line segments.
///
/// Used by the polyline Bézier mode; implementations commonly delegate to
/// [`bresenham_line`] bound to a [`PixelSink`] (see [`BresenhamPen`]).
pub trait LineDrawer {
    /// Draw the segment from `p1` to `p2`, both endpoints inclusive.
    fn draw_segment(&mut self, p1: Point, p2: Point, color: Rgba);
}

impl<F: FnMut(Point, Point, Rgba)> LineDrawer for F {
    fn draw_segment(&mut self, p1: Point, p2: Point, color: Rgba) {
        self(p1, p2, color);
    }
}

/// [`LineDrawer`] adapter that rasterizes each segment with
/// [`bresenham_line`] into a borrowed pixel sink.
///
/// This is the standard wiring for [`cubic_bezier`]:
///
/// ```
/// use trazar::prelude::*;
/// use trazar::raster::{cubic_bezier, BresenhamPen, DEFAULT_SEGMENTS};
///
/// let mut fb = Framebuffer::new(64, 64).expect("non-zero dimensions");
/// let mut pen = BresenhamPen::new(&mut fb);
/// cubic_bezier(
///     Point::new(0, 0),
///     Point::new(20, 60),
///     Point::new(40, 0),
///     Point::new(63, 63),
///     &mut pen,
///     Rgba::BLACK,
///     DEFAULT_SEGMENTS,
/// );
/// ```
pub struct BresenhamPen<'a, S: PixelSink + ?Sized> {
    sink: &'a mut S,
}

impl<'a, S: PixelSink + ?Sized> BresenhamPen<'a, S> {
    /// Create a pen over a borrowed sink.
    pub fn new(sink: &'a mut S) -> Self {
        Self { sink }
    }
}

impl<S: PixelSink + ?Sized> LineDrawer for BresenhamPen<'_, S> {
    fn draw_segment(&mut self, p1: Point, p2: Point, color: Rgba) {
        bresenham_line(p1, p2, self.sink, color);
    }
}

/// Diagnostic raised when a routine normalizes a degenerate input.
///
/// Degenerate inputs never fail; the routine draws its defined minimal
/// output (possibly nothing) and reports the condition here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Warning {
    /// A circle was requested with a negative radius; nothing was drawn.
    NegativeCircleRadius {
        /// The offending radius.
        radius: i32,
    },
    /// An ellipse was requested with a non-positive semi-axis.
    DegenerateEllipseAxes {
        /// Horizontal semi-axis.
        rx: i32,
        /// Vertical semi-axis.
        ry: i32,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCircleRadius { radius } => {
                write!(f, "circle radius cannot be negative (got {radius})")
            }
            Self::DegenerateEllipseAxes { rx, ry } => {
                write!(f, "ellipse radii must be positive (got rx={rx}, ry={ry})")
            }
        }
    }
}

/// Observer for rasterization diagnostics.
///
/// No-op by default. Callers that want the degenerate-input warnings of
/// the `*_traced` routines install an implementation; everyone else uses
/// the plain entry points, which discard diagnostics.
pub trait RasterTrace {
    /// Called when a routine normalizes a degenerate input.
    fn warning(&mut self, warning: Warning) {
        let _ = warning;
    }
}

/// The default trace: discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl RasterTrace for NoTrace {}

impl RasterTrace for Vec<Warning> {
    fn warning(&mut self, warning: Warning) {
        self.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_pixel_sink() {
        let mut pixels = Vec::new();
        let mut sink = |x: i32, y: i32, _color: Rgba| pixels.push(Point::new(x, y));
        sink.plot(3, 4, Rgba::BLACK);
        drop(sink);
        assert_eq!(pixels, vec![Point::new(3, 4)]);
    }

    #[test]
    fn test_closure_is_a_line_drawer() {
        let mut segments = Vec::new();
        let mut drawer =
            |p1: Point, p2: Point, _color: Rgba| segments.push((p1, p2));
        drawer.draw_segment(Point::new(0, 0), Point::new(5, 5), Rgba::RED);
        drop(drawer);
        assert_eq!(segments, vec![(Point::new(0, 0), Point::new(5, 5))]);
    }

    #[test]
    fn test_bresenham_pen_delegates_to_sink() {
        let mut pixels = Vec::new();
        let mut sink = |x: i32, y: i32, _color: Rgba| pixels.push(Point::new(x, y));
        let mut pen = BresenhamPen::new(&mut sink);
        pen.draw_segment(Point::new(0, 0), Point::new(2, 0), Rgba::BLACK);
        drop(pen);
        drop(sink);
        assert_eq!(
            pixels,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn test_warning_display() {
        let w = Warning::NegativeCircleRadius { radius: -3 };
        assert!(w.to_string().contains("-3"));
        let w = Warning::DegenerateEllipseAxes { rx: 0, ry: 5 };
        assert!(w.to_string().contains("rx=0"));
    }

    #[test]
    fn test_vec_collects_warnings() {
        let mut warnings: Vec<Warning> = Vec::new();
        warnings.warning(Warning::NegativeCircleRadius { radius: -1 });
        assert_eq!(warnings.len(), 1);
    }
}
