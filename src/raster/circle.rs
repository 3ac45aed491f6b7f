//! Midpoint circle rasterization.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::raster::{NoTrace, PixelSink, RasterTrace, Warning};

/// Emit the 8 octant reflections of `offset` around `center`.
///
/// One formula slot per reflection, no deduplication: on the axes and
/// diagonals some slots coincide and the shared coordinate is emitted once
/// per slot. Callers relying on exact emission counts must account for
/// this.
pub fn plot_octants<S: PixelSink + ?Sized>(
    center: Point,
    offset: Point,
    sink: &mut S,
    color: Rgba,
) {
    sink.plot(center.x + offset.x, center.y + offset.y, color);
    sink.plot(center.x - offset.x, center.y + offset.y, color);
    sink.plot(center.x + offset.x, center.y - offset.y, color);
    sink.plot(center.x - offset.x, center.y - offset.y, color);
    sink.plot(center.x + offset.y, center.y + offset.x, color);
    sink.plot(center.x - offset.y, center.y + offset.x, color);
    sink.plot(center.x + offset.y, center.y - offset.x, color);
    sink.plot(center.x - offset.y, center.y - offset.x, color);
}

/// Draw a circle outline using the midpoint (Bresenham) circle algorithm.
///
/// Computes one octant with an integer decision parameter and reflects
/// each state 8 ways via [`plot_octants`].
///
/// Degenerate inputs: a zero radius emits exactly the center pixel; a
/// negative radius emits nothing. Use [`bresenham_circle_traced`] to
/// observe the negative-radius diagnostic.
pub fn bresenham_circle<S: PixelSink + ?Sized>(
    center: Point,
    radius: i32,
    sink: &mut S,
    color: Rgba,
) {
    bresenham_circle_traced(center, radius, sink, color, &mut NoTrace);
}

/// [`bresenham_circle`] with an observer for degenerate-input diagnostics.
pub fn bresenham_circle_traced<S, T>(
    center: Point,
    radius: i32,
    sink: &mut S,
    color: Rgba,
    trace: &mut T,
) where
    S: PixelSink + ?Sized,
    T: RasterTrace + ?Sized,
{
    if radius < 0 {
        trace.warning(Warning::NegativeCircleRadius { radius });
        return;
    }
    if radius == 0 {
        sink.plot(center.x, center.y, color);
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut p = 1 - radius;

    plot_octants(center, Point::new(x, y), sink, color);

    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
        plot_octants(center, Point::new(x, y), sink, color);
    }
}
