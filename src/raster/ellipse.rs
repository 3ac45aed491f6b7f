//! Midpoint ellipse rasterization.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::raster::{bresenham_line, NoTrace, PixelSink, RasterTrace, Warning};

/// Emit the 4 quadrant reflections of `offset` around `center`.
///
/// One formula slot per reflection, no deduplication: on the axes some
/// slots coincide and the shared coordinate is emitted once per slot.
pub fn plot_quadrants<S: PixelSink + ?Sized>(
    center: Point,
    offset: Point,
    sink: &mut S,
    color: Rgba,
) {
    sink.plot(center.x + offset.x, center.y + offset.y, color);
    sink.plot(center.x - offset.x, center.y + offset.y, color);
    sink.plot(center.x + offset.x, center.y - offset.y, color);
    sink.plot(center.x - offset.x, center.y - offset.y, color);
}

/// Draw an axis-aligned ellipse outline using the two-region midpoint
/// algorithm.
///
/// Region 1 covers slope magnitude <= 1 and steps `x`; region 2 covers the
/// rest and steps `y`. The decision parameters are real-valued; the
/// region-1/region-2 initial values follow the standard midpoint-ellipse
/// derivation and are sign-sensitive.
///
/// Degenerate inputs:
/// - `rx == 0 && ry == 0` emits exactly the center pixel;
/// - exactly one zero semi-axis degrades to the axis-aligned segment
///   spanning the non-zero semi-axis;
/// - any negative semi-axis emits nothing.
///
/// All three cases report [`Warning::DegenerateEllipseAxes`] through
/// [`midpoint_ellipse_traced`].
pub fn midpoint_ellipse<S: PixelSink + ?Sized>(
    center: Point,
    rx: i32,
    ry: i32,
    sink: &mut S,
    color: Rgba,
) {
    midpoint_ellipse_traced(center, rx, ry, sink, color, &mut NoTrace);
}

/// [`midpoint_ellipse`] with an observer for degenerate-input diagnostics.
pub fn midpoint_ellipse_traced<S, T>(
    center: Point,
    rx: i32,
    ry: i32,
    sink: &mut S,
    color: Rgba,
    trace: &mut T,
) where
    S: PixelSink + ?Sized,
    T: RasterTrace + ?Sized,
{
    if rx <= 0 || ry <= 0 {
        trace.warning(Warning::DegenerateEllipseAxes { rx, ry });
        if rx < 0 || ry < 0 {
            return;
        }
        if rx == 0 && ry == 0 {
            sink.plot(center.x, center.y, color);
        } else if rx == 0 {
            // One flat axis: collapse to the segment spanned by the other
            bresenham_line(
                Point::new(center.x, center.y - ry),
                Point::new(center.x, center.y + ry),
                sink,
                color,
            );
        } else {
            bresenham_line(
                Point::new(center.x - rx, center.y),
                Point::new(center.x + rx, center.y),
                sink,
                color,
            );
        }
        return;
    }

    let rx_sq = i64::from(rx) * i64::from(rx);
    let ry_sq = i64::from(ry) * i64::from(ry);

    let mut x: i64 = 0;
    let mut y: i64 = i64::from(ry);

    // Region 1: slope magnitude <= 1, step x
    let mut p1 = ry_sq as f64 - (rx_sq * i64::from(ry)) as f64 + 0.25 * rx_sq as f64;

    plot_quadrants(center, Point::new(x as i32, y as i32), sink, color);

    while ry_sq * x < rx_sq * y {
        x += 1;
        if p1 < 0.0 {
            p1 += (2 * ry_sq * x + ry_sq) as f64;
        } else {
            y -= 1;
            p1 += (2 * ry_sq * x - 2 * rx_sq * y + ry_sq) as f64;
        }
        plot_quadrants(center, Point::new(x as i32, y as i32), sink, color);
    }

    // Region 2: reinitialize from the (x, y) left over by region 1, step y
    let mut p2 = ry_sq as f64 * (x as f64 + 0.5).powi(2)
        + rx_sq as f64 * (y as f64 - 1.0).powi(2)
        - (rx_sq * ry_sq) as f64;

    while y >= 0 {
        y -= 1;
        if p2 > 0.0 {
            p2 += (-2 * rx_sq * y + rx_sq) as f64;
        } else {
            x += 1;
            p2 += (2 * ry_sq * x - 2 * rx_sq * y + rx_sq) as f64;
        }
        plot_quadrants(center, Point::new(x as i32, y as i32), sink, color);
    }
}
