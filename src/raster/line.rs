//! Line rasterization.
//!
//! Two interchangeable algorithms covering the same contract: emit every
//! pixel of the discrete approximation of the segment from `p1` to `p2`,
//! both endpoints inclusive, exactly once per visited grid cell, in
//! traversal order from `p1` to `p2`.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::raster::PixelSink;

/// Draw a line using the DDA (Digital Differential Analyzer) algorithm.
///
/// Steps `max(|dx|, |dy|) + 1` times along the dominant axis with real
/// increments, rounding each accumulator sample to the nearest pixel.
/// Ties round half away from zero ([`f64::round`] semantics), so e.g. an
/// accumulator of `2.5` lands on pixel 3 and `-2.5` on pixel -3.
///
/// Coincident endpoints emit a single pixel.
pub fn dda_line<S: PixelSink + ?Sized>(p1: Point, p2: Point, sink: &mut S, color: Rgba) {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    let steps = dx.abs().max(dy.abs());
    if steps == 0 {
        sink.plot(p1.x, p1.y, color);
        return;
    }

    let x_increment = f64::from(dx) / f64::from(steps);
    let y_increment = f64::from(dy) / f64::from(steps);

    let mut x = f64::from(p1.x);
    let mut y = f64::from(p1.y);

    for _ in 0..=steps {
        sink.plot(x.round() as i32, y.round() as i32, color);
        x += x_increment;
        y += y_increment;
    }
}

/// Draw a line using Bresenham's algorithm.
///
/// Integer-only, 8-connected: consecutive emitted pixels differ by at
/// most 1 on each axis, and both axes may advance in the same step
/// (diagonal move). Coincident endpoints emit a single pixel.
pub fn bresenham_line<S: PixelSink + ?Sized>(p1: Point, p2: Point, sink: &mut S, color: Rgba) {
    let dx = (p2.x - p1.x).abs();
    let dy = (p2.y - p1.y).abs();

    let sx = if p1.x < p2.x { 1 } else { -1 };
    let sy = if p1.y < p2.y { 1 } else { -1 };

    let mut err = dx - dy;
    let mut x = p1.x;
    let mut y = p1.y;

    loop {
        sink.plot(x, y, color);

        if x == p2.x && y == p2.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
