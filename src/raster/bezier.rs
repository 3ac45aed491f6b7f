//! Cubic Bézier tessellation.
//!
//! Samples the cubic curve
//! `B(t) = (1-t)³·p0 + 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³·p3`
//! at `segments + 1` evenly spaced parameter values in `[0, 1]` and emits
//! the result either as a polyline of rasterized segments or as
//! deduplicated individual pixels.
//!
//! The two modes deliberately carry different dedup contracts: polyline
//! mode skips zero-length segments (consecutive samples that round to the
//! same pixel), pixel mode suppresses a sample equal to the immediately
//! previously emitted pixel. Neither collapses non-consecutive revisits.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::raster::{LineDrawer, PixelSink};

/// Default number of tessellation segments.
pub const DEFAULT_SEGMENTS: u32 = 50;

/// Evaluate the cubic Bernstein form at parameter `t`, rounded to the
/// nearest pixel.
fn sample(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;

    let x = b0 * f64::from(p0.x) + b1 * f64::from(p1.x) + b2 * f64::from(p2.x)
        + b3 * f64::from(p3.x);
    let y = b0 * f64::from(p0.y) + b1 * f64::from(p1.y) + b2 * f64::from(p2.y)
        + b3 * f64::from(p3.y);

    Point::new(x.round() as i32, y.round() as i32)
}

/// Draw a cubic Bézier curve as a polyline.
///
/// Each consecutive pair of distinct sampled pixels becomes one
/// `draw_segment` call; consecutive samples that round to the same pixel
/// produce no segment. A fully degenerate curve (all control points
/// coincident) therefore draws nothing in this mode.
///
/// `segments` is clamped to a minimum of 1.
pub fn cubic_bezier<D: LineDrawer + ?Sized>(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    drawer: &mut D,
    color: Rgba,
    segments: u32,
) {
    let segments = segments.max(1);

    let mut prev = sample(p0, p1, p2, p3, 0.0);
    for i in 1..=segments {
        let t = f64::from(i) / f64::from(segments);
        let next = sample(p0, p1, p2, p3, t);
        if next != prev {
            drawer.draw_segment(prev, next, color);
        }
        prev = next;
    }
}

/// Draw a cubic Bézier curve as individual pixels.
///
/// Samples are emitted in parametric order; a sample equal to the
/// immediately previously emitted pixel is suppressed. The `t = 0` sample
/// is always emitted, so a fully degenerate curve collapses to exactly one
/// pixel.
///
/// `segments` is clamped to a minimum of 1.
pub fn cubic_bezier_pixels<S: PixelSink + ?Sized>(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    sink: &mut S,
    color: Rgba,
    segments: u32,
) {
    let segments = segments.max(1);

    let mut last: Option<Point> = None;
    for i in 0..=segments {
        let t = f64::from(i) / f64::from(segments);
        let pixel = sample(p0, p1, p2, p3, t);
        if last != Some(pixel) {
            sink.plot(pixel.x, pixel.y, color);
            last = Some(pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_pixels(
        p0: Point,
        p1: Point,
        p2: Point,
        p3: Point,
        segments: u32,
    ) -> Vec<Point> {
        let mut pixels = Vec::new();
        cubic_bezier_pixels(
            p0,
            p1,
            p2,
            p3,
            &mut |x: i32, y: i32, _c: Rgba| pixels.push(Point::new(x, y)),
            Rgba::BLACK,
            segments,
        );
        pixels
    }

    fn collect_segments(
        p0: Point,
        p1: Point,
        p2: Point,
        p3: Point,
        segments: u32,
    ) -> Vec<(Point, Point)> {
        let mut out = Vec::new();
        cubic_bezier(
            p0,
            p1,
            p2,
            p3,
            &mut |a: Point, b: Point, _c: Rgba| out.push((a, b)),
            Rgba::BLACK,
            segments,
        );
        out
    }

    #[test]
    fn test_sample_hits_exact_endpoints() {
        let (p0, p1, p2, p3) = (
            Point::new(-3, 7),
            Point::new(10, 40),
            Point::new(60, -20),
            Point::new(81, 13),
        );
        assert_eq!(sample(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(sample(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_straight_control_polygon_samples_the_segment() {
        // Control points on a straight line: B(t) stays on that line
        let pixels = collect_pixels(
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(20, 20),
            Point::new(30, 30),
            30,
        );
        for p in &pixels {
            assert_eq!(p.x, p.y);
        }
        assert_eq!(pixels.first(), Some(&Point::new(0, 0)));
        assert_eq!(pixels.last(), Some(&Point::new(30, 30)));
    }

    #[test]
    fn test_pixel_mode_suppresses_consecutive_duplicates() {
        let pixels = collect_pixels(
            Point::new(0, 0),
            Point::new(1, 1),
            Point::new(2, 1),
            Point::new(3, 0),
            200,
        );
        for pair in pixels.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_degenerate_curve_collapses_to_one_pixel() {
        let p = Point::new(4, -2);
        let pixels = collect_pixels(p, p, p, p, 50);
        assert_eq!(pixels, vec![p]);
    }

    #[test]
    fn test_degenerate_curve_at_minus_one_still_emits() {
        // The first sample is emitted unconditionally, even at (-1, -1)
        let p = Point::new(-1, -1);
        let pixels = collect_pixels(p, p, p, p, 50);
        assert_eq!(pixels, vec![p]);
    }

    #[test]
    fn test_degenerate_curve_draws_no_segments() {
        let p = Point::new(9, 9);
        let segments = collect_segments(p, p, p, p, 50);
        assert!(segments.is_empty());
    }

    #[test]
    fn test_polyline_mode_skips_zero_length_segments() {
        let segments = collect_segments(
            Point::new(0, 0),
            Point::new(5, 30),
            Point::new(25, -30),
            Point::new(30, 0),
            500,
        );
        for (a, b) in &segments {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_polyline_segments_are_contiguous() {
        let segments = collect_segments(
            Point::new(0, 0),
            Point::new(20, 60),
            Point::new(40, -60),
            Point::new(60, 0),
            50,
        );
        assert_eq!(segments.first().map(|s| s.0), Some(Point::new(0, 0)));
        assert_eq!(segments.last().map(|s| s.1), Some(Point::new(60, 0)));
        for pair in segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_non_positive_segment_count_clamps_to_one() {
        let pixels = collect_pixels(
            Point::new(0, 0),
            Point::new(0, 0),
            Point::new(10, 10),
            Point::new(10, 10),
            0,
        );
        // One segment: samples at t = 0 and t = 1 only
        assert_eq!(pixels, vec![Point::new(0, 0), Point::new(10, 10)]);
    }

    #[test]
    fn test_endpoint_exactness() {
        let (p0, p3) = (Point::new(-17, 3), Point::new(44, -29));
        let pixels = collect_pixels(p0, Point::new(0, 90), Point::new(12, -90), p3, 50);
        assert_eq!(pixels.first(), Some(&p0));
        assert_eq!(pixels.last(), Some(&p3));
    }

    #[test]
    fn test_emission_is_deterministic() {
        let args = (
            Point::new(0, 0),
            Point::new(13, 57),
            Point::new(42, -31),
            Point::new(77, 8),
        );
        let first = collect_pixels(args.0, args.1, args.2, args.3, DEFAULT_SEGMENTS);
        let second = collect_pixels(args.0, args.1, args.2, args.3, DEFAULT_SEGMENTS);
        assert_eq!(first, second);
    }
}
