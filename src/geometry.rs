//! Geometric primitives for rasterization.
//!
//! Provides the integer point type used for control coordinates and
//! emitted pixel coordinates.

/// A 2D point with integer coordinates.
///
/// Used both for shape control points and for emitted pixels, so equality
/// is structural and the type is hashable (pixel sets in tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Chebyshev (chessboard) distance to another point.
    ///
    /// Consecutive pixels of an 8-connected rasterized segment are at
    /// Chebyshev distance exactly 1.
    #[must_use]
    pub const fn chebyshev_distance(self, other: Self) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }

    /// Midpoint between two points, rounded toward negative infinity.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new(
            (self.x + other.x).div_euclid(2),
            (self.y + other.y).div_euclid(2),
        )
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
