use skirmish_core::Point;

/// Chebyshev (L∞) distance between two points, the ring radius metric.
///
/// Unsigned so the distance between any two `i32` positions fits.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> u32 {
    let (dx, dy) = a.abs_diff(b);
    dx.max(dy)
}
