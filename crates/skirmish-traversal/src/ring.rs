//! Square rings around a center, walked clockwise.

use skirmish_core::Point;

/// The `8 * radius` tiles at Chebyshev distance `radius` from `center`.
///
/// Starts on the ring's top-left corner and walks clockwise: top edge left to
/// right, right edge top to bottom, bottom edge right to left, left edge
/// bottom to top. Each edge stops one tile short of the next corner, so every
/// corner appears once. A non-positive `radius` yields nothing.
///
/// Corners are clamped to the `i32` range, so a ring that crosses it is cut
/// short instead of wrapping around.
pub fn ring(center: Point, radius: i32) -> impl Iterator<Item = Point> + Clone {
    let Point { x: cx, y: cy } = center;
    let (left, right, top, bottom) = if radius > 0 {
        (
            cx.saturating_sub(radius),
            cx.saturating_add(radius),
            cy.saturating_sub(radius),
            cy.saturating_add(radius),
        )
    } else {
        (0, 0, 0, 0)
    };
    // With a positive radius `left` and `top` stay below `i32::MAX`, so `+ 1` fits.
    let top_edge = (left..right).map(move |x| Point::new(x, top));
    let right_edge = (top..bottom).map(move |y| Point::new(right, y));
    let bottom_edge = (left + 1..=right)
        .rev()
        .map(move |x| Point::new(x, bottom));
    let left_edge = (top + 1..=bottom)
        .rev()
        .map(move |y| Point::new(left, y));
    top_edge.chain(right_edge).chain(bottom_edge).chain(left_edge)
}

/// Every ring from radius 1 up to `max_radius` inclusive, smaller first.
pub fn rings(center: Point, max_radius: i32) -> impl Iterator<Item = Point> + Clone {
    (1..=max_radius).flat_map(move |r| ring(center, r))
}
