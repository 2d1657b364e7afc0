use crate::core::Point;

/// Euclidean distance between two points.
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    euclidean_squared(a, b).sqrt()
}

/// Squared Euclidean distance; used for inertia where the root is not needed.
#[inline]
pub fn euclidean_squared(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
