//! Centroid update for KMeans.

use super::strategy::UpdateStrategy;
use crate::core::{Algorithm, Point};

/// Moves each representative to the arithmetic mean of its members.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanUpdate;

impl UpdateStrategy for MeanUpdate {
    const ALGORITHM: Algorithm = Algorithm::KMeans;

    fn recompute(&self, members: &[Point]) -> Point {
        centroid_of(members)
    }
}

/// Coordinate-wise mean, summed in input order.
pub fn centroid_of(members: &[Point]) -> Point {
    let count = members.len() as f64;
    let sum_x: f64 = members.iter().map(|p| p.x).sum();
    let sum_y: f64 = members.iter().map(|p| p.y).sum();
    Point::new(sum_x / count, sum_y / count)
}
