//! Medoid update for KMedoids.
//!
//! Exhaustive search over the cluster's members: O(m²) distance
//! evaluations for a cluster of m points.

use super::distance::euclidean;
use super::strategy::UpdateStrategy;
use crate::core::{Algorithm, Point};

/// Moves each representative to the member with minimal total distance to
/// the other members.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedoidUpdate;

impl UpdateStrategy for MedoidUpdate {
    const ALGORITHM: Algorithm = Algorithm::KMedoids;

    fn recompute(&self, members: &[Point]) -> Point {
        members[medoid_index(members)]
    }
}

/// Sum of distances from `candidate` to every member (itself included).
pub fn total_distance(candidate: &Point, members: &[Point]) -> f64 {
    members.iter().map(|p| euclidean(p, candidate)).sum()
}

/// Index of the first member with strictly minimal total distance.
///
/// `members` must be non-empty.
pub fn medoid_index(members: &[Point]) -> usize {
    let mut best_index = 0;
    let mut best_cost = f64::INFINITY;

    for (index, candidate) in members.iter().enumerate() {
        let cost = total_distance(candidate, members);
        if cost < best_cost {
            best_cost = cost;
            best_index = index;
        }
    }

    best_index
}
