//! Clustering output: assignments, representatives and the iteration log.

use serde::{Deserialize, Serialize};

use super::distance::euclidean_squared;
use crate::core::{Algorithm, Point, Termination};

/// Representatives before and after one iteration's update step.
///
/// On the converging iteration no update runs and `initial == updated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Zero-based iteration index
    pub iteration: usize,
    pub algorithm: Algorithm,
    /// Snapshot taken before the assignment pass
    pub initial: Vec<Point>,
    /// Snapshot taken after the update pass
    pub updated: Vec<Point>,
}

impl IterationRecord {
    /// Whether no representative moved during this iteration.
    pub fn is_stable(&self) -> bool {
        self.initial == self.updated
    }

    /// Indices of representatives whose value changed.
    pub fn moved_representatives(&self) -> Vec<usize> {
        self.initial
            .iter()
            .zip(&self.updated)
            .enumerate()
            .filter(|(_, (before, after))| before != after)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Result of a completed clustering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult {
    /// Representative index for every input point, in input order
    pub assignments: Vec<usize>,
    /// Final centroids or medoids, in representative index order
    pub representatives: Vec<Point>,
    pub termination: Termination,
    /// One record per executed iteration, ordered by iteration index
    pub log: Vec<IterationRecord>,
}

impl ClusteringResult {
    /// Number of iterations executed (including the converging one).
    pub fn iterations(&self) -> usize {
        self.log.len()
    }

    pub fn is_converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    pub fn cluster_count(&self) -> usize {
        self.representatives.len()
    }

    pub fn final_record(&self) -> Option<&IterationRecord> {
        self.log.last()
    }

    /// Algorithm that produced this result, read from the log.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.log.first().map(|record| record.algorithm)
    }

    /// Point indices grouped by representative.
    ///
    /// Assignments that name no representative (possible in a hand-edited or
    /// deserialized result) are left out.
    pub fn clusters(&self) -> Vec<Vec<usize>> {
        let mut clusters = vec![Vec::new(); self.representatives.len()];
        for (point_index, &cluster) in self.assignments.iter().enumerate() {
            if let Some(members) = clusters.get_mut(cluster) {
                members.push(point_index);
            }
        }
        clusters
    }

    pub fn cluster_sizes(&self) -> Vec<usize> {
        self.clusters().iter().map(Vec::len).collect()
    }

    /// Sum of squared distances from each point to its assigned representative.
    /// Points with an out-of-range assignment contribute nothing.
    pub fn inertia(&self, points: &[Point]) -> f64 {
        points
            .iter()
            .zip(&self.assignments)
            .filter_map(|(point, &cluster)| {
                self.representatives
                    .get(cluster)
                    .map(|representative| euclidean_squared(point, representative))
            })
            .sum()
    }
}
