//! Shared error types for the application

use thiserror::Error;

/// Precondition failures reported by the clustering engine.
///
/// These are raised before any iteration runs; no partial result exists
/// when one is returned. Empty clusters, distance ties and budget
/// exhaustion are normal outcomes, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusteringError {
    /// No points were supplied
    #[error("Cannot cluster an empty point set")]
    EmptyInput,

    /// Cluster count outside `1..=points`
    #[error("Invalid cluster count {k}: must be between 1 and {points}")]
    InvalidClusterCount { k: usize, points: usize },

    /// Iteration budget of zero
    #[error("Invalid iteration budget: max_iterations must be at least 1")]
    InvalidIterationBudget,

    /// A coordinate is NaN or infinite
    #[error("Point {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    /// A caller-supplied seed representative is NaN or infinite
    #[error("Seed {index} has a non-finite coordinate")]
    NonFiniteSeed { index: usize },
}

impl ClusteringError {
    /// Create a cluster count error for `k` against `points` inputs.
    pub fn invalid_cluster_count(k: usize, points: usize) -> Self {
        Self::InvalidClusterCount { k, points }
    }

    /// Whether the caller can fix the error by changing its arguments
    /// rather than its data.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidClusterCount { .. }
                | Self::InvalidIterationBudget
                | Self::NonFiniteSeed { .. }
        )
    }
}

/// Result type alias using the clustering error type
pub type Result<T> = std::result::Result<T, ClusteringError>;
