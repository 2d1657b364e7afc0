//! Partition clustering over 2D points.
//!
//! KMeans and KMedoids share one assign/update loop; they differ only in
//! how a cluster's representative is recomputed from its members.
//!
//! # Module Structure
//!
//! ```text
//! clustering/
//! ├── mod.rs        # Public API (this file)
//! ├── distance.rs   # Euclidean distance
//! ├── engine.rs     # Shared assign/update loop and entry points
//! ├── mean.rs       # Centroid update (KMeans)
//! ├── medoid.rs     # Medoid update (KMedoids)
//! ├── result.rs     # Result and iteration log types
//! └── strategy.rs   # UpdateStrategy trait
//! ```
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: A run reads its input slice and returns an owned result
//! 2. **Deterministic**: First-k seeding and lowest-index tie breaking, no randomness
//! 3. **Snapshots as Data**: Every iteration records independent before/after copies
//!
//! # Usage
//!
//! ```rust
//! use kcluster::clustering::{run_clustering, DEFAULT_MAX_ITERATIONS};
//! use kcluster::core::{Algorithm, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(11.0, 10.0),
//! ];
//!
//! let result = run_clustering(&points, 2, Algorithm::KMeans, DEFAULT_MAX_ITERATIONS).unwrap();
//! assert_eq!(result.assignments, vec![0, 0, 1, 1]);
//! assert!(result.is_converged());
//! ```

pub mod distance;
mod engine;
mod mean;
mod medoid;
mod result;
mod strategy;

pub use engine::{
    nearest_representative, run_clustering, run_with_seeds, ClusteringEngine,
    DEFAULT_MAX_ITERATIONS,
};
pub use mean::{centroid_of, MeanUpdate};
pub use medoid::{medoid_index, total_distance, MedoidUpdate};
pub use result::{ClusteringResult, IterationRecord};
pub use strategy::UpdateStrategy;
