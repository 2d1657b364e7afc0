//! Core domain types: points, algorithm selection, termination states and
//! the engine's error type.

pub mod errors;
pub mod point;
pub mod types;

pub use errors::{ClusteringError, Result};
pub use point::{points_from_pairs, Point};
pub use types::{Algorithm, Termination};
