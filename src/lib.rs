// Export modules for library usage
pub mod cli;
pub mod clustering;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;

// Re-export commonly used types
pub use crate::core::{Algorithm, ClusteringError, Point, Termination};

pub use crate::clustering::{
    run_clustering, run_with_seeds, ClusteringEngine, ClusteringResult, IterationRecord,
    MeanUpdate, MedoidUpdate, UpdateStrategy, DEFAULT_MAX_ITERATIONS,
};

pub use crate::io::output::{create_writer, ClusteringReport, OutputFormat, OutputWriter};
