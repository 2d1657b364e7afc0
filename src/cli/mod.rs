//! CLI module for kcluster
//!
//! This module provides the command-line interface for kcluster, including:
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::{parse_args, AlgorithmArg, Cli, Commands, OutputFormat};
pub use setup::{apply_color_mode, init_runtime, should_disable_color};
