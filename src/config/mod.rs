//! Configuration loading for kcluster.
//!
//! Settings come from `.kcluster.toml`, discovered in the working directory
//! or up to nine of its ancestors. Every field is optional; CLI flags take
//! precedence over file values, which take precedence over built-in
//! defaults.

pub mod core;
pub mod loader;

pub use self::core::{
    ClusteringConfig, KclusterConfig, OutputConfig, DEFAULT_CLUSTERS, DEFAULT_PRECISION,
    MAX_PRECISION,
};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
