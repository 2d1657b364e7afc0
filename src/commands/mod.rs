//! CLI command implementations.
//!
//! Available commands:
//! - **run**: Cluster a point set and write the report
//! - **init**: Initialize a new `.kcluster.toml` configuration file

pub mod init;
pub mod run;

pub use init::init_config;
pub use run::{execute_run, handle_run, RunArgs, RunConfig};
