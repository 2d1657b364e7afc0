pub mod input;
pub mod output;
pub mod writers;

pub use input::{load_points, parse_points, InputError, InputFormat, InputSource, DEMO_POINTS};
pub use output::{create_writer, ClusteringReport, OutputFormat, OutputWriter, ReportMetadata};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
