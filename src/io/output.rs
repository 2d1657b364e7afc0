use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::writers::{JsonWriter, MarkdownWriter, TerminalWriter};
use crate::clustering::ClusteringResult;
use crate::config::MAX_PRECISION;
use crate::core::{Algorithm, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &ClusteringReport) -> anyhow::Result<()>;
}

/// Run parameters and provenance recorded alongside a result.
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub kcluster_version: String,
    pub generated_at: DateTime<Utc>,
    /// Point file, `<stdin>` or `<demo>`
    pub source: String,
    pub algorithm: Algorithm,
    pub clusters: usize,
    pub max_iterations: usize,
    pub inertia: f64,
}

/// Everything a writer needs to render one run.
#[derive(Debug, Clone, Serialize)]
pub struct ClusteringReport {
    pub metadata: ReportMetadata,
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub result: ClusteringResult,
}

impl ClusteringReport {
    pub fn new(
        source: impl Into<String>,
        algorithm: Algorithm,
        max_iterations: usize,
        points: Vec<Point>,
        result: ClusteringResult,
    ) -> Self {
        let metadata = ReportMetadata {
            kcluster_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            source: source.into(),
            algorithm,
            clusters: result.cluster_count(),
            max_iterations,
            inertia: result.inertia(&points),
        };
        Self {
            metadata,
            points,
            result,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.metadata.algorithm
    }
}

/// Select a writer for `format`, writing to `destination` or stdout.
/// `precision` is capped at [`MAX_PRECISION`].
pub fn create_writer(
    format: OutputFormat,
    destination: Option<&Path>,
    precision: usize,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match destination {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout()),
    };
    let precision = precision.min(MAX_PRECISION);

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(sink, precision)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(sink, precision)),
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::sample_report;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_metadata() {
        let report = sample_report(Algorithm::KMeans);
        assert_eq!(report.metadata.clusters, 2);
        assert_eq!(report.metadata.source, "<test>");
        assert!((report.metadata.inertia - 8.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_format_deserializes_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }

    #[test]
    fn test_create_writer_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.json");
        {
            let mut writer = create_writer(OutputFormat::Json, Some(&path), 2).unwrap();
            writer.write_report(&sample_report(Algorithm::KMedoids)).unwrap();
        }
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"kmedoids\""));
    }

    #[test]
    fn test_create_writer_fails_for_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("report.json");
        assert!(create_writer(OutputFormat::Json, Some(&path), 2).is_err());
    }

    #[test]
    fn test_create_writer_caps_precision() {
        let temp = TempDir::new().unwrap();
        let zero = format!("[0.{0}, 0.{0}]", "0".repeat(MAX_PRECISION));

        for format in [OutputFormat::Terminal, OutputFormat::Markdown] {
            let path = temp.path().join("report.txt");
            {
                let mut writer = create_writer(format, Some(&path), 70_000).unwrap();
                writer.write_report(&sample_report(Algorithm::KMedoids)).unwrap();
            }
            let written = std::fs::read_to_string(&path).unwrap();
            assert!(written.contains(&zero), "{:?}: {}", format, written);
        }
    }
}
