use serde::{Deserialize, Serialize};

use crate::clustering::DEFAULT_MAX_ITERATIONS;
use crate::core::Algorithm;
use crate::io::output::OutputFormat;

/// Cluster count used when neither the CLI nor the config file sets one.
pub const DEFAULT_CLUSTERS: usize = 3;

/// Decimal places used for coordinates in human-readable reports.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest accepted `output.precision`. Beyond this an `f64` has no more
/// significant digits to show.
pub const MAX_PRECISION: usize = 17;

/// Root configuration structure, read from `.kcluster.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KclusterConfig {
    /// Clustering defaults
    #[serde(default)]
    pub clustering: Option<ClusteringConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClusteringConfig {
    #[serde(default)]
    pub algorithm: Option<Algorithm>,

    /// Number of clusters (k)
    #[serde(default)]
    pub clusters: Option<usize>,

    #[serde(default)]
    pub max_iterations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Decimal places for terminal and markdown coordinates
    #[serde(default)]
    pub precision: Option<usize>,
}

impl KclusterConfig {
    pub fn algorithm(&self) -> Algorithm {
        self.clustering
            .as_ref()
            .and_then(|c| c.algorithm)
            .unwrap_or_default()
    }

    pub fn clusters(&self) -> usize {
        self.clustering
            .as_ref()
            .and_then(|c| c.clusters)
            .unwrap_or(DEFAULT_CLUSTERS)
    }

    pub fn max_iterations(&self) -> usize {
        self.clustering
            .as_ref()
            .and_then(|c| c.max_iterations)
            .unwrap_or(DEFAULT_MAX_ITERATIONS)
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or(OutputFormat::Terminal)
    }

    pub fn precision(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.precision)
            .unwrap_or(DEFAULT_PRECISION)
    }
}
