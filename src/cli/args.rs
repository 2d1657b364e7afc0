use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::Algorithm;
use crate::io::output;

#[derive(Parser, Debug)]
#[command(name = "kcluster")]
#[command(about = "Traceable KMeans and KMedoids clustering for 2D points", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cluster a point set and report assignments and the iteration log
    Run {
        /// Point file (.json or .toml), or '-' to read JSON from stdin
        input: Option<PathBuf>,

        /// Use the built-in demo point set instead of an input file
        #[arg(long, conflicts_with = "input")]
        demo: bool,

        /// Number of clusters
        #[arg(short = 'k', long = "clusters")]
        clusters: Option<usize>,

        /// Representative update rule
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        /// Maximum number of assign/update iterations
        #[arg(long = "max-iterations", env = "KCLUSTER_MAX_ITERATIONS")]
        max_iterations: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (skips .kcluster.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum AlgorithmArg {
    /// Centroid update (mean of assigned points)
    #[value(alias = "mean")]
    Kmeans,
    /// Medoid update (member with minimal total distance)
    #[value(alias = "medoid")]
    Kmedoids,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Kmeans => Algorithm::KMeans,
            AlgorithmArg::Kmedoids => Algorithm::KMedoids,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Markdown => output::OutputFormat::Markdown,
            OutputFormat::Terminal => output::OutputFormat::Terminal,
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
