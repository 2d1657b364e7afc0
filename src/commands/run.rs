//! `kcluster run`: load points, cluster them, write the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::clustering::run_clustering;
use crate::config::{load_config, load_config_file, KclusterConfig};
use crate::core::Algorithm;
use crate::io::{create_writer, load_points, ClusteringReport, InputSource, OutputFormat};
use crate::observability::{set_current_input, set_phase, RunPhase};

/// Values given on the command line; `None` defers to the config file.
#[derive(Debug, Clone, Default)]
pub struct RunArgs {
    pub input: Option<PathBuf>,
    pub demo: bool,
    pub clusters: Option<usize>,
    pub algorithm: Option<Algorithm>,
    pub max_iterations: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: InputSource,
    pub clusters: usize,
    pub algorithm: Algorithm,
    pub max_iterations: usize,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub precision: usize,
}

impl RunConfig {
    /// Merge CLI values over file values over defaults.
    pub fn resolve(args: RunArgs, file: &KclusterConfig) -> Result<Self> {
        let source = InputSource::from_args(args.input, args.demo)?;

        Ok(Self {
            source,
            clusters: args.clusters.unwrap_or_else(|| file.clusters()),
            algorithm: args.algorithm.unwrap_or_else(|| file.algorithm()),
            max_iterations: args.max_iterations.unwrap_or_else(|| file.max_iterations()),
            format: args.format.unwrap_or_else(|| file.output_format()),
            output: args.output,
            precision: file.precision(),
        })
    }
}

fn load_file_config(explicit: Option<&PathBuf>) -> Result<KclusterConfig> {
    let _phase = set_phase(RunPhase::ConfigLoading);
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config()),
    }
}

/// Execute the run command end to end.
pub fn handle_run(args: RunArgs) -> Result<()> {
    let file_config = load_file_config(args.config.as_ref())?;
    let config = RunConfig::resolve(args, &file_config)?;
    execute_run(&config)
}

/// Run with already resolved settings.
pub fn execute_run(config: &RunConfig) -> Result<()> {
    let source_name = config.source.display_name();
    let span = info_span!("run", source = %source_name);
    let _span = span.enter();

    let points = {
        let _phase = set_phase(RunPhase::InputLoading);
        let _input = set_current_input(source_name.clone());
        load_points(&config.source)?
    };

    let result = {
        let _phase = set_phase(RunPhase::Clustering);
        run_clustering(
            &points,
            config.clusters,
            config.algorithm,
            config.max_iterations,
        )
        .with_context(|| {
            format!(
                "Cannot run {} on {} point(s) from {}",
                config.algorithm.display_name(),
                points.len(),
                source_name
            )
        })?
    };

    info!(
        iterations = result.iterations(),
        termination = %result.termination,
        "Writing report"
    );

    let _phase = set_phase(RunPhase::OutputGeneration);
    let report = ClusteringReport::new(
        source_name,
        config.algorithm,
        config.max_iterations,
        points,
        result,
    );
    let mut writer = create_writer(config.format, config.output.as_deref(), config.precision)?;
    writer.write_report(&report)?;

    Ok(())
}
