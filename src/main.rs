use anyhow::Result;
use kcluster::cli::{apply_color_mode, init_runtime, Commands};
use kcluster::commands::RunArgs;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = kcluster::cli::parse_args();

    match cli.command {
        command @ Commands::Run { .. } => handle_run_command(command),
        Commands::Init { force } => {
            init_runtime(0);
            kcluster::commands::init_config(force)
        }
    }
}

// Translate parsed arguments into run settings; all logic lives in the library
fn handle_run_command(command: Commands) -> Result<()> {
    if let Commands::Run {
        input,
        demo,
        clusters,
        algorithm,
        max_iterations,
        format,
        output,
        config,
        plain,
        verbosity,
    } = command
    {
        init_runtime(verbosity);
        apply_color_mode(plain, output.is_some());

        kcluster::commands::handle_run(RunArgs {
            input,
            demo,
            clusters,
            algorithm: algorithm.map(Into::into),
            max_iterations,
            format: format.map(Into::into),
            output,
            config,
        })
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}
