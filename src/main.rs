use std::process::ExitCode;

use clap::Parser;
use fl_app::AppPaths;
use fl_core::ports::AppDirsPort;
use fl_platform::DirsAppDirsAdapter;

mod adapters;
mod bootstrap;
mod cli;
mod presenter;
mod shell;

use bootstrap::{load_config, resolve_config, wire_dependencies, ConfigOverrides};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    // An explicit --config must exist; the default location is optional.
    let loaded = match &cli.config {
        Some(path) => Some(load_config(path)?),
        None if paths.config_path.exists() => Some(load_config(&paths.config_path)?),
        None => None,
    };
    let config = resolve_config(
        loaded,
        &app_dirs,
        &ConfigOverrides {
            endpoint: cli.endpoint.clone(),
        },
    );

    bootstrap::tracing::init_tracing_subscriber(&config.log_dir, cli.verbose)?;
    tracing::info!(
        data_root = %app_dirs.app_data_root.display(),
        "food-lens starting"
    );

    let runtime = wire_dependencies(&config, &app_dirs)?;

    match cli.command {
        Commands::Analyze { image } => shell::analyze_once(&runtime, image).await,
        Commands::Interactive => shell::run_interactive(&runtime).await,
    }
}
