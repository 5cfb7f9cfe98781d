//! Tracing configuration for FoodLens
//!
//! ## Architecture / 架构
//!
//! - **File**: daily rolling log under the configured log directory, always on
//! - **Stderr**: only with `--verbose`, so stdout stays free for results
//! - **Filter**: `RUST_LOG` wins; otherwise debug in dev builds, info in release

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "food-lens.log";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug for the workspace crates
/// - **Production**: info for the workspace crates
/// - HTTP stack is kept at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    let mut directives = vec![level.to_string()];
    directives.extend(
        ["fl_core", "fl_app", "fl_infra", "fl_platform", "food_lens"]
            .iter()
            .map(|krate| format!("{krate}={level}")),
    );
    directives.extend(["hyper=warn", "reqwest=warn", "rustls=warn"].map(String::from));
    directives
}

/// Initialize the tracing subscriber
///
/// Call once in `main` after the configuration is resolved.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
/// A log directory that cannot be created only disables file logging.
pub fn init_tracing_subscriber(log_dir: &Path, verbose: bool) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = match build_file_writer(log_dir) {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging: {err}");
            None
        }
    };

    // "2026-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new("%H:%M:%S%.3f".to_string()))
            .with_target(true)
            .with_ansi(cfg!(not(test)))
            .with_writer(io::stderr)
    });

    registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
