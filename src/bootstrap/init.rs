//! Bootstrap initialization functions
//!
//! Fills the gaps a loaded config leaves, after loading and before wiring.

use fl_core::app_dirs::AppDirs;
use fl_core::config::AppConfig;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
}

/// Resolve the effective configuration.
///
/// # Behavior
///
/// - Without a config file, every field takes its system default
/// - Empty endpoint, zero timeout and empty log directory take the
///   system default individually
/// - An empty camera command stays empty (no camera configured)
/// - `overrides` win over both
pub fn resolve_config(
    loaded: Option<AppConfig>,
    app_dirs: &AppDirs,
    overrides: &ConfigOverrides,
) -> AppConfig {
    let defaults = AppConfig::with_system_defaults(app_dirs.app_data_root.clone());
    let mut config = loaded.unwrap_or_else(|| defaults.clone());

    if config.analysis_endpoint.trim().is_empty() {
        config.analysis_endpoint = defaults.analysis_endpoint.clone();
    }
    if config.analysis_timeout_secs == 0 {
        tracing::debug!(
            timeout_secs = defaults.analysis_timeout_secs,
            "Using default analysis timeout"
        );
        config.analysis_timeout_secs = defaults.analysis_timeout_secs;
    }
    if config.log_dir.as_os_str().is_empty() {
        config.log_dir = defaults.log_dir;
    }
    if let Some(endpoint) = overrides.endpoint.as_ref().filter(|e| !e.trim().is_empty()) {
        config.analysis_endpoint = endpoint.clone();
    }

    config
}
