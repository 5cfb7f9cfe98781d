use std::path::PathBuf;

use fl_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
    /// Camera captures; library picks are read in place.
    pub captures_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join("config.toml"),
            logs_dir: dirs.app_data_root.join("logs"),
            captures_dir: dirs.app_data_root.join("captures"),
        }
    }
}
