use std::path::PathBuf;

use fl_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "food-lens";
const PROFILE_ENV: &str = "FOOD_LENS_PROFILE";

/// Resolves the FoodLens data root under the user's local data directory.
///
/// A non-empty `FOOD_LENS_PROFILE` gives the profile its own root
/// (`food-lens-<profile>`), so captures, logs and config never mix.
pub struct DirsAppDirsAdapter {
    base: Option<PathBuf>,
    profile: Option<String>,
}

impl DirsAppDirsAdapter {
    /// System data-local directory, profile read from the environment.
    pub fn new() -> Self {
        Self {
            base: dirs::data_local_dir(),
            profile: std::env::var(PROFILE_ENV).ok(),
        }
    }

    /// Fixed base directory and profile; nothing is read from the system.
    pub fn at(base: impl Into<PathBuf>, profile: Option<&str>) -> Self {
        Self {
            base: Some(base.into()),
            profile: profile.map(str::to_string),
        }
    }

    fn dir_name(&self) -> String {
        match self.profile.as_deref().map(str::trim) {
            Some(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
            _ => APP_DIR_NAME.to_string(),
        }
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base = self
            .base
            .as_ref()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base.join(self.dir_name()),
        })
    }
}
