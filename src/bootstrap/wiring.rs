//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create infra implementations (HTTP analysis client)
//! - ✅ Create platform implementations (camera command, photo library)
//! - ✅ Inject them into the capture orchestrator behind port traits
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//!
//! > **This is the only place allowed to depend on fl-infra + fl-platform + fl-app simultaneously.**
//! > **这是唯一允许同时依赖 fl-infra、fl-platform 和 fl-app 的地方。**

use std::sync::Arc;
use std::time::Duration;

use fl_app::{AnalysisStore, AppPaths, CaptureOrchestrator, ShowAnalysisResult};
use fl_core::app_dirs::AppDirs;
use fl_core::config::AppConfig;
use fl_core::ports::{AnalysisPort, CaptureEventPort, ImageSourcePort};
use fl_infra::HttpAnalysisClient;
use fl_platform::{CommandCameraSource, DeviceImageSource, LibraryImageSource, SelectionSlot};

use crate::adapters::TerminalCaptureEvents;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Analysis client initialization failed: {0}")]
    AnalysisClientInit(String),
}

/// Everything the shell needs after startup.
pub struct AppRuntime {
    pub orchestrator: Arc<CaptureOrchestrator>,
    pub show_result: ShowAnalysisResult,
    /// Path handed to the next library pick.
    pub selection: SelectionSlot,
}

/// Wire all dependencies for the terminal shell.
///
/// Captured photos are written under `<app_data_root>/captures`.
pub fn wire_dependencies(config: &AppConfig, app_dirs: &AppDirs) -> WiringResult<AppRuntime> {
    let store = AnalysisStore::new();

    let analysis: Arc<dyn AnalysisPort> = Arc::new(
        HttpAnalysisClient::new(
            config.analysis_endpoint.clone(),
            Duration::from_secs(config.analysis_timeout_secs),
        )
        .map_err(|e| WiringError::AnalysisClientInit(e.to_string()))?,
    );

    let selection = SelectionSlot::new();
    let image_source: Arc<dyn ImageSourcePort> = Arc::new(DeviceImageSource::new(
        CommandCameraSource::new(
            config.camera_command.clone(),
            AppPaths::from_app_dirs(app_dirs).captures_dir,
        ),
        LibraryImageSource::new(Arc::new(selection.clone())),
    ));

    let events: Arc<dyn CaptureEventPort> = Arc::new(TerminalCaptureEvents::new(
        std::io::stdout(),
        ShowAnalysisResult::new(store.clone()),
    ));

    let orchestrator = Arc::new(CaptureOrchestrator::new(
        image_source,
        analysis,
        store.clone(),
        events,
    ));

    tracing::info!(
        endpoint = %config.analysis_endpoint,
        timeout_secs = config.analysis_timeout_secs,
        camera_configured = !config.camera_command.trim().is_empty(),
        "dependencies wired"
    );

    Ok(AppRuntime {
        orchestrator,
        show_result: ShowAnalysisResult::new(store),
        selection,
    })
}
