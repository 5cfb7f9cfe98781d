//! FoodLens Application Orchestration Layer
//!
//! This crate contains the capture use cases and the shared analysis store.

pub mod app_paths;
pub mod store;
pub mod usecases;

pub use app_paths::AppPaths;
pub use store::AnalysisStore;
pub use usecases::{
    AnalysisResultView, CaptureControllerError, CaptureOrchestrator, ResultRow, ShowAnalysisResult,
};
