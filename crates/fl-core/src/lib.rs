//! # fl-core
//!
//! Core domain models and business logic for FoodLens.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod analysis;
pub mod app_dirs;
pub mod capture;
pub mod config;
pub mod image;
pub mod ports;

// Re-export commonly used types at the crate root
pub use analysis::{AnalysisResult, NutritionFacts};
pub use capture::{CaptureFailure, CaptureState, FailureKind};
pub use config::AppConfig;
pub use image::{AnalysisRequest, ContentLocator, ImageEncoding, ImageOrigin, ImagePayload};
