//! Business logic use cases
//!
//! ```text
//! [ImageSource] ──► CaptureOrchestrator ──► [AnalysisPort]
//!                          │
//!                          ▼
//!                    AnalysisStore ──► ShowAnalysisResult → result view
//! ```

pub mod capture;
pub mod show_result;

pub use capture::{CaptureControllerError, CaptureOrchestrator};
pub use show_result::{AnalysisResultView, ResultRow, ShowAnalysisResult};
