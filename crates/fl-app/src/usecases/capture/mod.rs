//! Capture-to-result flow.

mod context;
mod orchestrator;

pub use orchestrator::{CaptureControllerError, CaptureOrchestrator};
