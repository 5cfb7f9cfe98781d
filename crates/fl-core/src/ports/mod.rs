//! Port interfaces for the application layer
//!
//! Ports define the contract between the capture flow (use cases) and
//! infrastructure implementations. The core stays independent of HTTP,
//! cameras and file pickers.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `fl-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `fl-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod analysis;
pub mod app_dirs;
mod capture_event;
pub mod errors;
pub mod image_source;

pub use analysis::AnalysisPort;
pub use app_dirs::AppDirsPort;
pub use capture_event::CaptureEventPort;
pub use errors::{AnalysisError, AppDirsError, ImageSourceError};
pub use image_source::{Acquisition, ImageSourcePort};
