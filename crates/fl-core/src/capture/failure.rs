use serde::{Deserialize, Serialize};

pub const PERMISSION_DENIED_MESSAGE: &str =
    "Camera access was denied. Please allow camera access and try again.";
pub const DEVICE_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Failed to analyze the image. Please try again.";
pub const SERVICE_FAILURE_MESSAGE: &str = "Analysis failed";
pub const NOT_FOOD_MESSAGE: &str = "This doesn't look like food. Please try with a food image.";

/// Classified failure of a capture-to-analysis sequence.
///
/// Cancelling an acquisition is not a failure and has no variant here.
///
/// 采集/分析流程的失败分类。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureFailure {
    /// Camera capability unavailable.
    PermissionDenied,
    /// Acquisition hardware/software failure.
    DeviceError { detail: String },
    /// Network failure or timeout while talking to the analysis endpoint.
    TransportFailure,
    /// Non-success response from the analysis endpoint.
    ServiceFailure { message: Option<String> },
    /// Success response without a recognizable food analysis.
    NotFood,
}

/// Kind of a [`CaptureFailure`], without payload. Used for feedback signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    PermissionDenied,
    DeviceError,
    TransportFailure,
    ServiceFailure,
    NotFood,
}

impl CaptureFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::PermissionDenied => FailureKind::PermissionDenied,
            Self::DeviceError { .. } => FailureKind::DeviceError,
            Self::TransportFailure => FailureKind::TransportFailure,
            Self::ServiceFailure { .. } => FailureKind::ServiceFailure,
            Self::NotFood => FailureKind::NotFood,
        }
    }

    /// Deterministic, human-readable message for the error presentation.
    pub fn user_message(&self) -> String {
        match self {
            Self::PermissionDenied => PERMISSION_DENIED_MESSAGE.to_string(),
            Self::DeviceError { .. } => DEVICE_ERROR_MESSAGE.to_string(),
            Self::TransportFailure => TRANSPORT_FAILURE_MESSAGE.to_string(),
            Self::ServiceFailure { message } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .unwrap_or(SERVICE_FAILURE_MESSAGE)
                .to_string(),
            Self::NotFood => NOT_FOOD_MESSAGE.to_string(),
        }
    }
}
