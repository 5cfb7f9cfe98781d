//! Capture state machine.
//!
//! Defines a pure state transition function for the capture-to-result flow.

use crate::analysis::AnalysisResult;
use crate::capture::failure::{CaptureFailure, FailureKind};
use crate::image::{ImageOrigin, ImagePayload};

/// Capture flow state.
///
/// 采集流程状态。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CaptureState {
    /// Waiting for the user to capture or pick an image.
    ///
    /// 等待用户拍照或选图。
    Idle,
    /// An analysis request is in flight.
    ///
    /// 分析请求进行中。
    Analyzing,
    /// The last attempt failed. Left only by a retry or a new capture.
    ///
    /// 上次尝试失败。
    Error { message: String },
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl CaptureState {
    pub fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Events that drive the capture flow.
///
/// 驱动采集流程的事件。
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEvent {
    /// User asks for a new image.
    ///
    /// 用户请求采集图片。
    CaptureRequested { origin: ImageOrigin },
    /// Image source returned an image.
    ImageAcquired { payload: ImagePayload },
    /// User dismissed the picker or camera.
    AcquisitionCancelled,
    /// Image source failed.
    AcquisitionFailed { failure: CaptureFailure },
    /// Analysis returned a result (image locator already attached).
    AnalysisSucceeded { result: AnalysisResult },
    /// Analysis failed.
    AnalysisFailed { failure: CaptureFailure },
    /// User pressed "Try Again".
    ///
    /// 用户点击重试。
    RetryRequested,
}

impl CaptureEvent {
    /// Short name for logs. Payloads are left out on purpose.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CaptureRequested { .. } => "CaptureRequested",
            Self::ImageAcquired { .. } => "ImageAcquired",
            Self::AcquisitionCancelled => "AcquisitionCancelled",
            Self::AcquisitionFailed { .. } => "AcquisitionFailed",
            Self::AnalysisSucceeded { .. } => "AnalysisSucceeded",
            Self::AnalysisFailed { .. } => "AnalysisFailed",
            Self::RetryRequested => "RetryRequested",
        }
    }
}

/// Side-effects produced by state transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureAction {
    /// Invoke the image source.
    AcquireImage { origin: ImageOrigin },
    /// Build the request and invoke the analysis client.
    SubmitAnalysis { payload: ImagePayload },
    /// Overwrite the shared analysis slot.
    PublishResult { result: AnalysisResult },
    /// Tell the presentation layer to show the result view.
    NavigateToResult,
    /// Failure feedback (haptic/alert) for the presentation layer.
    SignalFailure { kind: FailureKind },
}

/// Pure capture state machine.
///
/// 纯状态机：不包含副作用。
pub struct CaptureStateMachine;

impl CaptureStateMachine {
    pub fn transition(state: CaptureState, event: CaptureEvent) -> (CaptureState, Vec<CaptureAction>) {
        match (state, event) {
            // A new attempt from Error clears the error before the source is invoked.
            (
                CaptureState::Idle | CaptureState::Error { .. },
                CaptureEvent::CaptureRequested { origin },
            ) => (
                CaptureState::Idle,
                vec![CaptureAction::AcquireImage { origin }],
            ),
            (CaptureState::Idle, CaptureEvent::AcquisitionCancelled) => {
                (CaptureState::Idle, Vec::new())
            }
            (CaptureState::Idle, CaptureEvent::AcquisitionFailed { failure }) => {
                Self::fail(failure)
            }
            (CaptureState::Idle, CaptureEvent::ImageAcquired { payload }) => (
                CaptureState::Analyzing,
                vec![CaptureAction::SubmitAnalysis { payload }],
            ),
            (CaptureState::Analyzing, CaptureEvent::AnalysisSucceeded { result }) => (
                CaptureState::Idle,
                vec![
                    CaptureAction::PublishResult { result },
                    CaptureAction::NavigateToResult,
                ],
            ),
            (CaptureState::Analyzing, CaptureEvent::AnalysisFailed { failure }) => {
                Self::fail(failure)
            }
            (CaptureState::Error { .. }, CaptureEvent::RetryRequested) => {
                (CaptureState::Idle, Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }

    fn fail(failure: CaptureFailure) -> (CaptureState, Vec<CaptureAction>) {
        (
            CaptureState::Error {
                message: failure.user_message(),
            },
            vec![CaptureAction::SignalFailure {
                kind: failure.kind(),
            }],
        )
    }
}
