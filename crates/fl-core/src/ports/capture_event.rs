use crate::capture::{CaptureState, FailureKind};

/// Signals from the capture flow to the presentation layer.
#[async_trait::async_trait]
pub trait CaptureEventPort: Send + Sync {
    async fn emit_capture_state_changed(&self, state: CaptureState);

    /// Haptic/alert feedback after a classified failure.
    async fn emit_failure_feedback(&self, kind: FailureKind);

    /// Show the result view. Emitted only after the analysis store was written.
    async fn navigate_to_result(&self);
}
