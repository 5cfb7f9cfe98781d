//! Capture orchestrator.
//!
//! This module coordinates the capture state machine and side effects.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use fl_core::{
    capture::{CaptureAction, CaptureEvent, CaptureFailure, CaptureState, CaptureStateMachine},
    image::{AnalysisRequest, ImageOrigin, ImagePayload},
    ports::{Acquisition, AnalysisPort, CaptureEventPort, ImageSourcePort},
};

use crate::store::AnalysisStore;
use crate::usecases::capture::context::CaptureContext;

/// Errors produced by the capture orchestrator.
///
/// Classified capture failures are not errors here; they end up in
/// [`CaptureState::Error`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CaptureControllerError {
    #[error("a capture is already in progress (state: {state:?})")]
    Busy { state: CaptureState },
}

/// Orchestrator that drives capture state and side effects.
pub struct CaptureOrchestrator {
    context: Arc<CaptureContext>,
    image_source: Arc<dyn ImageSourcePort>,
    analysis: Arc<dyn AnalysisPort>,
    store: AnalysisStore,
    event_port: Arc<dyn CaptureEventPort>,
}

impl CaptureOrchestrator {
    pub fn new(
        image_source: Arc<dyn ImageSourcePort>,
        analysis: Arc<dyn AnalysisPort>,
        store: AnalysisStore,
        event_port: Arc<dyn CaptureEventPort>,
    ) -> Self {
        Self {
            context: CaptureContext::default().arc(),
            image_source,
            analysis,
            store,
            event_port,
        }
    }

    /// Capture or pick an image and run it through analysis.
    ///
    /// Returns the state reached once the sequence settles: `Idle` after a
    /// success or a cancellation, `Error` after a classified failure.
    /// After a success the store already holds the new result by the time
    /// `Idle` is observable.
    ///
    /// # Errors
    /// [`CaptureControllerError::Busy`] while another sequence is in flight.
    /// Neither the image source nor the analysis client is called then.
    pub async fn request_capture(
        &self,
        origin: ImageOrigin,
    ) -> Result<CaptureState, CaptureControllerError> {
        self.dispatch(CaptureEvent::CaptureRequested { origin }).await
    }

    /// "Try Again": leaves `Error` for `Idle` without capturing.
    ///
    /// A no-op in any other settled state.
    pub async fn retry(&self) -> Result<CaptureState, CaptureControllerError> {
        self.dispatch(CaptureEvent::RetryRequested).await
    }

    pub async fn state(&self) -> CaptureState {
        self.context.get_state().await
    }

    /// Read handle on the analysis slot this orchestrator publishes to.
    pub fn store(&self) -> &AnalysisStore {
        &self.store
    }

    async fn dispatch(&self, event: CaptureEvent) -> Result<CaptureState, CaptureControllerError> {
        // Not reentrant: a second request is rejected instead of queued.
        let Some(_dispatch_guard) = self.context.try_acquire_dispatch_lock() else {
            let state = self.context.get_state().await;
            warn!(event = event.name(), state = ?state, "capture request rejected, sequence in flight");
            return Err(CaptureControllerError::Busy { state });
        };

        let attempt_id = Uuid::new_v4();
        let span = info_span!(
            "usecase.capture_orchestrator.dispatch",
            attempt_id = %attempt_id,
            event = event.name()
        );
        async {
            let mut current = self.context.get_state().await;
            let mut pending_events = vec![event];

            while let Some(event) = pending_events.pop() {
                let from = current.clone();
                let event_name = event.name();
                let (next, actions) = CaptureStateMachine::transition(current, event);
                info!(from = ?from, to = ?next, event = event_name, "capture state transition");
                // Store writes land before the new state is visible.
                let (publish, actions): (Vec<_>, Vec<_>) = actions
                    .into_iter()
                    .partition(|action| matches!(action, CaptureAction::PublishResult { .. }));
                self.execute_actions(publish).await;
                if next != from {
                    self.set_state_and_emit(next.clone()).await;
                }
                let follow_up_events = self.execute_actions(actions).await;
                current = next;
                pending_events.extend(follow_up_events);
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<CaptureAction>) -> Vec<CaptureEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            match action {
                CaptureAction::AcquireImage { origin } => {
                    debug!(%origin, "capture executing AcquireImage");
                    follow_up_events.push(self.acquire_image(origin).await);
                }
                CaptureAction::SubmitAnalysis { payload } => {
                    debug!(
                        size_bytes = payload.len(),
                        encoding = ?payload.encoding(),
                        "capture executing SubmitAnalysis"
                    );
                    follow_up_events.push(self.submit_analysis(payload).await);
                }
                CaptureAction::PublishResult { result } => {
                    self.store.set(result).await;
                    debug!("capture action PublishResult completed");
                }
                CaptureAction::NavigateToResult => {
                    self.event_port.navigate_to_result().await;
                    debug!("capture action NavigateToResult completed");
                }
                CaptureAction::SignalFailure { kind } => {
                    self.event_port.emit_failure_feedback(kind).await;
                    debug!(?kind, "capture action SignalFailure completed");
                }
            }
        }

        follow_up_events
    }

    async fn acquire_image(&self, origin: ImageOrigin) -> CaptureEvent {
        match self.image_source.acquire(origin).await {
            Ok(Acquisition::Image(payload)) if payload.is_empty() => {
                warn!(%origin, "image source returned an empty image");
                CaptureEvent::AcquisitionFailed {
                    failure: CaptureFailure::DeviceError {
                        detail: "empty image".to_string(),
                    },
                }
            }
            Ok(Acquisition::Image(payload)) => {
                info!(%origin, locator = %payload.locator(), "image acquired");
                CaptureEvent::ImageAcquired { payload }
            }
            Ok(Acquisition::Cancelled) => {
                info!(%origin, "image acquisition cancelled");
                CaptureEvent::AcquisitionCancelled
            }
            Err(err) => {
                warn!(%origin, error = %err, "image acquisition failed");
                CaptureEvent::AcquisitionFailed {
                    failure: err.into(),
                }
            }
        }
    }

    async fn submit_analysis(&self, payload: ImagePayload) -> CaptureEvent {
        let request = AnalysisRequest::from(&payload);

        match self.analysis.analyze(request).await {
            Ok(result) if !result.is_recognizable() => {
                warn!("analysis returned a result without an identified food");
                CaptureEvent::AnalysisFailed {
                    failure: CaptureFailure::NotFood,
                }
            }
            Ok(result) => {
                info!(food = %result.identified_food, "analysis succeeded");
                CaptureEvent::AnalysisSucceeded {
                    result: result.with_image(payload.locator().clone()),
                }
            }
            Err(err) => {
                warn!(error = %err, "analysis failed");
                CaptureEvent::AnalysisFailed {
                    failure: err.into(),
                }
            }
        }
    }

    async fn set_state_and_emit(&self, state: CaptureState) {
        self.context.set_state(state.clone()).await;
        self.event_port.emit_capture_state_changed(state).await;
    }
}
