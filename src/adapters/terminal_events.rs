//! Terminal presentation of capture events.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;
use fl_app::ShowAnalysisResult;
use fl_core::ports::CaptureEventPort;
use fl_core::{CaptureState, FailureKind};

use crate::presenter::render_result;

const BELL: &str = "\x07";

/// [`CaptureEventPort`] that writes to a terminal.
///
/// - `Analyzing` prints a progress line, `Error` prints the message
/// - failure feedback rings the terminal bell
/// - navigation renders the stored result
pub struct TerminalCaptureEvents<W: Write + Send> {
    out: Mutex<W>,
    show_result: ShowAnalysisResult,
}

impl<W: Write + Send> TerminalCaptureEvents<W> {
    pub fn new(out: W, show_result: ShowAnalysisResult) -> Self {
        Self {
            out: Mutex::new(out),
            show_result,
        }
    }

    fn write(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> CaptureEventPort for TerminalCaptureEvents<W> {
    async fn emit_capture_state_changed(&self, state: CaptureState) {
        match state {
            CaptureState::Analyzing => self.write("Analyzing...\n"),
            CaptureState::Error { message } => self.write(&format!("Error: {message}\n")),
            CaptureState::Idle => {}
        }
    }

    async fn emit_failure_feedback(&self, kind: FailureKind) {
        tracing::debug!(?kind, "failure feedback");
        self.write(BELL);
    }

    async fn navigate_to_result(&self) {
        match self.show_result.execute().await {
            Some(view) => self.write(&render_result(&view)),
            None => tracing::warn!("navigation requested without a stored result"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_app::AnalysisStore;

    fn events() -> TerminalCaptureEvents<Vec<u8>> {
        TerminalCaptureEvents::new(Vec::new(), ShowAnalysisResult::new(AnalysisStore::new()))
    }

    fn output(events: TerminalCaptureEvents<Vec<u8>>) -> String {
        String::from_utf8(events.into_inner()).unwrap()
    }

    #[tokio::test]
    async fn error_state_prints_message() {
        let events = events();
        events
            .emit_capture_state_changed(CaptureState::Error {
                message: "Image too dark".to_string(),
            })
            .await;
        assert_eq!(output(events), "Error: Image too dark\n");
    }

    #[tokio::test]
    async fn failure_feedback_rings_bell() {
        let events = events();
        events
            .emit_failure_feedback(FailureKind::TransportFailure)
            .await;
        assert_eq!(output(events), BELL);
    }

    #[tokio::test]
    async fn navigation_without_result_prints_nothing() {
        let events = events();
        events.navigate_to_result().await;
        assert!(output(events).is_empty());
    }
}
