use std::sync::Arc;

use fl_core::capture::CaptureState;
use tokio::sync::{Mutex, MutexGuard};

/// Shared capture context containing state and dispatch lock.
///
/// ## Lock Ordering
/// When acquiring both locks, acquire `dispatch_lock` first, then `state`.
/// - `dispatch_lock`: held for a whole capture-to-analysis sequence. Never
///   awaited by new capture requests; they use `try_acquire_dispatch_lock`
///   and are rejected when it is taken.
/// - `state`: used for both reading (`get_state`) and writing (during dispatch).
#[derive(Clone)]
pub struct CaptureContext {
    /// Current capture state.
    state: Arc<Mutex<CaptureState>>,
    /// Serializes dispatch so at most one sequence is in flight.
    dispatch_lock: Arc<Mutex<()>>,
}

impl CaptureContext {
    /// Creates a new CaptureContext with the given initial state.
    pub fn new(initial_state: CaptureState) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial_state)),
            dispatch_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the context wrapped in Arc for shared ownership.
    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns a clone of the current state.
    pub async fn get_state(&self) -> CaptureState {
        self.state.lock().await.clone()
    }

    /// Takes the dispatch lock only if nothing is in flight.
    pub fn try_acquire_dispatch_lock(&self) -> Option<MutexGuard<'_, ()>> {
        self.dispatch_lock.try_lock().ok()
    }

    /// Updates the state to the given value.
    ///
    /// This should only be called after acquiring `dispatch_lock`.
    pub async fn set_state(&self, state: CaptureState) {
        let mut guard = self.state.lock().await;
        *guard = state;
    }
}

impl Default for CaptureContext {
    fn default() -> Self {
        Self::new(CaptureState::Idle)
    }
}
