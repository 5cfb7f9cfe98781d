//! Single-slot shared analysis state.
//!
//! The store is the only handoff between the capture flow and the result
//! view. It is injected into both; nothing global.

use std::sync::Arc;

use fl_core::AnalysisResult;
use tokio::sync::RwLock;

/// Holder of the most recent analysis result.
///
/// ## Lifecycle / 生命周期
/// - Empty at start.
/// - Overwritten (never merged) once per successful analysis.
/// - Never cleared automatically: reopening the result view without a new
///   analysis shows the previous result.
///
/// Only the capture orchestrator writes; `set` is crate-private.
#[derive(Clone, Default)]
pub struct AnalysisStore {
    slot: Arc<RwLock<Option<AnalysisResult>>>,
}

impl AnalysisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current result, if any.
    pub async fn get(&self) -> Option<AnalysisResult> {
        self.slot.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.slot.read().await.is_none()
    }

    pub(crate) async fn set(&self, result: AnalysisResult) {
        let mut guard = self.slot.write().await;
        *guard = Some(result);
    }
}

impl std::fmt::Debug for AnalysisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisStore").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(food: &str) -> AnalysisResult {
        serde_json::from_value(serde_json::json!({ "identifiedFood": food })).unwrap()
    }

    #[tokio::test]
    async fn store_starts_empty() {
        let store = AnalysisStore::new();
        assert!(store.get().await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let store = AnalysisStore::new();
        store.set(result("Apple")).await;
        store.set(result("Banana")).await;

        let current = store.get().await.expect("value present");
        assert_eq!(current.identified_food, "Banana");
    }

    #[tokio::test]
    async fn clones_share_the_same_slot() {
        let writer = AnalysisStore::new();
        let reader = writer.clone();

        writer.set(result("Apple")).await;

        assert_eq!(
            reader.get().await.map(|r| r.identified_food),
            Some("Apple".to_string())
        );
    }

    #[tokio::test]
    async fn reads_are_repeatable_without_clearing() {
        let store = AnalysisStore::new();
        store.set(result("Apple")).await;

        assert!(store.get().await.is_some());
        assert!(store.get().await.is_some());
    }
}
