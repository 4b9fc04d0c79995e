// 👁️ Classification observers
//
// Diagnostics are a side channel: the caller decides where they go, and
// nothing an observer does can change a classification result.

use crate::classifier::{ClassifiableItem, ClassificationResult};
use tracing::debug;

pub trait ClassificationObserver: Send + Sync {
    /// Called once per classification with the final result
    fn on_classified(&self, _item: &ClassifiableItem, _result: &ClassificationResult) {}

    /// Called when an item arrives without a usable name
    fn on_empty_name(&self, _item: &ClassifiableItem) {}

    /// Called when an enrichment lookup fails or times out
    fn on_hint_failed(&self, _item: &ClassifiableItem, _reason: &str) {}
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ClassificationObserver for NoopObserver {}

/// Emits `tracing` events at debug/warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ClassificationObserver for TracingObserver {
    fn on_classified(&self, item: &ClassifiableItem, result: &ClassificationResult) {
        debug!(
            name = %item.name,
            category = %result.category_code,
            match_type = ?result.match_type,
            "classified item"
        );
    }

    fn on_empty_name(&self, item: &ClassifiableItem) {
        debug!(external_id = ?item.external_id, "item has no name, using miscellaneous category");
    }

    fn on_hint_failed(&self, item: &ClassifiableItem, reason: &str) {
        tracing::warn!(
            external_id = ?item.external_id,
            reason,
            "product lookup failed, classifying by name"
        );
    }
}
