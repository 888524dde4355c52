//! Shared dataset handle with a bounded asynchronous readiness wait.
//!
//! The embedding host owns the dataset and publishes it whenever its own
//! loading finishes; the widget holds a clone of the handle and only ever
//! reads. [`DatasetHandle::wait`] models the unknown load completion time
//! as a plain future with an explicit attempt/interval budget — dropping
//! the future cancels the wait.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::error::{Result, WidgetError};
use crate::types::QaItem;

/// Cloneable handle to the shared question/answer dataset.
///
/// All clones observe the same slot. The slot starts empty; `publish`
/// fills it (or replaces an earlier dataset). Readers get a cheap
/// `Arc<[QaItem]>` snapshot, so a replacement never mutates data a
/// reader already holds.
#[derive(Debug, Clone, Default)]
pub struct DatasetHandle {
    slot: Arc<RwLock<Option<Arc<[QaItem]>>>>,
}

impl DatasetHandle {
    /// Create a handle with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle whose slot is already populated.
    pub fn preloaded(items: Vec<QaItem>) -> Self {
        let handle = Self::new();
        handle.publish(items);
        handle
    }

    /// Publish a dataset, replacing any earlier one.
    pub fn publish(&self, items: Vec<QaItem>) {
        let count = items.len();
        *self.slot.write().unwrap_or_else(|e| e.into_inner()) = Some(Arc::from(items));
        tracing::debug!(count, "dataset published");
    }

    /// Parse the interchange JSON (an array of question/answer records)
    /// and publish it.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Parse`] on malformed JSON; the slot is left
    /// unchanged in that case.
    pub fn publish_json(&self, json: &str) -> Result<()> {
        let items: Vec<QaItem> =
            serde_json::from_str(json).map_err(|e| WidgetError::Parse(format!("dataset JSON: {e}")))?;
        self.publish(items);
        Ok(())
    }

    /// Snapshot of the current dataset, if published.
    pub fn get(&self) -> Option<Arc<[QaItem]>> {
        self.slot.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// True once a dataset has been published.
    pub fn is_ready(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Wait for the dataset with a bounded polling budget.
    ///
    /// Returns immediately if the slot is already populated. Otherwise
    /// sleeps `interval` between up to `max_attempts` re-checks.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::DataUnavailable`] once the budget is
    /// exhausted — never panics, never waits forever.
    pub async fn wait(&self, max_attempts: u32, interval: Duration) -> Result<Arc<[QaItem]>> {
        if let Some(items) = self.get() {
            return Ok(items);
        }

        for attempt in 1..=max_attempts {
            tokio::time::sleep(interval).await;
            if let Some(items) = self.get() {
                tracing::debug!(attempt, "dataset became available");
                return Ok(items);
            }
        }

        tracing::warn!(max_attempts, "dataset polling budget exhausted");
        Err(WidgetError::DataUnavailable(format!(
            "not published after {max_attempts} polls"
        )))
    }
}
