//! Quiet-period debouncing for input events.
//!
//! Each new event aborts and replaces the pending quiet-period timer, so
//! the action only runs once input pauses for the configured delay. Once
//! the timer fires, the action itself is spawned detached — cancelling
//! the debounce never cancels an action that has already started.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancel-and-replace scheduler for a delayed action.
///
/// Must be used within a tokio runtime; the pending timer is aborted
/// when the debouncer is dropped.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action` to run after the quiet period, replacing (and
    /// aborting) any previously scheduled action that has not started yet.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Detach: a started action always runs to completion.
            tokio::spawn(action);
        });

        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }

    /// Abort the pending timer, if any. Actions already past the quiet
    /// period are unaffected.
    pub fn cancel(&self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
