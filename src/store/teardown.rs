use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancellation signal scoping effects to the lifetime of a screen.
///
/// Cloned into every spawned effect task; once signalled, in-flight effects
/// stop without delivering their completion action.
#[derive(Clone)]
pub struct Teardown {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Teardown {
    pub fn new() -> Self {
        Self {
            torn_down: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal teardown. Idempotent.
    pub fn signal(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, signal() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the
        // notification.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_torn_down() {
            return;
        }
        notified.await;
    }
}

impl Default for Teardown {
    fn default() -> Self {
        Self::new()
    }
}
