//! The autoplay sequencer: a single cancellable timer-driven task.
//!
//! While running, the task repeatedly waits the realm's tick interval and
//! asks the store to take one autoplay step. Each step re-reads live state
//! under the store lock, so manual activations interleaved with autoplay
//! are respected, and a tick that fires after cancellation observes the
//! cleared animation flag and never mutates state. The task stops on its
//! own when the realm completes.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::store::RealmStore;

/// What a single sequencer step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StepOutcome {
    /// A node was activated; the run continues.
    Activated,
    /// Every node is active; the run is over and animation has stopped.
    Finished,
    /// Animation was stopped out from under the sequencer; the run is over.
    Cancelled,
}

/// Handle to a running autoplay task.
///
/// Cancelling (or dropping) the handle stops the task and guarantees no
/// further state mutation: the cancellation flag is checked before each
/// step, and the step itself re-checks the store's animation flag under
/// the lock.
#[derive(Debug)]
pub(crate) struct AutoplayTask {
    /// Cooperative cancellation flag shared with the task.
    cancelled: Arc<AtomicBool>,
    /// The spawned tick loop.
    handle: JoinHandle<()>,
}

impl AutoplayTask {
    /// Stop the task: raise the flag so an in-flight tick exits, and abort
    /// the pending sleep.
    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        self.handle.abort();
    }
}

impl Drop for AutoplayTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Spawn the autoplay tick loop for `store`.
///
/// Waits `start_delay` before the first step, then takes one step per
/// `interval` until the store reports the run finished or cancelled.
/// Must be called from within a Tokio runtime.
pub(crate) fn spawn(
    store: Arc<RealmStore>,
    start_delay: Duration,
    interval: Duration,
) -> AutoplayTask {
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    let handle = tokio::spawn(async move {
        tokio::time::sleep(start_delay).await;
        loop {
            if flag.load(Ordering::Acquire) {
                debug!("autoplay tick skipped after cancellation");
                return;
            }
            match store.autoplay_step() {
                StepOutcome::Activated => {}
                StepOutcome::Finished => {
                    debug!("autoplay run complete");
                    return;
                }
                StepOutcome::Cancelled => {
                    debug!("autoplay run cancelled");
                    return;
                }
            }
            tokio::time::sleep(interval).await;
        }
    });

    AutoplayTask { cancelled, handle }
}
