//! The shared progression store consumed by presentation collaborators.
//!
//! [`RealmStore`] wraps the [`RealmState`] machine behind a lock so every
//! command is atomic and every snapshot is consistent, and pushes a
//! [`ProgressBroadcast`] over a broadcast channel after each state change.
//! Collaborators hold the store in an [`Arc`], read via [`RealmStore::snapshot`]
//! or small projections, register as observers via [`RealmStore::subscribe`],
//! and drive progression through the command methods.
//!
//! No command can surface an error: inapplicable commands (unknown node,
//! re-activation, out-of-order click) are silent no-ops logged at debug
//! level, since the only caller is trusted UI code.

use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tracing::debug;
use xiuxian_types::{InteractionMode, NodeId, ProgressBroadcast, Realm, RealmSnapshot};

use crate::autoplay::{self, AutoplayTask, StepOutcome};
use crate::config::{AutoplayConfig, SimulatorConfig};
use crate::state::{Activation, RealmState};

/// Capacity of the broadcast channel for progress updates.
///
/// A subscriber that falls behind by more than this many messages receives
/// a lagged error and skips to the newest update.
const BROADCAST_CAPACITY: usize = 256;

/// The progression store: single owner of all progression state.
///
/// Create one per process, wrap it in an [`Arc`], and hand clones of the
/// `Arc` to every collaborator. State lives and dies with the store; there
/// is no persistence.
pub struct RealmStore {
    /// The progression state machine, lock-protected for atomic commands.
    state: RwLock<RealmState>,
    /// Broadcast sender for progress updates.
    events: broadcast::Sender<ProgressBroadcast>,
    /// The currently-running autoplay task, if any.
    autoplay: Mutex<Option<AutoplayTask>>,
    /// Autoplay timing configuration.
    autoplay_config: AutoplayConfig,
}

impl RealmStore {
    /// Create a store in the configured starting realm, manual mode,
    /// nothing activated.
    pub fn new(config: &SimulatorConfig) -> Self {
        let (events, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            state: RwLock::new(RealmState::new(config.simulator.starting_realm)),
            events,
            autoplay: Mutex::new(None),
            autoplay_config: config.autoplay.clone(),
        }
    }

    // -----------------------------------------------------------------------
    // Lock access
    //
    // Poisoning is recovered by taking the inner guard: no code path
    // panics while holding the lock, so a poisoned lock still guards a
    // consistent state.
    // -----------------------------------------------------------------------

    fn read(&self) -> RwLockReadGuard<'_, RealmState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RealmState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Switch to another realm.
    ///
    /// Stops any running autoplay, replaces nodes and paths with a fresh
    /// catalog instantiation, and resets all counters. Mode is preserved.
    pub fn switch_realm(&self, realm: Realm) {
        {
            let mut state = self.write();
            state.enter_realm(realm);
            self.publish(&state, None);
        }
        self.clear_autoplay_task();
    }

    /// Set the interaction mode. Stops any running autoplay.
    pub fn set_mode(&self, mode: InteractionMode) {
        {
            let mut state = self.write();
            state.set_mode(mode);
            self.publish(&state, None);
        }
        self.clear_autoplay_task();
    }

    /// Activate a node.
    ///
    /// Inapplicable activations (unknown id, already active, out of order
    /// in a sequential realm) are silent no-ops.
    pub fn activate_node(&self, id: &NodeId) {
        let mut state = self.write();
        match state.activate(id) {
            Activation::Applied => self.publish(&state, Some(id.clone())),
            outcome => {
                debug!(node = %id, ?outcome, "activation ignored");
            }
        }
    }

    /// Reset all progress within the current realm.
    ///
    /// Stops any running autoplay. Realm and mode are unchanged.
    pub fn reset_realm(&self) {
        {
            let mut state = self.write();
            state.reset();
            self.publish(&state, None);
        }
        self.clear_autoplay_task();
    }

    /// Start the autoplay sequencer.
    ///
    /// Sets auto mode and the animation flag, then spawns the tick loop.
    /// A no-op when already animating: the flag is the mutual-exclusion
    /// guard, so at most one sequencer runs at a time. Must be called from
    /// within a Tokio runtime.
    pub fn start_autoplay(self: &Arc<Self>) {
        let interval_ms = {
            let mut state = self.write();
            if !state.begin_autoplay() {
                debug!("autoplay already running");
                return;
            }
            self.publish(&state, None);
            self.autoplay_config.interval_ms(state.realm())
        };

        let task = autoplay::spawn(
            Arc::clone(self),
            Duration::from_millis(self.autoplay_config.start_delay_ms),
            Duration::from_millis(interval_ms),
        );
        let mut slot = self.autoplay.lock().unwrap_or_else(PoisonError::into_inner);
        // Any previous task here already finished or was cancelled
        // (begin_autoplay saw the flag down); dropping it is inert.
        *slot = Some(task);
    }

    /// Stop the autoplay sequencer.
    ///
    /// Clears the animation flag under the lock -- a tick already
    /// scheduled but not yet fired will observe the flag and leave state
    /// untouched -- then cancels the task itself.
    pub fn stop_autoplay(&self) {
        {
            let mut state = self.write();
            if state.is_animating() {
                state.set_animating(false);
                self.publish(&state, None);
            }
        }
        self.clear_autoplay_task();
    }

    /// Take one autoplay step: activate the next pending node in
    /// declaration order, or finish the run when none remain.
    ///
    /// Called only by the sequencer task. The entire step happens under
    /// the write lock, so a step and a command can never interleave.
    pub(crate) fn autoplay_step(&self) -> StepOutcome {
        let mut state = self.write();
        if !state.is_animating() {
            return StepOutcome::Cancelled;
        }
        // The run is checked for completion at tick start, so the final
        // activation is followed by one more tick that lowers the flag.
        let Some(next) = state.next_pending().map(|n| n.id.clone()) else {
            state.set_animating(false);
            self.publish(&state, None);
            return StepOutcome::Finished;
        };
        match state.activate(&next) {
            Activation::Applied => {
                self.publish(&state, Some(next));
                StepOutcome::Activated
            }
            outcome => {
                // next_pending only yields inactive nodes and autoplay
                // follows declaration order, so nothing can refuse it;
                // stop rather than spin if that ever changes.
                debug!(node = %next, ?outcome, "autoplay step refused, stopping");
                state.set_animating(false);
                self.publish(&state, None);
                StepOutcome::Finished
            }
        }
    }

    /// Drop the current autoplay task, cancelling it.
    fn clear_autoplay_task(&self) {
        let mut slot = self.autoplay.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = slot.take() {
            task.cancel();
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Take a consistent snapshot of the full progression state.
    pub fn snapshot(&self) -> RealmSnapshot {
        self.read().snapshot()
    }

    /// Subscribe to progress broadcasts.
    ///
    /// Returns a receiver that yields a [`ProgressBroadcast`] for every
    /// state change the store applies.
    pub fn subscribe(&self) -> broadcast::Receiver<ProgressBroadcast> {
        self.events.subscribe()
    }

    /// The active realm.
    pub fn current_realm(&self) -> Realm {
        self.read().realm()
    }

    /// The current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        self.read().mode()
    }

    /// Whether the autoplay sequencer is running.
    pub fn is_animating(&self) -> bool {
        self.read().is_animating()
    }

    /// Completion percentage of the active realm, in [0, 100].
    pub fn progress_percent(&self) -> Decimal {
        self.read().progress_percent()
    }

    /// Build and send a broadcast for the current state.
    ///
    /// Send only fails when no receivers are connected, which is normal.
    fn publish(&self, state: &RealmState, activated: Option<NodeId>) {
        let message = ProgressBroadcast {
            realm: state.realm(),
            mode: state.mode(),
            is_animating: state.is_animating(),
            current_step: u32::try_from(state.current_step()).unwrap_or(u32::MAX),
            total_steps: u32::try_from(state.total_steps()).unwrap_or(u32::MAX),
            progress_percent: state.progress_percent(),
            activated,
        };
        let _ = self.events.send(message);
    }
}
