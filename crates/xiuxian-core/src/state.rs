//! The progression state machine for a single realm.
//!
//! [`RealmState`] is a plain synchronous struct: every transition runs to
//! completion, and every derived value (step counter, completion percent,
//! path progress) is computed from the activation list rather than stored
//! independently. The node list declaration order is the order autoplay
//! follows; the activation list preserves the order nodes were actually
//! activated in.
//!
//! # Invariants
//!
//! - The activation list holds only ids present in the node list, each at
//!   most once.
//! - A node's `activated` flag flips false to true at most once per realm
//!   instantiation; only [`RealmState::reset`] or a realm switch reverts it.
//! - Path `activated`/`progress` are recomputed after every applied
//!   activation and never set directly.
//!
//! No transition can fail: inapplicable commands report an outcome and
//! leave the state untouched.

use rust_decimal::Decimal;
use xiuxian_types::{
    AcupointNode, ActivationOrder, InteractionMode, MeridianPath, NodeId, Realm, RealmSnapshot,
};

/// Outcome of an activation attempt.
///
/// Only [`Activation::Applied`] changes state; the other outcomes identify
/// why the attempt was ignored. None of them is an error: the caller is
/// trusted UI code and an inapplicable activation indicates a stale click,
/// not a fault to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The node was activated and derived state recomputed.
    Applied,
    /// The node is already active; nothing changed.
    AlreadyActive,
    /// The realm demands sequential activation and this node is not next.
    OutOfOrder,
    /// No node with this id exists in the current realm.
    Unknown,
}

/// Progression state for the active realm.
#[derive(Debug, Clone, PartialEq)]
pub struct RealmState {
    /// The active realm.
    realm: Realm,
    /// Current interaction mode.
    mode: InteractionMode,
    /// Whether the autoplay sequencer is running.
    is_animating: bool,
    /// Which activations this realm admits next.
    order: ActivationOrder,
    /// Nodes in declaration order.
    nodes: Vec<AcupointNode>,
    /// Paths traversing the nodes.
    paths: Vec<MeridianPath>,
    /// Activated node ids in activation order.
    active_nodes: Vec<NodeId>,
}

impl RealmState {
    /// Create state for the given realm with a fresh catalog layout,
    /// manual mode, and nothing activated.
    pub fn new(realm: Realm) -> Self {
        let layout = xiuxian_realms::layout(realm);
        Self {
            realm,
            mode: InteractionMode::Manual,
            is_animating: false,
            order: xiuxian_realms::info(realm).order,
            nodes: layout.nodes,
            paths: layout.paths,
            active_nodes: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Switch to another realm (or re-enter the current one).
    ///
    /// Replaces nodes and paths with a fresh catalog instantiation, clears
    /// the activation list, and stops animation. The interaction mode is
    /// preserved. Prior progress in the previous realm is discarded, never
    /// stored for later restoration.
    pub fn enter_realm(&mut self, realm: Realm) {
        let layout = xiuxian_realms::layout(realm);
        self.realm = realm;
        self.order = xiuxian_realms::info(realm).order;
        self.nodes = layout.nodes;
        self.paths = layout.paths;
        self.active_nodes = Vec::new();
        self.is_animating = false;
    }

    /// Set the interaction mode. Stops animation.
    pub fn set_mode(&mut self, mode: InteractionMode) {
        self.mode = mode;
        self.is_animating = false;
    }

    /// Mark the start of an autoplay run: auto mode, animating.
    ///
    /// Returns `false` without changing state when already animating --
    /// `is_animating` is the mutual-exclusion flag that keeps a second
    /// sequencer from starting.
    pub fn begin_autoplay(&mut self) -> bool {
        if self.is_animating {
            return false;
        }
        self.is_animating = true;
        self.mode = InteractionMode::Auto;
        true
    }

    /// Set the animation flag directly (used when stopping autoplay).
    pub const fn set_animating(&mut self, animating: bool) {
        self.is_animating = animating;
    }

    /// Attempt to activate a node.
    ///
    /// On [`Activation::Applied`] the node is marked active, its id is
    /// appended to the activation list, and every path's `activated` and
    /// `progress` are recomputed. Any other outcome leaves the state
    /// exactly as it was.
    pub fn activate(&mut self, id: &NodeId) -> Activation {
        let Some(index) = self.nodes.iter().position(|n| n.id == *id) else {
            return Activation::Unknown;
        };
        if self.nodes.get(index).is_some_and(|n| n.activated) {
            return Activation::AlreadyActive;
        }
        if self.order == ActivationOrder::Sequential && index != self.active_nodes.len() {
            return Activation::OutOfOrder;
        }
        if let Some(node) = self.nodes.get_mut(index) {
            node.activated = true;
        }
        self.active_nodes.push(id.clone());
        self.recompute_paths();
        Activation::Applied
    }

    /// Reset all progress within the current realm.
    ///
    /// Nodes and paths return to inactive, the activation list empties,
    /// and animation stops. Realm and mode are unchanged.
    pub fn reset(&mut self) {
        for node in &mut self.nodes {
            node.activated = false;
        }
        for path in &mut self.paths {
            path.activated = false;
            path.progress = Decimal::ZERO;
        }
        self.active_nodes.clear();
        self.is_animating = false;
    }

    /// Recompute every path's `activated` flag and derived `progress`.
    ///
    /// A path's progress is `(p + 1) / len` where `p` is the highest
    /// activation-order index among the path's activated members, clamped
    /// to 1; a path with no activated member is inactive at zero.
    fn recompute_paths(&mut self) {
        let active = &self.active_nodes;
        for path in &mut self.paths {
            let mut last: Option<usize> = None;
            for node_id in &path.nodes {
                if let Some(pos) = active.iter().position(|a| a == node_id) {
                    last = Some(last.map_or(pos, |prev| prev.max(pos)));
                }
            }
            if let Some(pos) = last {
                path.activated = true;
                let completed = Decimal::from(pos.saturating_add(1));
                path.progress = completed
                    .checked_div(Decimal::from(path.nodes.len()))
                    .map_or(Decimal::ZERO, |p| p.min(Decimal::ONE));
            } else {
                path.activated = false;
                path.progress = Decimal::ZERO;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// The active realm.
    pub const fn realm(&self) -> Realm {
        self.realm
    }

    /// The current interaction mode.
    pub const fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Whether the autoplay sequencer is running.
    pub const fn is_animating(&self) -> bool {
        self.is_animating
    }

    /// The activation-order policy of the current realm.
    pub const fn order(&self) -> ActivationOrder {
        self.order
    }

    /// Nodes of the current realm in declaration order.
    pub fn nodes(&self) -> &[AcupointNode] {
        &self.nodes
    }

    /// Paths of the current realm.
    pub fn paths(&self) -> &[MeridianPath] {
        &self.paths
    }

    /// Activated node ids in activation order.
    pub fn active_nodes(&self) -> &[NodeId] {
        &self.active_nodes
    }

    /// Number of activated nodes.
    pub fn current_step(&self) -> usize {
        self.active_nodes.len()
    }

    /// Node count of the current realm.
    pub fn total_steps(&self) -> usize {
        self.nodes.len()
    }

    /// Whether every node of the realm has been activated.
    pub fn is_complete(&self) -> bool {
        !self.nodes.is_empty() && self.active_nodes.len() == self.nodes.len()
    }

    /// Completion percentage in [0, 100]; 0 for an empty realm.
    pub fn progress_percent(&self) -> Decimal {
        if self.nodes.is_empty() {
            return Decimal::ZERO;
        }
        Decimal::from(self.active_nodes.len())
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(Decimal::from(self.nodes.len())))
            .unwrap_or(Decimal::ZERO)
    }

    /// The first not-yet-activated node in declaration order, if any.
    ///
    /// This is the node autoplay activates next. Selecting by declaration
    /// order rather than by step index keeps the sequencer from stalling
    /// when a free-order manual activation lands mid-run.
    pub fn next_pending(&self) -> Option<&AcupointNode> {
        self.nodes.iter().find(|n| !n.activated)
    }

    /// Take a consistent snapshot of the full state.
    pub fn snapshot(&self) -> RealmSnapshot {
        RealmSnapshot {
            realm: self.realm,
            mode: self.mode,
            is_animating: self.is_animating,
            current_step: u32::try_from(self.active_nodes.len()).unwrap_or(u32::MAX),
            total_steps: u32::try_from(self.nodes.len()).unwrap_or(u32::MAX),
            progress_percent: self.progress_percent(),
            active_nodes: self.active_nodes.clone(),
            nodes: self.nodes.clone(),
            paths: self.paths.clone(),
        }
    }
}
